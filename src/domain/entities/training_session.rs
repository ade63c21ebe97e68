//! # TrainingSession Entity
//!
//! 研修セッションのドメインエンティティ

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// 開始時刻が未指定の場合のデフォルト（出席表テンプレートに準拠）
pub fn default_start_time() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).expect("09:30 is a valid time of day")
}

/// `startTime` フィールド用のカスタムシリアライズ
///
/// ホストアプリケーションのJSONは時刻を "HH:MM" 形式の文字列で持つため、
/// chrono標準の "HH:MM:SS" ではなく分単位までの表現に揃える
mod hhmm_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(t) => serializer.serialize_some(&t.format("%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw {
            Some(s) => NaiveTime::parse_from_str(&s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}

/// セッションのライフサイクル状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingStatus {
    Scheduled,
    InProgress,
    Completed,
    Archived,
}

/// 研修参加者
///
/// 署名操作によってのみ変更される。`has_signed` が真であれば
/// `signature` が存在し `is_present` も真である（不変条件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub has_signed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub is_present: bool,
}

impl Participant {
    /// 新しい参加者を作成（未署名・欠席状態で初期化）
    ///
    /// # Arguments
    ///
    /// * `name` - 参加者名
    /// * `email` - メールアドレス（空でも可）
    /// * `role` - 役職（空でも可）
    ///
    /// # Errors
    ///
    /// 名前が空白の場合にエラーを返す
    pub fn new(name: &str, email: &str, role: &str) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::Validation(
                "participant name is empty".to_string(),
            ));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            has_signed: false,
            signature: None,
            is_present: false,
        })
    }
}

/// 研修セッションのドメインエンティティ
///
/// 1社・1日付に対する研修の1回の実施を表す
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: String,
    pub company_name: String,
    pub training_name: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm_time", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    pub status: TrainingStatus,
    pub trainer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_signature: Option<String>,
    pub participants: Vec<Participant>,
}

impl TrainingSession {
    /// 新しいセッションを作成（SCHEDULED状態で初期化）
    ///
    /// # Arguments
    ///
    /// * `company_name` - 顧客企業名
    /// * `training_name` - 研修名
    /// * `date` - 実施日
    /// * `trainer_name` - 担当講師名
    /// * `participants` - 参加者リスト
    ///
    /// # Errors
    ///
    /// 企業名・研修名・講師名のいずれかが空白の場合にエラーを返す
    pub fn new(
        company_name: &str,
        training_name: &str,
        date: NaiveDate,
        trainer_name: &str,
        participants: Vec<Participant>,
    ) -> Result<Self, DomainError> {
        if company_name.trim().is_empty() {
            return Err(DomainError::Validation("company name is empty".to_string()));
        }
        if training_name.trim().is_empty() {
            return Err(DomainError::Validation(
                "training name is empty".to_string(),
            ));
        }
        if trainer_name.trim().is_empty() {
            return Err(DomainError::Validation("trainer name is empty".to_string()));
        }

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            company_name: company_name.to_string(),
            training_name: training_name.to_string(),
            date,
            start_time: None,
            status: TrainingStatus::Scheduled,
            trainer_name: trainer_name.to_string(),
            trainer_signature: None,
            participants,
        })
    }

    /// セッションの開始日時を返す
    ///
    /// 開始時刻が未指定の場合は 09:30 とみなす
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date
            .and_time(self.start_time.unwrap_or_else(default_start_time))
    }

    /// 署名済み参加者の数
    pub fn signed_count(&self) -> usize {
        self.participants.iter().filter(|p| p.has_signed).count()
    }

    /// 署名の進捗率（0〜100、参加者なしの場合は0）
    pub fn signature_progress(&self) -> u32 {
        if self.participants.is_empty() {
            return 0;
        }
        (self.signed_count() as f64 / self.participants.len() as f64 * 100.0).round() as u32
    }

    /// IDから参加者への参照を取得
    pub fn participant(&self, participant_id: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }
}
