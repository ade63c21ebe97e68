//! # Intake Repository Trait
//!
//! 研修契約書（コンベンション）からの構造化データ抽出を抽象化

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 抽出された参加者情報
///
/// email と role は抽出結果に含まれない場合があるため空文字を既定とする
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantDraft {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// 契約書から抽出された研修データ
///
/// 複数日の研修は `dates` に全日付が含まれる（ISO 8601 順序保持）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConventionData {
    pub company_name: String,
    pub training_name: String,
    pub dates: Vec<NaiveDate>,
    pub participants: Vec<ParticipantDraft>,
}

/// 契約書抽出リポジトリ
///
/// アップロードされたドキュメントから研修データを抽出する外部コラボレーター
#[async_trait]
pub trait IntakeRepository: Send + Sync {
    /// ドキュメントを解析して研修データを抽出する
    ///
    /// # Arguments
    ///
    /// * `document` - ドキュメントの生バイト列
    /// * `mime_type` - ドキュメントのMIMEタイプ
    ///
    /// # Returns
    ///
    /// 抽出された研修データ
    ///
    /// # Errors
    ///
    /// 解析に失敗した場合にエラーを返す。その場合セッションは作成されない
    async fn parse_convention(&self, document: &[u8], mime_type: &str) -> Result<ConventionData>;
}
