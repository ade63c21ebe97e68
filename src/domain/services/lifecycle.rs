//! # Lifecycle Service
//!
//! セッション状態遷移のビジネスルール
//!
//! 遷移は SCHEDULED → IN_PROGRESS → COMPLETED の一方向。ARCHIVED は終端状態。
//! 唯一の逆行は講師名変更による COMPLETED → IN_PROGRESS の巻き戻し
//! （記録された名前と署名の不一致を防ぐため）。
//! すべての操作は all-or-nothing：検証に失敗した場合、状態は一切変更されない。

use crate::domain::entities::training_session::{Participant, TrainingSession, TrainingStatus};
use crate::domain::errors::DomainError;

/// セッション状態遷移サービス
///
/// セッションのライフサイクルに対する正当な遷移と、
/// 編集操作が引き起こす副作用（署名クリア）を一元管理する
pub struct LifecycleService;

impl LifecycleService {
    /// セッションをクローズする（講師署名による確定）
    ///
    /// 全参加者の署名は必須ではない（欠席者は出席表上で欠席と記録される）
    ///
    /// # Arguments
    ///
    /// * `session` - 対象セッション
    /// * `trainer_signature` - 講師の署名データ
    ///
    /// # Errors
    ///
    /// 既にCOMPLETED、またはARCHIVED（終端状態）の場合に
    /// `InvalidTransition` を返す
    pub fn finalize(
        session: &mut TrainingSession,
        trainer_signature: String,
    ) -> Result<(), DomainError> {
        match session.status {
            TrainingStatus::Completed => {
                return Err(DomainError::InvalidTransition(format!(
                    "session '{}' is already completed",
                    session.id
                )));
            }
            TrainingStatus::Archived => {
                return Err(DomainError::InvalidTransition(format!(
                    "session '{}' is archived",
                    session.id
                )));
            }
            TrainingStatus::Scheduled | TrainingStatus::InProgress => {}
        }

        session.status = TrainingStatus::Completed;
        session.trainer_signature = Some(trainer_signature);
        Ok(())
    }

    /// 講師名を変更する
    ///
    /// クローズ済みセッションの講師名が変わった場合、既存の署名は
    /// 新しい名前を証明しないため、署名をクリアして IN_PROGRESS に戻す。
    /// 名前が同一の場合は副作用なし。
    ///
    /// # Errors
    ///
    /// 新しい名前が空白の場合に `Validation` を返す
    pub fn rename_trainer(
        session: &mut TrainingSession,
        new_name: &str,
    ) -> Result<(), DomainError> {
        if new_name.trim().is_empty() {
            return Err(DomainError::Validation("trainer name is empty".to_string()));
        }

        if new_name == session.trainer_name {
            return Ok(());
        }

        session.trainer_name = new_name.to_string();
        if session.status == TrainingStatus::Completed {
            session.trainer_signature = None;
            session.status = TrainingStatus::InProgress;
        }
        Ok(())
    }

    /// 企業名を変更する（状態・署名への副作用なし）
    ///
    /// # Errors
    ///
    /// 新しい名前が空白の場合に `Validation` を返す
    pub fn rename_company(
        session: &mut TrainingSession,
        new_name: &str,
    ) -> Result<(), DomainError> {
        if new_name.trim().is_empty() {
            return Err(DomainError::Validation("company name is empty".to_string()));
        }

        session.company_name = new_name.to_string();
        Ok(())
    }

    /// 参加者の署名を記録する
    ///
    /// 署名と同時に出席扱いとなる。既に署名済みの参加者に対しては
    /// 何も変更しない（署名の差し替えはこの操作では許可されない）
    ///
    /// # Errors
    ///
    /// セッションがCOMPLETEDの場合に `InvalidTransition`、
    /// 参加者が存在しない場合に `NotFound` を返す
    pub fn sign_participant(
        session: &mut TrainingSession,
        participant_id: &str,
        signature: String,
    ) -> Result<(), DomainError> {
        if session.status == TrainingStatus::Completed {
            return Err(DomainError::InvalidTransition(format!(
                "session '{}' is already completed",
                session.id
            )));
        }

        let participant = session
            .participants
            .iter_mut()
            .find(|p| p.id == participant_id)
            .ok_or_else(|| DomainError::participant_not_found(participant_id))?;

        if participant.has_signed {
            return Ok(());
        }

        participant.has_signed = true;
        participant.is_present = true;
        participant.signature = Some(signature);
        Ok(())
    }

    /// 参加者を追加する
    ///
    /// メール・役職は空で、未署名状態で末尾に追加される
    ///
    /// # Arguments
    ///
    /// * `session` - 対象セッション
    /// * `name` - 参加者名
    ///
    /// # Returns
    ///
    /// 追加された参加者のID
    ///
    /// # Errors
    ///
    /// セッションがCOMPLETEDの場合に `InvalidTransition`、
    /// 名前が空白の場合に `Validation` を返す
    pub fn add_participant(
        session: &mut TrainingSession,
        name: &str,
    ) -> Result<String, DomainError> {
        if session.status == TrainingStatus::Completed {
            return Err(DomainError::InvalidTransition(format!(
                "session '{}' is already completed",
                session.id
            )));
        }

        let participant = Participant::new(name, "", "")?;
        let id = participant.id.clone();
        session.participants.push(participant);
        Ok(id)
    }
}
