//! # Issue Certificate Use Case
//!
//! 修了証データ作成のユースケース

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use log::warn;

use crate::application::session_store::SessionStore;
use crate::domain::entities::training_session::TrainingStatus;
use crate::domain::errors::DomainError;
use crate::domain::repositories::objective_repository::ObjectiveRepository;

/// 修了証の研修時間（出席表テンプレートに準拠）
const DEFAULT_DURATION: &str = "7h";

/// 目標生成が失敗した場合のデフォルト学習目標
const DEFAULT_OBJECTIVES: [&str; 4] = [
    "Acquérir les compétences clés liées à la formation",
    "Comprendre les enjeux théoriques et pratiques",
    "Mettre en œuvre les stratégies apprises",
    "Autonomie sur les outils présentés",
];

/// 修了証データ
///
/// 印刷用テンプレートに渡される読み取り専用のビュー
#[derive(Debug, Clone)]
pub struct CertificateData {
    pub participant_name: String,
    pub company_name: String,
    pub training_name: String,
    pub date: NaiveDate,
    pub duration: String,
    pub objectives: Vec<String>,
}

/// 修了証発行ユースケース
///
/// クローズ済みセッションの署名済み参加者に対して修了証データを作成する。
/// 学習目標の生成に失敗した場合は固定のデフォルトリストへフォールバックし、
/// 発行自体は妨げない
pub struct IssueCertificateUseCase<O: ObjectiveRepository> {
    store: Arc<SessionStore>,
    objective_repository: Arc<O>,
}

impl<O: ObjectiveRepository> IssueCertificateUseCase<O> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `store` - セッションストア
    /// * `objective_repository` - 学習目標生成リポジトリ
    pub fn new(store: Arc<SessionStore>, objective_repository: Arc<O>) -> Self {
        Self {
            store,
            objective_repository,
        }
    }

    /// 修了証データを作成する
    ///
    /// # Arguments
    ///
    /// * `session_id` - 対象セッションのID
    /// * `participant_id` - 対象参加者のID
    ///
    /// # Errors
    ///
    /// セッションまたは参加者が存在しない場合、セッションが未クローズの場合、
    /// あるいは参加者が未署名の場合にエラーを返す
    pub async fn execute(
        &self,
        session_id: &str,
        participant_id: &str,
    ) -> Result<CertificateData> {
        let session = self.store.get(session_id)?;

        if session.status != TrainingStatus::Completed {
            return Err(DomainError::InvalidTransition(format!(
                "session '{}' is not completed",
                session_id
            ))
            .into());
        }

        let participant = session
            .participant(participant_id)
            .ok_or_else(|| DomainError::participant_not_found(participant_id))?;

        if !participant.has_signed {
            return Err(DomainError::InvalidTransition(format!(
                "participant '{}' has not signed",
                participant_id
            ))
            .into());
        }

        let objectives = match self
            .objective_repository
            .generate_objectives(&session.training_name)
            .await
        {
            Ok(objectives) if !objectives.is_empty() => objectives,
            Ok(_) => default_objectives(),
            Err(e) => {
                warn!(
                    "Objective generation failed for '{}', using defaults: {}",
                    session.training_name, e
                );
                default_objectives()
            }
        };

        Ok(CertificateData {
            participant_name: participant.name.clone(),
            company_name: session.company_name.clone(),
            training_name: session.training_name.clone(),
            date: session.date,
            duration: DEFAULT_DURATION.to_string(),
            objectives,
        })
    }
}

fn default_objectives() -> Vec<String> {
    DEFAULT_OBJECTIVES.iter().map(|s| s.to_string()).collect()
}
