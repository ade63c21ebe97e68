//! # Ingest Convention Use Case
//!
//! 契約書の取り込みとセッション作成のユースケース

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::application::session_store::SessionStore;
use crate::domain::entities::training_session::TrainingSession;
use crate::domain::repositories::intake_repository::IntakeRepository;
use crate::domain::services::planning::SessionPlanner;

/// 契約書取り込みユースケース
///
/// ドキュメントを解析してセッション群を作成し、ストアへ登録する。
/// 解析または展開に失敗した場合、セッションは1件も作成されない
pub struct IngestConventionUseCase<I: IntakeRepository> {
    intake_repository: Arc<I>,
    store: Arc<SessionStore>,
}

impl<I: IntakeRepository> IngestConventionUseCase<I> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `intake_repository` - 抽出リポジトリ
    /// * `store` - セッションストア
    pub fn new(intake_repository: Arc<I>, store: Arc<SessionStore>) -> Self {
        Self {
            intake_repository,
            store,
        }
    }

    /// ドキュメントを取り込んでセッションを作成する
    ///
    /// # Arguments
    ///
    /// * `document` - ドキュメントの生バイト列
    /// * `mime_type` - ドキュメントのMIMEタイプ
    /// * `default_trainer` - 新規セッションに割り当てる講師名
    /// * `today` - 日付が抽出されなかった場合のフォールバック日付
    ///
    /// # Returns
    ///
    /// 作成されたセッションのリスト（ストア登録済み）
    ///
    /// # Errors
    ///
    /// 抽出または検証に失敗した場合にエラーを返す
    pub async fn execute(
        &self,
        document: &[u8],
        mime_type: &str,
        default_trainer: &str,
        today: NaiveDate,
    ) -> Result<Vec<TrainingSession>> {
        let data = self
            .intake_repository
            .parse_convention(document, mime_type)
            .await?;

        let sessions = SessionPlanner::expand(&data, default_trainer, today)?;

        self.store.create(sessions.clone());
        Ok(sessions)
    }
}
