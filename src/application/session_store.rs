//! # Session Store
//!
//! セッションコレクションの唯一の所有者
//!
//! すべての変更は検証済みの操作としてこのストアを経由する。
//! 各操作はロック保持中に read-modify-write を完結させるため、
//! ポーリングループが適用途中の状態を観測することはない（単一ライター規律）。
//! 検証に失敗した操作はコレクションを一切変更しない。

use std::sync::Mutex;

use chrono::NaiveDate;

use crate::domain::entities::training_session::TrainingSession;
use crate::domain::errors::DomainError;
use crate::domain::services::lifecycle::LifecycleService;

/// セッションストア
pub struct SessionStore {
    sessions: Mutex<Vec<TrainingSession>>,
}

impl SessionStore {
    /// 空のストアを作成
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }

    /// 既存のセッションリストからストアを作成
    pub fn from_sessions(sessions: Vec<TrainingSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
        }
    }

    /// 全セッションのスナップショットを返す
    pub fn list(&self) -> Vec<TrainingSession> {
        self.lock().clone()
    }

    /// IDでセッションを取得する
    ///
    /// # Errors
    ///
    /// セッションが存在しない場合に `NotFound` を返す
    pub fn get(&self, session_id: &str) -> Result<TrainingSession, DomainError> {
        self.lock()
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
            .ok_or_else(|| DomainError::session_not_found(session_id))
    }

    /// 新規セッション群をリスト先頭に追加する（バッチ内の相対順序を保持）
    pub fn create(&self, batch: Vec<TrainingSession>) {
        let mut sessions = self.lock();
        sessions.splice(0..0, batch);
    }

    /// 指定した講師のセッションを実施日の降順で返す
    pub fn list_by_trainer(&self, trainer_name: &str) -> Vec<TrainingSession> {
        let mut result: Vec<TrainingSession> = self
            .lock()
            .iter()
            .filter(|s| s.trainer_name == trainer_name)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.date.cmp(&a.date));
        result
    }

    /// 指定した日付のセッションを返す
    pub fn sessions_on(&self, date: NaiveDate) -> Vec<TrainingSession> {
        self.lock()
            .iter()
            .filter(|s| s.date == date)
            .cloned()
            .collect()
    }

    /// 参加者の署名を記録する
    pub fn sign_participant(
        &self,
        session_id: &str,
        participant_id: &str,
        signature: String,
    ) -> Result<TrainingSession, DomainError> {
        self.with_session(session_id, |session| {
            LifecycleService::sign_participant(session, participant_id, signature)
        })
    }

    /// セッションをクローズする（講師署名による確定）
    pub fn finalize(
        &self,
        session_id: &str,
        trainer_signature: String,
    ) -> Result<TrainingSession, DomainError> {
        self.with_session(session_id, |session| {
            LifecycleService::finalize(session, trainer_signature)
        })
    }

    /// 講師名を変更する
    pub fn rename_trainer(
        &self,
        session_id: &str,
        new_name: &str,
    ) -> Result<TrainingSession, DomainError> {
        self.with_session(session_id, |session| {
            LifecycleService::rename_trainer(session, new_name)
        })
    }

    /// 企業名を変更する
    pub fn rename_company(
        &self,
        session_id: &str,
        new_name: &str,
    ) -> Result<TrainingSession, DomainError> {
        self.with_session(session_id, |session| {
            LifecycleService::rename_company(session, new_name)
        })
    }

    /// 参加者を追加する
    pub fn add_participant(
        &self,
        session_id: &str,
        name: &str,
    ) -> Result<TrainingSession, DomainError> {
        self.with_session(session_id, |session| {
            LifecycleService::add_participant(session, name).map(|_| ())
        })
    }

    /// ロック保持中にセッションへ変更を適用し、更新後のコピーを返す
    fn with_session(
        &self,
        session_id: &str,
        apply: impl FnOnce(&mut TrainingSession) -> Result<(), DomainError>,
    ) -> Result<TrainingSession, DomainError> {
        let mut sessions = self.lock();
        let session = sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| DomainError::session_not_found(session_id))?;
        apply(session)?;
        Ok(session.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<TrainingSession>> {
        self.sessions.lock().expect("session store lock poisoned")
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::training_session::{Participant, TrainingStatus};

    fn create_test_session(name: &str, date: NaiveDate) -> TrainingSession {
        TrainingSession::new(
            "TechSolutions SAS",
            name,
            date,
            "Rali El kohen",
            vec![Participant::new("Alice Martin", "alice@tech.com", "Dev").unwrap()],
        )
        .unwrap()
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_create_prepends_batch_preserving_order() {
        let store = SessionStore::from_sessions(vec![create_test_session("Ancienne", date(5))]);

        store.create(vec![
            create_test_session("Jour 1", date(10)),
            create_test_session("Jour 2", date(11)),
        ]);

        let sessions = store.list();
        assert_eq!(sessions.len(), 3);
        assert_eq!(sessions[0].training_name, "Jour 1");
        assert_eq!(sessions[1].training_name, "Jour 2");
        assert_eq!(sessions[2].training_name, "Ancienne");
    }

    #[test]
    fn test_get_unknown_session() {
        let store = SessionStore::new();

        let result = store.get("missing");

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_sign_participant_through_store() {
        let session = create_test_session("Formation", date(10));
        let session_id = session.id.clone();
        let participant_id = session.participants[0].id.clone();
        let store = SessionStore::from_sessions(vec![session]);

        let updated = store
            .sign_participant(&session_id, &participant_id, "sig-1".to_string())
            .unwrap();

        assert!(updated.participants[0].has_signed);
        // ストア内の状態も更新されている
        assert!(store.get(&session_id).unwrap().participants[0].has_signed);
    }

    #[test]
    fn test_failed_mutation_leaves_store_untouched() {
        let mut session = create_test_session("Formation", date(10));
        session.status = TrainingStatus::Completed;
        session.trainer_signature = Some("sig".to_string());
        let session_id = session.id.clone();
        let store = SessionStore::from_sessions(vec![session.clone()]);

        let result = store.finalize(&session_id, "other".to_string());

        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
        assert_eq!(store.get(&session_id).unwrap(), session);
    }

    #[test]
    fn test_mutation_on_unknown_session() {
        let store = SessionStore::new();

        let result = store.rename_trainer("missing", "Marie Curie");

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_list_by_trainer_sorted_by_date_desc() {
        let mut other = create_test_session("Autre", date(20));
        other.trainer_name = "Marie Curie".to_string();
        let store = SessionStore::from_sessions(vec![
            create_test_session("A", date(5)),
            other,
            create_test_session("B", date(15)),
        ]);

        let mine = store.list_by_trainer("Rali El kohen");

        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].training_name, "B");
        assert_eq!(mine[1].training_name, "A");
    }

    #[test]
    fn test_sessions_on_filters_by_date() {
        let store = SessionStore::from_sessions(vec![
            create_test_session("A", date(5)),
            create_test_session("B", date(5)),
            create_test_session("C", date(6)),
        ]);

        let on_fifth = store.sessions_on(date(5));

        assert_eq!(on_fifth.len(), 2);
    }

    #[test]
    fn test_finalize_then_rename_rolls_back() {
        let session = create_test_session("Formation", date(10));
        let session_id = session.id.clone();
        let store = SessionStore::from_sessions(vec![session]);

        store.finalize(&session_id, "sig-t".to_string()).unwrap();
        let updated = store.rename_trainer(&session_id, "Marie Curie").unwrap();

        assert_eq!(updated.status, TrainingStatus::InProgress);
        assert!(updated.trainer_signature.is_none());
    }
}
