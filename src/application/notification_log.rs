//! # Notification Log
//!
//! 蓄積された通知ログの所有者
//!
//! エンジンは新規通知のみを返すため、蓄積はこのログの責務。
//! 新しい通知は先頭に追加され、運用者が既読化・一括削除を行う。

use std::sync::Mutex;

use crate::domain::entities::notification::Notification;
use crate::domain::errors::DomainError;

/// 通知ログ
pub struct NotificationLog {
    entries: Mutex<Vec<Notification>>,
}

impl NotificationLog {
    /// 空のログを作成
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// 既存のエントリからログを作成
    pub fn from_entries(entries: Vec<Notification>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// 全エントリのスナップショットを返す（新しいものが先頭）
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// 新規通知を先頭に追加する（バッチ内の相対順序を保持）
    pub fn prepend(&self, new_notifications: Vec<Notification>) {
        let mut entries = self.lock();
        entries.splice(0..0, new_notifications);
    }

    /// 通知を既読にする
    ///
    /// # Errors
    ///
    /// 通知が存在しない場合に `NotFound` を返す
    pub fn mark_read(&self, notification_id: &str) -> Result<(), DomainError> {
        let mut entries = self.lock();
        let entry = entries
            .iter_mut()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| DomainError::NotFound(format!("notification '{}'", notification_id)))?;
        entry.read = true;
        Ok(())
    }

    /// すべての通知を削除する
    pub fn clear_all(&self) {
        self.lock().clear();
    }

    /// 未読件数を返す
    pub fn unread_count(&self) -> usize {
        self.lock().iter().filter(|n| !n.read).count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.entries.lock().expect("notification log lock poisoned")
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::entities::notification::NotificationKind;

    fn create_test_notification(id: &str) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Formation imminente".to_string(),
            message: "message".to_string(),
            kind: NotificationKind::Alert,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 10)
                .unwrap()
                .and_hms_opt(9, 20, 0)
                .unwrap(),
            training_id: Some("s1".to_string()),
            read: false,
        }
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let log = NotificationLog::from_entries(vec![create_test_notification("old")]);

        log.prepend(vec![
            create_test_notification("new-1"),
            create_test_notification("new-2"),
        ]);

        let entries = log.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "new-1");
        assert_eq!(entries[1].id, "new-2");
        assert_eq!(entries[2].id, "old");
    }

    #[test]
    fn test_mark_read() {
        let log = NotificationLog::from_entries(vec![
            create_test_notification("a"),
            create_test_notification("b"),
        ]);
        assert_eq!(log.unread_count(), 2);

        log.mark_read("a").unwrap();

        assert_eq!(log.unread_count(), 1);
        assert!(log.snapshot()[0].read);
    }

    #[test]
    fn test_mark_read_unknown_id() {
        let log = NotificationLog::new();

        let result = log.mark_read("missing");

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_clear_all() {
        let log = NotificationLog::from_entries(vec![
            create_test_notification("a"),
            create_test_notification("b"),
        ]);

        log.clear_all();

        assert!(log.snapshot().is_empty());
        assert_eq!(log.unread_count(), 0);
    }
}
