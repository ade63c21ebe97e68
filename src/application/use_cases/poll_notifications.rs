//! # Poll Notifications Use Case
//!
//! 通知スキャンと配信のユースケース

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDateTime;
use log::warn;

use crate::application::notification_log::NotificationLog;
use crate::application::session_store::SessionStore;
use crate::domain::entities::notification::Notification;
use crate::domain::repositories::notifier::Notifier;
use crate::domain::services::notification_rules::NotificationEngine;

/// 通知ポーリングユースケース
///
/// ストアのスナップショットと既存ログからエンジンで新規通知を導出し、
/// ログへ追加したうえで1通ずつ配信する。配信はベストエフォートであり、
/// 失敗してもログから通知は取り消されない
pub struct PollNotificationsUseCase<N: Notifier> {
    store: Arc<SessionStore>,
    log: Arc<NotificationLog>,
    notifier: Arc<N>,
}

impl<N: Notifier> PollNotificationsUseCase<N> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `store` - セッションストア
    /// * `log` - 通知ログ
    /// * `notifier` - 配信インターフェース
    pub fn new(store: Arc<SessionStore>, log: Arc<NotificationLog>, notifier: Arc<N>) -> Self {
        Self {
            store,
            log,
            notifier,
        }
    }

    /// 1回のポーリングを実行する
    ///
    /// # Arguments
    ///
    /// * `now` - 現在時刻（ローカル時刻）
    ///
    /// # Returns
    ///
    /// 今回新規に導出された通知のリスト
    pub async fn execute(&self, now: NaiveDateTime) -> Result<Vec<Notification>> {
        let sessions = self.store.list();
        let existing = self.log.snapshot();

        let new_notifications = NotificationEngine::check(&sessions, &existing, now);
        if new_notifications.is_empty() {
            return Ok(Vec::new());
        }

        self.log.prepend(new_notifications.clone());

        // 新規通知はそれぞれちょうど1回だけ配信する
        for notification in &new_notifications {
            if let Err(e) = self
                .notifier
                .deliver(&notification.title, &notification.message)
                .await
            {
                warn!("Failed to deliver notification '{}': {}", notification.id, e);
            }
        }

        Ok(new_notifications)
    }
}
