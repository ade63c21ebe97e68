//! Log Notifier Implementation
//!
//! Notifierのログ実装
//!
//! デスクトップ通知機構を持たない実行環境向けのアダプター。
//! 配信はログと標準出力への書き出しで代替する

use anyhow::Result;
use async_trait::async_trait;
use log::info;

use crate::domain::repositories::notifier::Notifier;

/// ログ出力ベースの通知アダプター
pub struct LogNotifier;

impl LogNotifier {
    /// 新しいアダプターを作成
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn deliver(&self, title: &str, body: &str) -> Result<()> {
        info!("Notification delivered: {}", title);
        println!("🔔 {} — {}", title, body);
        Ok(())
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_deliver_never_fails() {
        let notifier = LogNotifier::new();

        let result = notifier
            .deliver("Formation imminente", "La formation commence dans 15 min.")
            .await;

        assert!(result.is_ok());
    }
}
