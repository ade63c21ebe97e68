//! # Notifier Trait
//!
//! 実行環境への通知配信を抽象化

use anyhow::Result;
use async_trait::async_trait;

/// 通知配信インターフェース
///
/// ベストエフォートの一方向配信。配信の失敗は通知ログから通知を
/// 取り消さない（アプリ内表示は配信結果に依存しない）。
/// 通知機構を持たない環境では no-op またはログ出力の実装を与える
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 通知を配信する
    ///
    /// # Arguments
    ///
    /// * `title` - 通知タイトル
    /// * `body` - 通知本文
    ///
    /// # Errors
    ///
    /// 配信に失敗した場合にエラーを返す（呼び出し元はリトライしない）
    async fn deliver(&self, title: &str, body: &str) -> Result<()>;
}
