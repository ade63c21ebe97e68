//! # State Repository Trait
//!
//! セッションと通知ログの永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::notification::Notification;
use crate::domain::entities::training_session::TrainingSession;

/// アプリケーション状態
///
/// ホストが保持するセッションリストと通知ログのスナップショット。
/// フィールド形状はホストアプリケーションのJSONと互換
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    /// 全セッション（新しいものが先頭）
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
    /// 蓄積された通知ログ（新しいものが先頭）
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// 空の状態を作成
    pub fn new() -> Self {
        Self::default()
    }
}

/// 状態リポジトリ
///
/// アプリケーション状態の永続化を担当するリポジトリ
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// 状態を読み込む
    ///
    /// # Arguments
    ///
    /// * `path` - 状態ファイルのパス
    ///
    /// # Returns
    ///
    /// アプリケーション状態（ファイルが存在しない場合は空の状態）
    ///
    /// # Errors
    ///
    /// ファイルの読み込みに失敗した場合にエラーを返す
    async fn load(&self, path: &str) -> Result<AppState>;

    /// 状態を保存する
    ///
    /// # Arguments
    ///
    /// * `path` - 状態ファイルのパス
    /// * `state` - 保存するアプリケーション状態
    ///
    /// # Errors
    ///
    /// ファイルの書き込みに失敗した場合にエラーを返す
    async fn save(&self, path: &str, state: &AppState) -> Result<()>;
}
