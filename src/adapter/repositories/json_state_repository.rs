//! JSON State Repository Implementation
//!
//! StateRepositoryのJSON実装（セッションと通知ログをJSONファイルで永続化）

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::repositories::state_repository::{AppState, StateRepository};

/// JSONファイルベースの状態リポジトリ
pub struct JsonStateRepository;

impl JsonStateRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ファイルから状態を読み込む（同期処理）
    fn load_sync(path: &str) -> Result<AppState> {
        let path = Path::new(path);

        if !path.exists() {
            info!("No existing state found, starting with empty state");
            return Ok(AppState::new());
        }

        let content = fs::read_to_string(path).context("Failed to read state file")?;

        let state: AppState =
            serde_json::from_str(&content).context("Failed to parse state JSON")?;

        info!(
            "Loaded state: {} sessions, {} notifications",
            state.sessions.len(),
            state.notifications.len()
        );

        Ok(state)
    }

    /// ファイルに状態を保存する（同期処理）
    fn save_sync(path: &str, state: &AppState) -> Result<()> {
        let path = Path::new(path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create state directory")?;
        }

        let json = serde_json::to_string_pretty(state).context("Failed to serialize state")?;

        fs::write(path, json).context("Failed to write state file")?;

        info!(
            "Saved state: {} sessions, {} notifications",
            state.sessions.len(),
            state.notifications.len()
        );

        Ok(())
    }
}

#[async_trait]
impl StateRepository for JsonStateRepository {
    async fn load(&self, path: &str) -> Result<AppState> {
        let path = path.to_string();
        let state = tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(state)
    }

    async fn save(&self, path: &str, state: &AppState) -> Result<()> {
        let path = path.to_string();
        let state = state.clone();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &state))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))??;

        Ok(())
    }
}

impl Default for JsonStateRepository {
    fn default() -> Self {
        Self::new()
    }
}
