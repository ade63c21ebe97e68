//! # Application Settings DTO
//!
//! アプリケーション実行設定のData Transfer Object

/// アプリケーション実行設定
///
/// ワークフローとユースケースに渡される実行時設定
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// 状態ファイルのパス
    pub state_path: String,
    /// 新規セッションに割り当てるデフォルト講師名
    pub default_trainer: String,
    /// 通知ポーリングの周期（秒）
    pub poll_interval_secs: u64,
}

impl AppSettings {
    /// 新しい実行設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use formtrack::application::dto::app_config::AppSettings;
    ///
    /// let settings = AppSettings::new(
    ///     "./.formtrack/state.json".to_string(),
    ///     "Rali El kohen".to_string(),
    ///     60,
    /// );
    /// assert_eq!(settings.poll_interval_secs, 60);
    /// ```
    pub fn new(state_path: String, default_trainer: String, poll_interval_secs: u64) -> Self {
        Self {
            state_path,
            default_trainer,
            poll_interval_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_new() {
        let settings = AppSettings::new(
            "/tmp/state.json".to_string(),
            "Rali El kohen".to_string(),
            60,
        );

        assert_eq!(settings.state_path, "/tmp/state.json");
        assert_eq!(settings.default_trainer, "Rali El kohen");
        assert_eq!(settings.poll_interval_secs, 60);
    }
}
