//! # Objective Repository Trait
//!
//! 修了証に記載する学習目標の生成を抽象化

use anyhow::Result;
use async_trait::async_trait;

/// 学習目標生成リポジトリ
///
/// 研修名から簡潔な学習目標のリストを生成する外部コラボレーター。
/// 失敗した場合、呼び出し元は固定のデフォルト目標リストへフォールバックする
#[async_trait]
pub trait ObjectiveRepository: Send + Sync {
    /// 研修名から学習目標を生成する
    ///
    /// # Arguments
    ///
    /// * `training_name` - 研修名
    ///
    /// # Returns
    ///
    /// 学習目標の順序付きリスト
    ///
    /// # Errors
    ///
    /// 生成に失敗した場合にエラーを返す
    async fn generate_objectives(&self, training_name: &str) -> Result<Vec<String>>;
}
