//! # Domain Errors
//!
//! ドメイン層のエラー分類

use thiserror::Error;

/// ドメインエラー
///
/// セッション操作で発生しうる回復可能なエラー。
/// いずれもプロセスを停止させず、呼び出し元に報告される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 対象のセッションまたは参加者が見つからない
    #[error("not found: {0}")]
    NotFound(String),

    /// 状態遷移ルールに違反する操作
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    /// 入力値の検証エラー（空の必須フィールドなど）
    #[error("validation error: {0}")]
    Validation(String),
}

impl DomainError {
    /// セッションIDに対するNotFoundエラーを作成
    pub fn session_not_found(id: &str) -> Self {
        DomainError::NotFound(format!("session '{}'", id))
    }

    /// 参加者IDに対するNotFoundエラーを作成
    pub fn participant_not_found(id: &str) -> Self {
        DomainError::NotFound(format!("participant '{}'", id))
    }
}
