//! Adapter Layer
//!
//! 外部システム（Gemini API, ファイルシステム, 通知環境）との統合

pub mod config;
pub mod gemini;
pub mod notifier;
pub mod repositories;
