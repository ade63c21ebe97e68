//! # Domain Services
//!
//! 状態を持たないビジネスルールの実装
//!
//! ## サービス
//!
//! - **LifecycleService**: セッション状態遷移と副作用
//! - **NotificationEngine**: 時刻ウィンドウに基づく通知導出と重複排除
//! - **SessionPlanner**: 抽出データから複数日セッションへの展開

pub mod lifecycle;
pub mod notification_rules;
pub mod planning;
