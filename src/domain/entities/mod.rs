//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **TrainingSession / Participant**: 研修セッションと参加者
//! - **Notification**: 運用者向け通知

pub mod notification;
pub mod training_session;
