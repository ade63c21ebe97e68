//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **IngestConventionUseCase**: 契約書の取り込みとセッション作成
//! - **PollNotificationsUseCase**: 通知のスキャンと配信
//! - **IssueCertificateUseCase**: 修了証データの作成

pub mod ingest_convention;
pub mod issue_certificate;
pub mod poll_notifications;
