//! Gemini Adapter Modules
//!
//! Gemini API統合のためのアダプターモジュール

pub mod client;
