//! # Data Transfer Objects
//!
//! 層間で受け渡される設定・データの入れ物

pub mod app_config;
