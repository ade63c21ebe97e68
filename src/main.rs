//! Formtrack - Training Session Tracker
//!
//! 研修セッションの出欠・署名・通知を管理するCLI

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
// ライブラリAPI全体をバイナリ側でも再コンパイルするため、CLIが使わない
// コンストラクタ類の未使用警告を抑制する
#![allow(dead_code)]

use anyhow::Result;
use clap::Parser;
use std::path::Path;

// Clean Architecture layers
mod adapter;
mod application;
mod domain;
mod driver;

use adapter::config::Config;
use driver::{Args, TrainingWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (fall back to defaults when no config file exists yet)
    let config = if Path::new(&args.config).exists() {
        Config::load(&args.config)?
    } else {
        Config::default()
    };

    // Create workflow with injected dependencies
    let workflow = TrainingWorkflow::new(config);

    workflow.execute(args).await
}
