//! ログ出力の初期化

use crate::env::LOG_VAR;
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// デフォルトのログフィルタ
const DEFAULT_FILTER: &str = "warn";

/// `RACLAUNCH_LOG` からフィルタを作成
fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// ログ出力を初期化
///
/// TUI がターミナルを使うため、対話的なコマンドではファイル指定時のみ出力する。
pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .try_init();
        return Ok(());
    }

    if interactive {
        return Ok(());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
