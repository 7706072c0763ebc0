//! 日志初始化
//!
//! 终端被 TUI 占用，日志只能写文件。
//! 核心库通过 `log` 门面输出，由 tracing-subscriber 一并收集。

use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 安装日志订阅器，级别由 `RUST_LOG` 控制（默认 info）
pub fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("创建日志目录失败: {}", dir.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("创建日志文件失败: {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .context("日志订阅器已初始化")?;

    Ok(())
}
