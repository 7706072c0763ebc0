//! Coach Manager TUI
//!
//! 在终端里运行页面控制器：终端就是浏览器窗口。
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与持久化 (`backend/`)
//!
//! fn `main()` {
//!     init_logging()          // 日志写入 <config_dir>/coach-manager/tui.log
//!     load config             // <config_dir>/coach-manager/config.json
//!     open preferences        // <config_dir>/coach-manager/preferences.json
//!     init_terminal()
//!     App::new()              // 页面 DOM-ready
//!     app::run()
//!     restore_terminal()      // 无论成功与否，都恢复终端
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use ratatui::layout::Rect;

use backend::{config_dir, ConfigService, JsonPreferenceStore, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 日志
    init_logging(&config_dir().join("tui.log"))?;

    // 2. 配置与偏好存储
    let config_service = LocalConfigService::default();
    let config = config_service.load()?;
    if !config_service.path().exists() {
        // 首次运行：写出默认配置，便于用户修改
        if let Err(e) = config_service.save(&config) {
            tracing::warn!("Failed to write default config: {e:#}");
        }
    }
    let store = JsonPreferenceStore::open(JsonPreferenceStore::default_path())
        .context("打开偏好文件失败")?;
    tracing::info!(
        "Starting Coach Manager TUI (config: {})",
        config_service.path().display()
    );

    // 3. 初始化终端
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;

    // 4. 创建应用实例
    let mut app = model::App::new(
        config,
        Arc::new(store),
        Rect::new(0, 0, size.width, size.height),
    );

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    app.page.teardown();
    tracing::info!("Coach Manager TUI stopped");

    result
}
