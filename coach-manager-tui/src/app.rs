//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否退出
//!     update(&mut app, AppMessage::Tick)              // 推进页面时钟
//!     if let Some(event) = poll_event() {             // 最多等待 50ms
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }
//!
//! 轮询间隔决定了定时任务的精度：提示消息会在 5000ms 后
//! 的下一次 Tick 中开始淡出，误差不超过一个间隔。

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 执行到期的定时任务
        update::update(app, AppMessage::Tick);

        // 4. 轮询事件
        if let Some(event) = event::poll_event(POLL_INTERVAL)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
