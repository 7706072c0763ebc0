//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! 唯一可以修改 Model 的地方。
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Quit        => app.should_quit = true,
//!             AppMessage::Tick        => 推进页面时钟，执行到期的定时任务
//!             AppMessage::Page(msg)   => page::update(app, msg),   // 翻译为 HostEvent
//!             ...
//!         }
//!     }
//!
//! 页面的所有行为都由 PageController 决定，这里只负责
//! 把终端输入翻译成宿主事件（点击、按下、尺寸变化、旋转、提交、输入）。
//!

mod page;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Tick => {
            let now = app.page_time();
            app.page.advance(now);
        }

        AppMessage::Page(page_msg) => {
            page::update(app, page_msg);
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}
