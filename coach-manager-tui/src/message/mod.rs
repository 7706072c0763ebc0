//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 键盘、鼠标、终端尺寸变化都先翻译成 Message，
//! Update 层再把它们变成发给页面的 HostEvent。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息
//!         mod page;           // 页面子消息
//!
//!         pub use app::AppMessage;
//!         pub use page::PageMessage;
//!
//!
//!     pub enum AppMessage {
//!         Quit,                   // 退出应用
//!         Tick,                   // 时钟推进，触发到期的定时任务
//!         Page(PageMessage),      // 页面子消息
//!         ClearStatus,            // 清除状态栏消息
//!         Noop,                   // 无操作
//!     }
//!

mod app;
mod page;

pub use app::AppMessage;
pub use page::PageMessage;
