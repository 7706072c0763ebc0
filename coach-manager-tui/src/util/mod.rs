//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与页面逻辑无关的代码：
//!     mod terminal;       // 终端初始化和恢复（raw mode、备用屏幕、鼠标捕获）
//!     mod logging;        // 日志写入文件
//!
//!     pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!       否则终端会保持在原始模式，鼠标事件也会继续被捕获。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
