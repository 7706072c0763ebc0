//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标/终端尺寸事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     handle_event 接收以下 Event 类型：
//!         Event::Key(KeyEvent)                // 键盘事件
//!         Event::Mouse(MouseEvent)            // 鼠标左键按下 → PageMessage::Click
//!         Event::Resize(columns, rows)        // 终端尺寸变化 → PageMessage::Resize
//!
//!     键盘事件：
//!         - 有输入焦点时，字符键写入字段，Esc 离开字段
//!         - 否则 m / t / o 分别模拟菜单按钮、主题按钮、设备旋转
//!
//!     鼠标坐标在 Update 层经过命中测试才变成页面元素。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
