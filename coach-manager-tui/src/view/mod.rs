//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! 只读取 Model，不修改任何状态。
//! 页面元素的可见性全部来自文档本身：
//!     · 侧栏带 open 类        → 绘制侧栏
//!     · 遮罩不带 hidden 类    → 绘制遮罩
//!     · 消息 opacity 为 0     → 暗色绘制（淡出中）
//!     · 消息已从文档移除      → 不再绘制
//!

pub mod components;
pub mod layout;
pub mod theme;

pub use layout::{render, PageLayout};
