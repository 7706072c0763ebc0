//! 页面组件

pub mod content;
pub mod header;
pub mod sidebar;
pub mod statusbar;
