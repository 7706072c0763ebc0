//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! 整个应用只有一张页面，页面的全部行为状态（侧栏、遮罩、
//! 提示消息、主题）都在 PageController 里，App 只额外记录
//! 终端宿主自己的状态：终端尺寸、是否旋转、输入焦点、状态栏。
//!
//!
//!     App {
//!         should_quit,            // 是否退出
//!         page,                   // PageController<MemoryDocument>
//!         elements,               // 页面元素句柄
//!         scale,                  // 单元格 → 像素
//!         area,                   // 终端区域
//!         rotated,                // 模拟设备旋转
//!         focused_field,          // 正在输入的字段
//!         status_message,         // 状态栏消息
//!     }
//!
//! 页面时间从 App 创建时开始计算（即 DOM-ready）。
//!

mod app;

pub use app::App;
