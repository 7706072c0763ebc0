//! 测试辅助模块
//!
//! 提供标准页面夹具和便捷的工厂方法。

use std::time::Duration;

use crate::adapters::{MemoryDocument, PageBuilder, PageElements};
use crate::config::ControllerConfig;
use crate::types::Viewport;

/// 竖屏手机
pub const PHONE_PORTRAIT: Viewport = Viewport::new(400, 800);
/// 桌面
pub const DESKTOP: Viewport = Viewport::new(1200, 800);
/// 横屏，触发强制关闭
pub const WIDE_LANDSCAPE: Viewport = Viewport::new(1000, 500);

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// 带导航链接和三条消息（一条可自动消失，两条需要用户处理）的页面
pub fn sample_page(viewport: Viewport) -> (MemoryDocument, PageElements) {
    sample_builder(&ControllerConfig::default(), viewport).build()
}

pub fn sample_builder(config: &ControllerConfig, viewport: Viewport) -> PageBuilder {
    PageBuilder::new(config, viewport)
        .nav_link("Dashboard", "/")
        .nav_link("Aktivitäten", "/activities")
        .flash("bg-green-100", "Gespeichert.")
        .flash_with_button("bg-red-100", "Löschen bestätigen?", "OK")
        .flash_with_styled_link("bg-blue-100", "Neue Version verfügbar", "bg-blue-500 text-white")
}
