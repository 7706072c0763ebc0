//! 演示页面
//!
//! 终端里没有服务端模板，这里用 PageBuilder 搭出一张
//! 与训练管理后台相同结构的页面。

use coach_manager_core::adapters::{MemoryDocument, PageBuilder, PageElements};
use coach_manager_core::types::Viewport;
use coach_manager_core::ControllerConfig;

/// 导航链接：(标签, 地址)
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("Dashboard", "/"),
    ("Trainer", "/coaches"),
    ("Mannschaften", "/teams"),
    ("Spielplan", "/schedule"),
    ("Einstellungen", "/settings"),
];

/// 构建演示页面
pub fn build(config: &ControllerConfig, viewport: Viewport, prefers_dark: bool) -> (MemoryDocument, PageElements) {
    let mut builder = PageBuilder::new(config, viewport);
    for (label, href) in NAV_LINKS {
        builder = builder.nav_link(label, href);
    }

    let (mut doc, elements) = builder
        // 两条会自动消失
        .flash("bg-green-100", "Training gespeichert.")
        .flash("bg-yellow-100", "Zwei Spieler haben abgesagt.")
        // 两条需要用户处理，保留
        .flash_with_button("bg-red-100", "Einheit wirklich löschen?", "Löschen")
        .flash_with_styled_link("bg-blue-100", "Neue Version verfügbar", "bg-blue-500 text-white")
        .form(&[("name", true, ""), ("email", true, ""), ("notes", false, "")])
        .search_input(&config.search.input_name)
        .build();

    doc.set_prefers_dark(prefers_dark);
    (doc, elements)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use coach_manager_core::Document;

    #[test]
    fn test_demo_page_has_every_component() {
        let config = ControllerConfig::default();
        let (doc, els) = build(&config, Viewport::new(640, 800), false);

        assert!(els.panel.is_some());
        assert!(els.overlay.is_some());
        assert!(els.menu_toggle.is_some());
        assert!(els.theme_toggle.is_some());
        assert_eq!(els.nav_links.len(), NAV_LINKS.len());
        assert_eq!(els.flash_messages.len(), 4);
        assert_eq!(els.fields.len(), 3);
        assert_eq!(els.search_inputs.len(), 1);
        assert!(!doc.prefers_dark_color_scheme());
    }
}
