//! 标题栏组件

use coach_manager_core::types::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::layout::PageLayout;
use crate::view::theme::colors;

/// 渲染标题栏
pub fn render(app: &App, layout: &PageLayout, frame: &mut Frame) {
    let c = colors(app.page.theme());
    let bar = Style::default().bg(c.highlight).fg(c.selected_fg);
    frame.render_widget(Paragraph::new("").style(bar), layout.header_area);

    let button = bar.add_modifier(Modifier::BOLD);
    if let Some((_, rect)) = layout.theme_toggle {
        // 显示切换后的主题图标
        let icon = match app.page.theme() {
            Theme::Light => "[☾]",
            Theme::Dark => "[☀]",
        };
        frame.render_widget(Paragraph::new(icon).style(button), rect);
    }
    if let Some((_, rect)) = layout.menu_toggle {
        frame.render_widget(Paragraph::new("[☰]").style(button), rect);
    }

    let title_x = layout.header_area.x + 10;
    if title_x < layout.header_area.right() {
        let mut area = layout.header_area;
        area.x = title_x;
        area.width = layout.header_area.right() - title_x;
        let title = Line::from(vec![
            Span::styled("Coach Manager", bar.add_modifier(Modifier::BOLD)),
            Span::styled(format!("  {}", viewport_label(app)), bar),
        ]);
        frame.render_widget(Paragraph::new(title), area);
    }
}

/// 视口尺寸和方向
fn viewport_label(app: &App) -> String {
    let viewport = app.viewport();
    let class = viewport.class(&app.page.config().breakpoints);
    format!(
        "{}×{} px · {:?} · {:?}",
        viewport.width,
        viewport.height,
        viewport.orientation(),
        class
    )
}
