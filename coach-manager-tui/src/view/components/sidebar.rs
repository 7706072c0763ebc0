//! 侧栏与遮罩组件

use coach_manager_core::Document;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::layout::PageLayout;
use crate::view::theme::colors;

/// 渲染遮罩和侧栏
pub fn render(app: &App, layout: &PageLayout, frame: &mut Frame) {
    let c = colors(app.page.theme());
    let doc = app.page.document();

    if let Some((_, rect)) = layout.overlay {
        let shade = Block::default().style(Style::default().bg(c.overlay).fg(c.muted));
        frame.render_widget(Clear, rect);
        frame.render_widget(shade, rect);
    }

    let Some((_, rect)) = layout.panel else {
        return;
    };

    let block = Block::default()
        .title(" Menü ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg));
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    for (link, row) in &layout.nav_links {
        let label = doc.text_content(*link);
        let line = Line::from(vec![
            Span::styled("▶ ", Style::default().fg(c.highlight)),
            Span::styled(label, Style::default().fg(c.fg)),
        ]);
        frame.render_widget(Paragraph::new(line), *row);
    }
}
