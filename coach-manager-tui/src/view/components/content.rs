//! 主内容组件：提示消息、表单字段、搜索框

use coach_manager_core::types::ElementId;
use coach_manager_core::Document;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::layout::PageLayout;
use crate::view::theme::{colors, FlashTone, Styles, ThemeColors};

/// 渲染主内容
pub fn render(app: &App, layout: &PageLayout, frame: &mut Frame) {
    let Some((_, area)) = layout.main else {
        return;
    };
    let c = colors(app.page.theme());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border))
        .style(Style::default().bg(c.bg).fg(c.fg));
    frame.render_widget(block, area);

    for (flash, row) in &layout.flashes {
        frame.render_widget(Paragraph::new(flash_line(app, *flash, &c)), *row);
    }

    for (field, row) in &layout.fields {
        frame.render_widget(Paragraph::new(field_line(app, *field, &c)), *row);
    }
}

/// 单条提示消息
fn flash_line(app: &App, flash: ElementId, c: &ThemeColors) -> Line<'static> {
    let doc = app.page.document();
    let class = doc.attribute(flash, "class").unwrap_or_default();
    let tone = FlashTone::from_class(&class);

    let fading = doc.style(flash, "opacity").as_deref() == Some("0");
    let style = if fading {
        Styles::fading(c)
    } else {
        Style::default().fg(c.flash(tone)).add_modifier(Modifier::BOLD)
    };

    Line::from(vec![
        Span::styled("● ", style),
        Span::styled(doc.text_content(flash), style),
    ])
}

/// 单个输入字段
fn field_line(app: &App, field: ElementId, c: &ThemeColors) -> Line<'static> {
    let doc = app.page.document();
    let name = doc.attribute(field, "name").unwrap_or_default();
    let required = doc.attribute(field, "required").is_some();
    let invalid = doc.has_class(field, &app.page.config().forms.invalid_class);
    let focused = app.focused_field == Some(field);

    let label_style = if invalid {
        Style::default().fg(c.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if focused {
        Style::default().bg(c.selected_bg).fg(c.selected_fg)
    } else {
        Style::default().fg(c.fg)
    };

    let mut value = doc.value(field).unwrap_or_default();
    if focused {
        value.push('▏');
    }

    Line::from(vec![
        Span::styled(format!("{name}{}: ", if required { "*" } else { "" }), label_style),
        Span::styled(format!("[{value}]"), value_style),
    ])
}
