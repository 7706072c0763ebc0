//! 底部状态栏组件

use coach_manager_core::CoachManager;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors(app.page.theme());
    let hints = get_hints(app);

    let mut spans = Vec::new();
    spans.push(Span::styled(format!(" {} ", clock()), Styles::hint_key()));

    for (key, desc) in hints {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    // 状态消息显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar(&c));
    frame.render_widget(paragraph, area);
}

/// 当前时间 HH:MM
fn clock() -> String {
    let now = CoachManager::current_time();
    CoachManager::format_time(&format!("{}:{}", now.hours, now.minutes))
        .unwrap_or_else(|_| String::from("--:--"))
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.focused_field.is_some() {
        return vec![
            ("Tab", "Next field"),
            ("Enter", "Submit"),
            ("Esc", "Leave field"),
        ];
    }

    vec![
        ("m", "Menu"),
        ("t", "Theme"),
        ("o", "Rotate"),
        ("Tab", "Edit"),
        ("Enter", "Submit"),
        ("q", "Quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_zero_padded() {
        let text = clock();
        assert_eq!(text.len(), 5);
        assert_eq!(&text[2..3], ":");
    }
}
