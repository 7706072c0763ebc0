//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PageMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event),
        Event::Resize(columns, rows) => AppMessage::Page(PageMessage::Resize { columns, rows }),
        _ => AppMessage::Noop,
    }
}

/// 处理鼠标事件：只关心左键按下
fn handle_mouse_event(mouse: MouseEvent) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => AppMessage::Page(PageMessage::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 有输入焦点时，字符键全部进入字段
    if app.focused_field.is_some() {
        return handle_input_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::TOGGLE_MENU.matches(&key) {
        return AppMessage::Page(PageMessage::ToggleMenu);
    }
    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::Page(PageMessage::ToggleTheme);
    }
    if DefaultKeymap::ROTATE.matches(&key) {
        return AppMessage::Page(PageMessage::Rotate);
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::Page(PageMessage::FocusNext);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Page(PageMessage::Submit);
    }
    if DefaultKeymap::BLUR.matches(&key) {
        return AppMessage::ClearStatus;
    }

    AppMessage::Noop
}

/// 输入焦点下的按键
fn handle_input_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BLUR.matches(&key) {
        return AppMessage::Page(PageMessage::Blur);
    }
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::Page(PageMessage::FocusNext);
    }
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Page(PageMessage::Submit);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Page(PageMessage::Backspace),
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Page(PageMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}
