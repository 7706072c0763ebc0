//! 主题和样式定义
//!
//! 配色跟随页面当前的主题（根元素是否带 dark 类），
//! 不单独保存状态。

use coach_manager_core::types::Theme;
use ratatui::style::{Color, Modifier, Style};

/// 获取主题的颜色方案
pub fn colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => ThemeColors::dark(),
        Theme::Light => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub muted: Color,
    /// 遮罩层背景
    pub overlay: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(30, 30, 30),
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(0, 122, 204),
            highlight: Color::Rgb(0, 122, 204),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            success: Color::Rgb(78, 201, 176),
            warning: Color::Rgb(206, 145, 120),
            error: Color::Rgb(244, 135, 113),
            info: Color::Rgb(86, 156, 214),
            muted: Color::Rgb(128, 128, 128),
            overlay: Color::Rgb(10, 10, 10),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(0, 102, 204),
            highlight: Color::Rgb(0, 102, 204),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            success: Color::Rgb(34, 134, 58),
            warning: Color::Rgb(176, 136, 0),
            error: Color::Rgb(215, 58, 73),
            info: Color::Rgb(3, 102, 214),
            muted: Color::Rgb(128, 128, 128),
            overlay: Color::Rgb(110, 110, 110),
        }
    }

    /// 提示消息按背景类取色
    pub fn flash(&self, tone: FlashTone) -> Color {
        match tone {
            FlashTone::Success => self.success,
            FlashTone::Warning => self.warning,
            FlashTone::Error => self.error,
            FlashTone::Info => self.info,
        }
    }
}

/// 提示消息的色调
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashTone {
    Success,
    Warning,
    Error,
    Info,
}

impl FlashTone {
    /// 由 `bg-*-100` / `bg-*-900` 类名推断
    pub fn from_class(class: &str) -> Self {
        if class.contains("green") {
            Self::Success
        } else if class.contains("yellow") {
            Self::Warning
        } else if class.contains("red") {
            Self::Error
        } else {
            Self::Info
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 状态栏样式
    pub fn statusbar(c: &ThemeColors) -> Style {
        Style::default().bg(c.highlight).fg(c.selected_fg)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(180, 180, 180))
    }

    /// 正在淡出的消息
    pub fn fading(c: &ThemeColors) -> Style {
        Style::default().fg(c.muted).add_modifier(Modifier::DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_tone_from_class() {
        assert_eq!(FlashTone::from_class("bg-green-100"), FlashTone::Success);
        assert_eq!(FlashTone::from_class("bg-yellow-900"), FlashTone::Warning);
        assert_eq!(FlashTone::from_class("bg-red-100"), FlashTone::Error);
        assert_eq!(FlashTone::from_class("bg-blue-100"), FlashTone::Info);
    }
}
