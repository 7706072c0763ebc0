//! 页面消息处理

use coach_manager_core::types::{ElementId, HostEvent};
use coach_manager_core::Document;

use crate::message::PageMessage;
use crate::model::App;
use crate::view::PageLayout;

/// 处理页面消息
pub fn update(app: &mut App, msg: PageMessage) {
    match msg {
        PageMessage::Click { column, row } => {
            let layout = PageLayout::compute(&app.page, &app.elements, app.area);
            let target = layout
                .hit_test(column, row)
                .unwrap_or_else(|| app.page.document().body());
            app.focused_field = app.editable_fields().into_iter().find(|f| *f == target);
            press(app, target);
        }

        PageMessage::ToggleMenu => {
            if let Some(toggle) = app.elements.menu_toggle {
                press(app, toggle);
            }
        }

        PageMessage::ToggleTheme => {
            if let Some(toggle) = app.elements.theme_toggle {
                press(app, toggle);
                let theme = app.page.theme();
                app.set_status(format!("Theme: {theme}"));
            }
        }

        PageMessage::Rotate => {
            // 浏览器先派发 orientationchange，尺寸随后才更新
            dispatch(app, HostEvent::OrientationChange);
            app.rotated = !app.rotated;
            let viewport = app.viewport();
            app.page.document_mut().set_viewport(viewport);
            app.set_status(format!("Rotated: {}×{}", viewport.width, viewport.height));
        }

        PageMessage::Resize { columns, rows } => {
            app.area.width = columns;
            app.area.height = rows;
            let viewport = app.viewport();
            app.page.document_mut().set_viewport(viewport);
            dispatch(app, HostEvent::Resize);
        }

        PageMessage::FocusNext => {
            let fields = app.editable_fields();
            let next = match app.focused_field.and_then(|f| fields.iter().position(|x| *x == f)) {
                Some(i) => fields.get(i + 1).copied(),
                None => fields.first().copied(),
            };
            app.focused_field = next;
        }

        PageMessage::Blur => {
            app.focused_field = None;
        }

        PageMessage::Input(c) => edit_focused(app, |value| value.push(c)),

        PageMessage::Backspace => edit_focused(app, |value| {
            value.pop();
        }),

        PageMessage::Submit => submit(app),
    }
}

/// 派发一个宿主事件（已到期的计时器由控制器先行执行）
fn dispatch(app: &mut App, event: HostEvent) -> bool {
    let now = app.page_time();
    app.page.dispatch(event, now).default_prevented
}

/// 一次完整的按压：pointerdown 后紧跟 click
fn press(app: &mut App, target: ElementId) {
    dispatch(app, HostEvent::PointerDown(target));
    dispatch(app, HostEvent::Click(target));
}

/// 修改焦点字段的值并派发 input 事件
fn edit_focused(app: &mut App, edit: impl FnOnce(&mut String)) {
    let Some(field) = app.focused_field else {
        return;
    };
    let doc = app.page.document_mut();
    let mut value = doc.value(field).unwrap_or_default();
    edit(&mut value);
    doc.set_value(field, &value);
    dispatch(app, HostEvent::Input(field));
}

/// 提交第一个表单
fn submit(app: &mut App) {
    let Some(form) = app.elements.forms.first().copied() else {
        return;
    };
    if dispatch(app, HostEvent::Submit(form)) {
        let alert = app.take_new_alert();
        app.set_status(alert.unwrap_or_else(|| String::from("Submit blocked")));
    } else {
        app.set_status("Submitted");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use coach_manager_core::services::PanelState;
    use coach_manager_core::traits::InMemoryPreferenceStore;
    use coach_manager_core::types::Theme;
    use coach_manager_core::PreferenceStore;
    use ratatui::layout::Rect;

    use super::*;
    use crate::backend::AppConfig;

    /// 100×40 单元格 = 800×640 px（横屏但不足以强制关闭前先旋转）
    fn app_with_store(store: Arc<dyn PreferenceStore>) -> App {
        App::new(AppConfig::default(), store, Rect::new(0, 0, 100, 40))
    }

    fn app() -> App {
        app_with_store(Arc::new(InMemoryPreferenceStore::new()))
    }

    #[test]
    fn test_menu_key_opens_and_closes() {
        let mut app = app();
        update(&mut app, PageMessage::ToggleMenu);
        assert_eq!(app.page.panel_state(), Some(PanelState::Open));
        update(&mut app, PageMessage::ToggleMenu);
        assert_eq!(app.page.panel_state(), Some(PanelState::Closed));
    }

    #[test]
    fn test_click_on_overlay_closes_panel() {
        let mut app = app();
        update(&mut app, PageMessage::ToggleMenu);
        // 侧栏右侧是遮罩
        update(&mut app, PageMessage::Click { column: 60, row: 5 });
        assert_eq!(app.page.panel_state(), Some(PanelState::Closed));
    }

    #[test]
    fn test_click_inside_panel_keeps_it_open() {
        let mut app = app();
        update(&mut app, PageMessage::ToggleMenu);
        update(&mut app, PageMessage::Click { column: 2, row: 30 });
        assert_eq!(app.page.panel_state(), Some(PanelState::Open));
    }

    #[test]
    fn test_rotation_to_landscape_closes_after_settle() {
        let mut app = app();
        // 先转成竖屏再打开菜单
        update(&mut app, PageMessage::Rotate);
        app.page.advance(Duration::from_secs(1));
        update(&mut app, PageMessage::ToggleMenu);
        assert_eq!(app.page.panel_state(), Some(PanelState::Open));

        // 转回横屏 800×640：尺寸检查推迟执行
        update(&mut app, PageMessage::Rotate);
        assert_eq!(app.page.panel_state(), Some(PanelState::Open));
        assert!(app.page.next_deadline().is_some());

        app.page.advance(Duration::from_secs(3600));
        assert_eq!(app.page.panel_state(), Some(PanelState::Closed));
    }

    #[test]
    fn test_theme_key_persists_preference() {
        let store = Arc::new(InMemoryPreferenceStore::new());
        let mut app = app_with_store(store.clone());
        update(&mut app, PageMessage::ToggleTheme);
        assert_eq!(app.page.theme(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_submit_with_empty_required_fields_is_blocked() {
        let mut app = app();
        update(&mut app, PageMessage::Submit);
        assert_eq!(
            app.status_message.as_deref(),
            Some(app.page.config().forms.alert_message.as_str())
        );

        // 依次填写两个必填字段
        update(&mut app, PageMessage::FocusNext);
        update(&mut app, PageMessage::Input('A'));
        update(&mut app, PageMessage::FocusNext);
        update(&mut app, PageMessage::Input('a'));
        update(&mut app, PageMessage::Input('@'));
        update(&mut app, PageMessage::Backspace);
        assert_eq!(
            app.page.document().value(app.elements.fields[1]).as_deref(),
            Some("a")
        );

        update(&mut app, PageMessage::Submit);
        assert_eq!(app.status_message.as_deref(), Some("Submitted"));
    }

    #[test]
    fn test_focus_cycles_through_fields() {
        let mut app = app();
        let fields = app.editable_fields();
        for field in &fields {
            update(&mut app, PageMessage::FocusNext);
            assert_eq!(app.focused_field, Some(*field));
        }
        update(&mut app, PageMessage::FocusNext);
        assert_eq!(app.focused_field, None);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut app = app();
        update(&mut app, PageMessage::Resize { columns: 50, rows: 60 });
        assert_eq!(app.page.document().viewport().width, 400);
        assert_eq!(app.page.document().viewport().height, 960);
    }
}
