//! 主布局
//!
//! `PageLayout` 是纯几何计算：渲染和鼠标命中测试共用同一份结果，
//! 保证“看到的”和“点到的”一致。
//!
//!     ┌──────────────────────────────────────────┐
//!     │ [☾] [☰]  Coach Manager                   │  标题栏（header）
//!     ├────────────┬─────────────────────────────┤
//!     │ 侧栏       │ 遮罩（可见时）              │
//!     │ (panel)    │ ┌ 主内容 ──────────────────┐│
//!     │            │ │ 提示消息 / 表单 / 搜索   ││
//!     │            │ └──────────────────────────┘│
//!     ├────────────┴─────────────────────────────┤
//!     │ 状态栏                                   │
//!     └──────────────────────────────────────────┘

use coach_manager_core::adapters::{MemoryDocument, PageElements};
use coach_manager_core::types::ElementId;
use coach_manager_core::{Document, PageController};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    widgets::Block,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::App;

use super::components;

/// 侧栏内边距：左右边框 + "▶ " 前缀 + 右侧留白
const PANEL_PADDING: usize = 6;

/// 一帧的页面几何
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub header_area: Rect,
    pub header: Option<ElementId>,
    pub theme_toggle: Option<(ElementId, Rect)>,
    pub menu_toggle: Option<(ElementId, Rect)>,
    /// 标题栏与状态栏之间的区域
    pub body: Rect,
    pub main: Option<(ElementId, Rect)>,
    pub flashes: Vec<(ElementId, Rect)>,
    pub fields: Vec<(ElementId, Rect)>,
    pub panel: Option<(ElementId, Rect)>,
    pub nav_links: Vec<(ElementId, Rect)>,
    pub overlay: Option<(ElementId, Rect)>,
    pub status: Rect,
}

impl PageLayout {
    /// 按文档当前状态计算几何
    pub fn compute(page: &PageController<MemoryDocument>, elements: &PageElements, area: Rect) -> Self {
        let doc = page.document();
        let nav = &page.config().navigation;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 标题栏
                Constraint::Min(1),    // 页面主体
                Constraint::Length(1), // 状态栏
            ])
            .split(area);
        let (header_area, body, status) = (rows[0], rows[1], rows[2]);

        let mut layout = Self {
            header_area,
            header: elements.header,
            body,
            status,
            ..Self::default()
        };

        // 标题栏按钮：每个占 3 列，间隔 1 列
        let toggles = [elements.theme_toggle, elements.menu_toggle];
        for (slot, element) in toggles.into_iter().enumerate() {
            let Some(element) = element.filter(|el| doc.is_attached(*el)) else {
                continue;
            };
            let x = header_area.x + 1 + 4 * u16::try_from(slot).unwrap_or(0);
            let rect = Rect::new(x, header_area.y, 3, 1).intersection(header_area);
            if slot == 0 {
                layout.theme_toggle = Some((element, rect));
            } else {
                layout.menu_toggle = Some((element, rect));
            }
        }

        // 主内容
        if let Some(main) = elements.main.filter(|el| doc.is_attached(*el)) {
            let inner = Block::bordered().inner(body);
            let mut next_row = inner.y;
            let mut take_row = |element: ElementId, gap: u16| {
                let y = next_row + gap;
                if y >= inner.bottom() {
                    return None;
                }
                next_row = y + 1;
                Some((element, Rect::new(inner.x, y, inner.width, 1)))
            };

            layout.flashes = elements
                .flash_messages
                .iter()
                .filter(|el| doc.is_attached(**el))
                .filter_map(|el| take_row(*el, 0))
                .collect();

            let inputs = elements.fields.iter().chain(&elements.search_inputs);
            let mut first = true;
            for field in inputs.filter(|el| doc.is_attached(**el)) {
                // 表单与提示消息之间空一行
                let gap = u16::from(first);
                first = false;
                if let Some(row) = take_row(*field, gap) {
                    layout.fields.push(row);
                }
            }
            layout.main = Some((main, body));
        }

        // 侧栏：带 open 类时覆盖在主内容左侧
        if let Some(panel) = elements
            .panel
            .filter(|el| doc.is_attached(*el) && doc.has_class(*el, &nav.open_class))
        {
            let label_width = elements
                .nav_links
                .iter()
                .map(|link| doc.text_content(*link).width())
                .max()
                .unwrap_or(0);
            let width = u16::try_from(label_width + PANEL_PADDING)
                .unwrap_or(u16::MAX)
                .min(body.width);
            let rect = Rect::new(body.x, body.y, width, body.height);

            let inner = Block::bordered().inner(rect);
            layout.nav_links = elements
                .nav_links
                .iter()
                .filter(|el| doc.is_attached(**el))
                .zip(inner.rows())
                .map(|(el, row)| (*el, row))
                .collect();
            layout.panel = Some((panel, rect));
        }

        // 遮罩：未带 hidden 类时铺满侧栏右侧
        if let Some(overlay) = elements
            .overlay
            .filter(|el| doc.is_attached(*el) && !doc.has_class(*el, &nav.overlay_hidden_class))
        {
            let left = layout.panel.map_or(body.x, |(_, rect)| rect.right());
            let rect = Rect::new(left, body.y, body.right().saturating_sub(left), body.height);
            layout.overlay = Some((overlay, rect));
        }

        layout
    }

    /// 命中测试：返回坐标处最上层的元素
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ElementId> {
        let position = Position::new(column, row);
        let hit = |(element, rect): &(ElementId, Rect)| rect.contains(position).then_some(*element);

        // 由上到下：侧栏 → 遮罩 → 标题栏 → 主内容
        if let Some(link) = self.nav_links.iter().find_map(hit) {
            return Some(link);
        }
        if let Some(element) = self.panel.as_ref().and_then(hit) {
            return Some(element);
        }
        if let Some(element) = self.overlay.as_ref().and_then(hit) {
            return Some(element);
        }
        if self.header_area.contains(position) {
            return self
                .theme_toggle
                .as_ref()
                .and_then(hit)
                .or_else(|| self.menu_toggle.as_ref().and_then(hit))
                .or(self.header);
        }
        self.flashes
            .iter()
            .chain(&self.fields)
            .find_map(hit)
            .or_else(|| self.main.as_ref().and_then(hit))
    }
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let layout = PageLayout::compute(&app.page, &app.elements, frame.area());

    // 渲染顺序即叠放顺序
    components::header::render(app, &layout, frame);
    components::content::render(app, &layout, frame);
    components::sidebar::render(app, &layout, frame);
    components::statusbar::render(app, frame, layout.status);
}
