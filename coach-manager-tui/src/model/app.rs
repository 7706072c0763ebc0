//! 应用主状态结构

use std::sync::Arc;
use std::time::{Duration, Instant};

use coach_manager_core::adapters::{MemoryDocument, PageElements};
use coach_manager_core::types::{ElementId, Viewport};
use coach_manager_core::{PageController, PreferenceStore};
use ratatui::layout::Rect;

use crate::backend::{demo_page, AppConfig, CellScale};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 页面控制器（持有文档）
    pub page: PageController<MemoryDocument>,

    /// 页面元素句柄
    pub elements: PageElements,

    /// 单元格 → 像素换算
    pub scale: CellScale,

    /// 终端区域
    pub area: Rect,

    /// 设备是否处于旋转状态
    pub rotated: bool,

    /// 当前输入焦点
    pub focused_field: Option<ElementId>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 页面时间零点
    started: Instant,

    /// 已经展示过的 alert 数量
    alerts_seen: usize,
}

impl App {
    /// 创建新的应用实例（即页面 DOM-ready）
    pub fn new(config: AppConfig, store: Arc<dyn PreferenceStore>, area: Rect) -> Self {
        let viewport = scaled_viewport(area, config.cell, false);
        let (doc, elements) = demo_page::build(&config.controller, viewport, false);
        let page = PageController::ready(doc, store, config.controller);

        Self {
            should_quit: false,
            page,
            elements,
            scale: config.cell,
            area,
            rotated: false,
            focused_field: None,
            status_message: None,
            started: Instant::now(),
            alerts_seen: 0,
        }
    }

    /// 自页面就绪以来经过的时间
    pub fn page_time(&self) -> Duration {
        self.started.elapsed()
    }

    /// 当前终端对应的视口
    pub fn viewport(&self) -> Viewport {
        scaled_viewport(self.area, self.scale, self.rotated)
    }

    /// 可输入的字段：表单字段 + 搜索框
    pub fn editable_fields(&self) -> Vec<ElementId> {
        self.elements
            .fields
            .iter()
            .chain(&self.elements.search_inputs)
            .copied()
            .collect()
    }

    /// 取出尚未展示的 alert（只取最后一条）
    pub fn take_new_alert(&mut self) -> Option<String> {
        let alerts = self.page.document().alerts();
        if alerts.len() == self.alerts_seen {
            return None;
        }
        self.alerts_seen = alerts.len();
        alerts.last().cloned()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

/// 终端尺寸换算为 CSS 像素
fn scaled_viewport(area: Rect, scale: CellScale, rotated: bool) -> Viewport {
    let viewport = Viewport::new(
        u32::from(area.width) * scale.cell_width,
        u32::from(area.height) * scale.cell_height,
    );
    if rotated {
        viewport.rotated()
    } else {
        viewport
    }
}
