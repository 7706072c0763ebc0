//! Responsive navigation state machine
//!
//! Keeps the side panel and its overlay jointly consistent across five input
//! sources: menu toggle, overlay pointer-down, document clicks (including
//! links inside the panel), resize and orientation change.
//!
//! `transition` is a pure function of (state, event, context); the
//! `NavigationController` classifies raw clicks, reads a fresh viewport and
//! applies the resulting effects to the document.

use std::time::Duration;

use crate::config::NavigationConfig;
use crate::traits::Document;
use crate::types::{Breakpoints, ElementId, Viewport};

/// Open/closed state of the side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Where a click landed.
///
/// Classification is done once per click, in this priority order, so the
/// toggle's own click is handled instead of the outside-click rule and never
/// races it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickRegion {
    MenuToggle,
    Overlay,
    /// A link inside the panel
    PanelLink,
    Panel,
    Outside,
}

/// Navigation inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEvent {
    Click(ClickRegion),
    OverlayPointerDown,
    /// Orientation reported; dimensions not settled yet
    OrientationChanged,
    /// Settling delay elapsed after an orientation change
    OrientationSettled,
    Resized,
}

/// Effects produced by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationEffect {
    SetPanelOpen(bool),
    SetOverlayVisible(bool),
    /// Re-check the viewport after the given delay
    ScheduleOrientationCheck(Duration),
}

/// Inputs to `transition` besides state and event
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext {
    /// Snapshot taken when the event is handled
    pub viewport: Viewport,
    pub breakpoints: Breakpoints,
    pub has_overlay: bool,
    pub orientation_settle: Duration,
}

/// New state plus the effects needed to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PanelState,
    pub effects: Vec<NavigationEffect>,
}

impl Transition {
    fn stay(state: PanelState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn to(state: PanelState, ctx: &TransitionContext) -> Self {
        Self {
            state,
            effects: render_effects(state, ctx.has_overlay),
        }
    }

    /// Requested orientation re-check delay, if any
    pub fn orientation_check(&self) -> Option<Duration> {
        self.effects.iter().find_map(|e| match e {
            NavigationEffect::ScheduleOrientationCheck(delay) => Some(*delay),
            _ => None,
        })
    }

    pub fn changed(&self, from: PanelState) -> bool {
        self.state != from
    }
}

/// Effects that make the document reflect `state`
pub fn render_effects(state: PanelState, has_overlay: bool) -> Vec<NavigationEffect> {
    let open = state.is_open();
    let mut effects = vec![NavigationEffect::SetPanelOpen(open)];
    if has_overlay {
        effects.push(NavigationEffect::SetOverlayVisible(open));
    }
    effects
}

/// Pure transition function.
///
/// Every close transition is idempotent: from `Closed` it yields no effects.
pub fn transition(state: PanelState, event: NavigationEvent, ctx: &TransitionContext) -> Transition {
    let close = |state: PanelState| {
        if state.is_open() {
            Transition::to(PanelState::Closed, ctx)
        } else {
            Transition::stay(state)
        }
    };

    match event {
        NavigationEvent::Click(ClickRegion::MenuToggle) => Transition::to(state.toggled(), ctx),
        NavigationEvent::Click(ClickRegion::Outside) => close(state),
        NavigationEvent::Click(ClickRegion::PanelLink) => {
            if ctx.viewport.is_mobile(&ctx.breakpoints) {
                close(state)
            } else {
                Transition::stay(state)
            }
        }
        // clicks on the overlay are covered by its pointer-down; in-panel clicks are consumed
        NavigationEvent::Click(ClickRegion::Overlay | ClickRegion::Panel) => Transition::stay(state),
        NavigationEvent::OverlayPointerDown => {
            if ctx.has_overlay {
                close(state)
            } else {
                Transition::stay(state)
            }
        }
        NavigationEvent::OrientationChanged => Transition {
            state,
            effects: vec![NavigationEffect::ScheduleOrientationCheck(
                ctx.orientation_settle,
            )],
        },
        NavigationEvent::OrientationSettled | NavigationEvent::Resized => {
            if ctx.viewport.forces_close(&ctx.breakpoints) {
                close(state)
            } else {
                Transition::stay(state)
            }
        }
    }
}

/// Panel, toggle and (optional) overlay handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationElements {
    pub panel: ElementId,
    pub toggle: ElementId,
    pub overlay: Option<ElementId>,
}

/// Binds the state machine to a document
#[derive(Debug)]
pub struct NavigationController {
    elements: NavigationElements,
    state: PanelState,
    config: NavigationConfig,
    breakpoints: Breakpoints,
}

impl NavigationController {
    /// Looks up the panel, toggle and overlay.
    ///
    /// # Returns
    /// * `None` - panel or toggle missing; the component stays inert
    pub fn attach<D: Document>(
        doc: &mut D,
        config: &NavigationConfig,
        breakpoints: Breakpoints,
    ) -> Option<Self> {
        let (Some(panel), Some(toggle)) = (
            doc.element_by_id(&config.panel_id),
            doc.element_by_id(&config.toggle_id),
        ) else {
            log::debug!(
                "Navigation inert: #{} or #{} not found",
                config.panel_id,
                config.toggle_id
            );
            return None;
        };
        let overlay = doc.element_by_id(&config.overlay_id);
        if overlay.is_none() {
            log::debug!("No #{}, navigation runs panel-only", config.overlay_id);
        }

        let controller = Self {
            elements: NavigationElements {
                panel,
                toggle,
                overlay,
            },
            state: PanelState::Closed,
            config: config.clone(),
            breakpoints,
        };
        controller.apply(doc, &render_effects(controller.state, overlay.is_some()));
        Some(controller)
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn elements(&self) -> NavigationElements {
        self.elements
    }

    /// Classifies a click target by priority: toggle, overlay, panel link, panel
    pub fn classify_click<D: Document>(&self, doc: &D, target: ElementId) -> ClickRegion {
        let NavigationElements {
            panel,
            toggle,
            overlay,
        } = self.elements;

        if doc.contains(toggle, target) {
            return ClickRegion::MenuToggle;
        }
        if overlay.is_some_and(|overlay| doc.contains(overlay, target)) {
            return ClickRegion::Overlay;
        }
        if doc.contains(panel, target) {
            let on_link = doc.descendants(panel).into_iter().any(|el| {
                doc.tag_name(el).as_deref() == Some("a") && doc.contains(el, target)
            });
            return if on_link {
                ClickRegion::PanelLink
            } else {
                ClickRegion::Panel
            };
        }
        ClickRegion::Outside
    }

    /// Whether `target` is the overlay (or inside it)
    pub fn is_overlay<D: Document>(&self, doc: &D, target: ElementId) -> bool {
        self.elements
            .overlay
            .is_some_and(|overlay| doc.contains(overlay, target))
    }

    /// Runs one event through the state machine and applies its DOM effects.
    ///
    /// The returned transition still carries any scheduling request
    /// (`ScheduleOrientationCheck`) for the caller to honour.
    pub fn handle<D: Document>(&mut self, doc: &mut D, event: NavigationEvent) -> Transition {
        let ctx = TransitionContext {
            viewport: doc.viewport(),
            breakpoints: self.breakpoints,
            has_overlay: self.elements.overlay.is_some(),
            orientation_settle: self.config.orientation_settle(),
        };
        let result = transition(self.state, event, &ctx);
        if result.changed(self.state) {
            log::debug!(
                "Navigation {:?} -> {:?} on {:?} ({}x{})",
                self.state,
                result.state,
                event,
                ctx.viewport.width,
                ctx.viewport.height
            );
        }
        self.state = result.state;
        self.apply(doc, &result.effects);
        result
    }

    fn apply<D: Document>(&self, doc: &mut D, effects: &[NavigationEffect]) {
        for effect in effects {
            match *effect {
                NavigationEffect::SetPanelOpen(true) => {
                    doc.add_class(self.elements.panel, &self.config.open_class);
                }
                NavigationEffect::SetPanelOpen(false) => {
                    doc.remove_class(self.elements.panel, &self.config.open_class);
                }
                NavigationEffect::SetOverlayVisible(visible) => {
                    if let Some(overlay) = self.elements.overlay {
                        if visible {
                            doc.remove_class(overlay, &self.config.overlay_hidden_class);
                        } else {
                            doc.add_class(overlay, &self.config.overlay_hidden_class);
                        }
                    }
                }
                NavigationEffect::ScheduleOrientationCheck(_) => {}
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryDocument, PageElements};
    use crate::test_utils::{ms, sample_page, DESKTOP, PHONE_PORTRAIT, WIDE_LANDSCAPE};

    fn ctx(viewport: Viewport) -> TransitionContext {
        TransitionContext {
            viewport,
            breakpoints: Breakpoints::default(),
            has_overlay: true,
            orientation_settle: ms(100),
        }
    }

    fn attached(viewport: Viewport) -> (MemoryDocument, PageElements, NavigationController) {
        let (mut doc, els) = sample_page(viewport);
        let nav =
            NavigationController::attach(&mut doc, &NavigationConfig::default(), Breakpoints::default())
                .unwrap();
        (doc, els, nav)
    }

    fn assert_consistent(doc: &MemoryDocument, els: &PageElements, nav: &NavigationController) {
        let open = nav.state().is_open();
        assert_eq!(doc.has_class(els.panel.unwrap(), "open"), open);
        if let Some(overlay) = els.overlay {
            assert_eq!(doc.has_class(overlay, "hidden"), !open);
        }
    }

    // ==================== pure transition tests ====================

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let c = ctx(DESKTOP);
        let open = transition(PanelState::Closed, NavigationEvent::Click(ClickRegion::MenuToggle), &c);
        assert_eq!(open.state, PanelState::Open);
        assert_eq!(
            open.effects,
            vec![
                NavigationEffect::SetPanelOpen(true),
                NavigationEffect::SetOverlayVisible(true)
            ]
        );
        let closed = transition(open.state, NavigationEvent::Click(ClickRegion::MenuToggle), &c);
        assert_eq!(closed.state, PanelState::Closed);
        assert_eq!(
            closed.effects,
            vec![
                NavigationEffect::SetPanelOpen(false),
                NavigationEffect::SetOverlayVisible(false)
            ]
        );
    }

    #[test]
    fn test_close_events_are_idempotent() {
        let c = ctx(WIDE_LANDSCAPE);
        for event in [
            NavigationEvent::Click(ClickRegion::Outside),
            NavigationEvent::OverlayPointerDown,
            NavigationEvent::Resized,
            NavigationEvent::OrientationSettled,
        ] {
            let t = transition(PanelState::Closed, event, &c);
            assert_eq!(t, Transition::stay(PanelState::Closed), "{event:?}");
        }
    }

    #[test]
    fn test_panel_and_overlay_clicks_keep_state() {
        let c = ctx(PHONE_PORTRAIT);
        for region in [ClickRegion::Panel, ClickRegion::Overlay] {
            let t = transition(PanelState::Open, NavigationEvent::Click(region), &c);
            assert_eq!(t.state, PanelState::Open);
            assert!(t.effects.is_empty());
        }
    }

    #[test]
    fn test_link_closes_only_on_mobile() {
        let event = NavigationEvent::Click(ClickRegion::PanelLink);
        assert_eq!(transition(PanelState::Open, event, &ctx(PHONE_PORTRAIT)).state, PanelState::Closed);
        assert_eq!(transition(PanelState::Open, event, &ctx(DESKTOP)).state, PanelState::Open);
    }

    #[test]
    fn test_landscape_forces_close() {
        let c = ctx(WIDE_LANDSCAPE);
        assert_eq!(transition(PanelState::Open, NavigationEvent::Resized, &c).state, PanelState::Closed);
        assert_eq!(
            transition(PanelState::Open, NavigationEvent::OrientationSettled, &c).state,
            PanelState::Closed
        );
        // portrait keeps it open
        let p = ctx(PHONE_PORTRAIT);
        assert_eq!(transition(PanelState::Open, NavigationEvent::Resized, &p).state, PanelState::Open);
    }

    #[test]
    fn test_orientation_change_only_schedules() {
        let t = transition(PanelState::Open, NavigationEvent::OrientationChanged, &ctx(WIDE_LANDSCAPE));
        assert_eq!(t.state, PanelState::Open);
        assert_eq!(t.orientation_check(), Some(ms(100)));
    }

    #[test]
    fn test_without_overlay_only_panel_effects() {
        let mut c = ctx(DESKTOP);
        c.has_overlay = false;
        let t = transition(PanelState::Closed, NavigationEvent::Click(ClickRegion::MenuToggle), &c);
        assert_eq!(t.effects, vec![NavigationEffect::SetPanelOpen(true)]);
        let t = transition(PanelState::Open, NavigationEvent::OverlayPointerDown, &c);
        assert_eq!(t.state, PanelState::Open);
    }

    // ==================== controller tests ====================

    #[test]
    fn test_attach_syncs_closed_state() {
        let (mut doc, els) = sample_page(DESKTOP);
        let panel = els.panel.unwrap();
        doc.add_class(panel, "open");
        let nav =
            NavigationController::attach(&mut doc, &NavigationConfig::default(), Breakpoints::default())
                .unwrap();
        assert_eq!(nav.state(), PanelState::Closed);
        assert_consistent(&doc, &els, &nav);
    }

    #[test]
    fn test_attach_inert_without_panel() {
        let (mut doc, _) = crate::test_utils::sample_builder(&crate::ControllerConfig::default(), DESKTOP)
            .without_panel()
            .build();
        assert!(NavigationController::attach(
            &mut doc,
            &NavigationConfig::default(),
            Breakpoints::default()
        )
        .is_none());
    }

    #[test]
    fn test_classify_click() {
        let (doc, els, nav) = attached(DESKTOP);
        let toggle = els.menu_toggle.unwrap();
        let icon = doc.children(toggle)[0];
        assert_eq!(nav.classify_click(&doc, toggle), ClickRegion::MenuToggle);
        assert_eq!(nav.classify_click(&doc, icon), ClickRegion::MenuToggle);
        assert_eq!(nav.classify_click(&doc, els.overlay.unwrap()), ClickRegion::Overlay);
        assert_eq!(nav.classify_click(&doc, els.nav_links[0]), ClickRegion::PanelLink);
        assert_eq!(nav.classify_click(&doc, els.panel.unwrap()), ClickRegion::Panel);
        assert_eq!(nav.classify_click(&doc, els.main.unwrap()), ClickRegion::Outside);
        assert_eq!(nav.classify_click(&doc, doc.root()), ClickRegion::Outside);
    }

    #[test]
    fn test_handle_keeps_overlay_consistent() {
        let (mut doc, els, mut nav) = attached(PHONE_PORTRAIT);
        for event in [
            NavigationEvent::Click(ClickRegion::MenuToggle),
            NavigationEvent::Click(ClickRegion::Panel),
            NavigationEvent::Click(ClickRegion::Outside),
            NavigationEvent::Click(ClickRegion::MenuToggle),
            NavigationEvent::OverlayPointerDown,
            NavigationEvent::Click(ClickRegion::MenuToggle),
            NavigationEvent::Click(ClickRegion::PanelLink),
        ] {
            nav.handle(&mut doc, event);
            assert_consistent(&doc, &els, &nav);
        }
        assert_eq!(nav.state(), PanelState::Closed);
    }

    #[test]
    fn test_handle_reads_fresh_viewport() {
        let (mut doc, _, mut nav) = attached(PHONE_PORTRAIT);
        nav.handle(&mut doc, NavigationEvent::Click(ClickRegion::MenuToggle));
        nav.handle(&mut doc, NavigationEvent::Resized);
        assert_eq!(nav.state(), PanelState::Open);

        doc.set_viewport(PHONE_PORTRAIT.rotated());
        nav.handle(&mut doc, NavigationEvent::Resized);
        assert_eq!(nav.state(), PanelState::Closed);
    }
}
