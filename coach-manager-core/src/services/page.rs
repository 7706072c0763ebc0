//! Page controller
//!
//! Created once at DOM-ready, then driven purely by host events
//! (`dispatch`) and clock advances (`advance`). Page time is measured from
//! DOM-ready. Navigation and notifications share only the timer queue; they
//! never touch each other's state.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ControllerConfig;
use crate::services::form_validation::{validate_submit, SubmitDecision};
use crate::services::navigation::{NavigationController, NavigationEvent, PanelState};
use crate::services::notification::NotificationLifecycleManager;
use crate::services::scheduler::{TimerHandle, TimerQueue};
use crate::services::search::SearchDebouncer;
use crate::services::theme_service::ThemeService;
use crate::traits::{Document, PreferenceStore};
use crate::types::{DispatchOutcome, ElementId, HostEvent, Theme};

/// Deferred work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Next stage of a flash message's removal sequence
    NotificationStage(ElementId),
    /// Viewport re-check after an orientation change
    OrientationSettle,
    /// Search input went quiet
    SearchDebounce(ElementId),
}

/// Owns the document and every attached component
pub struct PageController<D: Document> {
    doc: D,
    config: ControllerConfig,
    timers: TimerQueue<TimerTask>,
    navigation: Option<NavigationController>,
    notifications: NotificationLifecycleManager,
    theme: ThemeService,
    search: SearchDebouncer,
    settle_timer: Option<TimerHandle>,
}

impl<D: Document> PageController<D> {
    /// DOM-ready initialisation (page time zero).
    ///
    /// Components whose elements are missing stay inert.
    pub fn ready(mut doc: D, store: Arc<dyn PreferenceStore>, config: ControllerConfig) -> Self {
        let theme = ThemeService::attach(&mut doc, store, &config.theme);
        let navigation = NavigationController::attach(&mut doc, &config.navigation, config.breakpoints);
        let notifications = NotificationLifecycleManager::attach(&doc, &config.notifications);
        let search = SearchDebouncer::attach(&doc, &config.search);

        let mut timers = TimerQueue::new();
        for (element, delay) in notifications.initial_schedule() {
            timers.schedule(Duration::ZERO, delay, TimerTask::NotificationStage(element));
        }

        log::info!(
            "Page ready: theme={}, navigation={}, {} pending timers",
            theme.current(),
            if navigation.is_some() { "active" } else { "inert" },
            timers.len()
        );

        Self {
            doc,
            config,
            timers,
            navigation,
            notifications,
            theme,
            search,
            settle_timer: None,
        }
    }

    /// Handles one host event at page time `now`.
    ///
    /// Timers already due at `now` run first, so the event sees the page as
    /// it would be had the host advanced the clock in time.
    pub fn dispatch(&mut self, event: HostEvent, now: Duration) -> DispatchOutcome {
        self.advance(now);
        match event {
            HostEvent::Click(target) => {
                if self.theme.is_toggle(&self.doc, target) {
                    self.theme.toggle(&mut self.doc);
                }
                if let Some(nav) = self.navigation.as_mut() {
                    let region = nav.classify_click(&self.doc, target);
                    nav.handle(&mut self.doc, NavigationEvent::Click(region));
                }
            }
            HostEvent::PointerDown(target) => {
                if let Some(nav) = self.navigation.as_mut() {
                    if nav.is_overlay(&self.doc, target) {
                        nav.handle(&mut self.doc, NavigationEvent::OverlayPointerDown);
                    }
                }
            }
            HostEvent::Resize => {
                if let Some(nav) = self.navigation.as_mut() {
                    nav.handle(&mut self.doc, NavigationEvent::Resized);
                }
            }
            HostEvent::OrientationChange => {
                if let Some(nav) = self.navigation.as_mut() {
                    let transition = nav.handle(&mut self.doc, NavigationEvent::OrientationChanged);
                    if let Some(delay) = transition.orientation_check() {
                        // only the last rotation in a burst gets re-checked
                        if let Some(previous) = self.settle_timer.take() {
                            self.timers.cancel(previous);
                        }
                        self.settle_timer =
                            Some(self.timers.schedule(now, delay, TimerTask::OrientationSettle));
                    }
                }
            }
            HostEvent::Submit(form) => {
                if validate_submit(&mut self.doc, form, &self.config.forms) == SubmitDecision::Block {
                    return DispatchOutcome::prevented();
                }
            }
            HostEvent::Input(field) => {
                if self.search.is_search_input(field) {
                    let handle = self.timers.schedule(
                        now,
                        self.config.search.debounce(),
                        TimerTask::SearchDebounce(field),
                    );
                    if let Some(previous) = self.search.restart(field, handle) {
                        self.timers.cancel(previous);
                    }
                }
            }
        }
        DispatchOutcome::default()
    }

    /// Runs every timer due at or before `now`, returning how many fired.
    ///
    /// Follow-up stages are scheduled from the deadline that fired, so a late
    /// call still walks each sequence in order.
    pub fn advance(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        loop {
            let due = self.timers.pop_due(now);
            if due.is_empty() {
                break;
            }
            for entry in due {
                fired += 1;
                match entry.task {
                    TimerTask::NotificationStage(element) => {
                        if let Some(delay) = self.notifications.advance(&mut self.doc, element) {
                            self.timers.schedule(
                                entry.deadline,
                                delay,
                                TimerTask::NotificationStage(element),
                            );
                        }
                    }
                    TimerTask::OrientationSettle => {
                        self.settle_timer = None;
                        if let Some(nav) = self.navigation.as_mut() {
                            nav.handle(&mut self.doc, NavigationEvent::OrientationSettled);
                        }
                    }
                    TimerTask::SearchDebounce(field) => {
                        self.search.fire(&self.doc, field, entry.handle);
                    }
                }
            }
        }
        fired
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Page unload: drops all pending work
    pub fn teardown(&mut self) {
        let dropped = self.timers.len();
        self.timers.clear();
        self.settle_timer = None;
        log::debug!("Page teardown, {dropped} timers dropped");
    }

    /// Panel state, `None` when navigation is inert
    pub fn panel_state(&self) -> Option<PanelState> {
        self.navigation.as_ref().map(NavigationController::state)
    }

    pub fn navigation(&self) -> Option<&NavigationController> {
        self.navigation.as_ref()
    }

    pub fn notifications(&self) -> &NotificationLifecycleManager {
        &self.notifications
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Host-side access (viewport updates, user typing)
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    pub fn into_document(self) -> D {
        self.doc
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryDocument, PageElements};
    use crate::services::NotificationPhase;
    use crate::test_utils::{ms, sample_builder, sample_page, DESKTOP, PHONE_PORTRAIT, WIDE_LANDSCAPE};
    use crate::traits::InMemoryPreferenceStore;

    fn ready(page: (MemoryDocument, PageElements)) -> (PageController<MemoryDocument>, PageElements) {
        let (doc, els) = page;
        let controller = PageController::ready(
            doc,
            Arc::new(InMemoryPreferenceStore::new()),
            ControllerConfig::default(),
        );
        (controller, els)
    }

    fn overlay_hidden(page: &PageController<MemoryDocument>, els: &PageElements) -> bool {
        page.document().has_class(els.overlay.unwrap(), "hidden")
    }

    #[test]
    fn test_toggle_twice_is_closed_and_consistent() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        let toggle = els.menu_toggle.unwrap();

        page.dispatch(HostEvent::Click(toggle), ms(10));
        assert_eq!(page.panel_state(), Some(PanelState::Open));
        assert!(!overlay_hidden(&page, &els));

        page.dispatch(HostEvent::Click(toggle), ms(20));
        assert_eq!(page.panel_state(), Some(PanelState::Closed));
        assert!(overlay_hidden(&page, &els));
    }

    #[test]
    fn test_toggle_click_is_not_an_outside_click() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        // click lands on the icon inside the toggle button
        let icon = page.document().children(els.menu_toggle.unwrap())[0];
        page.dispatch(HostEvent::Click(icon), ms(0));
        assert_eq!(page.panel_state(), Some(PanelState::Open));
    }

    #[test]
    fn test_outside_click_closes_inside_click_does_not() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));

        page.dispatch(HostEvent::Click(els.panel.unwrap()), ms(5));
        assert_eq!(page.panel_state(), Some(PanelState::Open));

        page.dispatch(HostEvent::Click(els.main.unwrap()), ms(10));
        assert_eq!(page.panel_state(), Some(PanelState::Closed));
        assert!(overlay_hidden(&page, &els));
    }

    #[test]
    fn test_overlay_pointer_down_closes() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        let overlay = els.overlay.unwrap();
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));

        // the click half of the gesture alone does nothing
        page.dispatch(HostEvent::Click(overlay), ms(1));
        assert_eq!(page.panel_state(), Some(PanelState::Open));

        page.dispatch(HostEvent::PointerDown(overlay), ms(2));
        assert_eq!(page.panel_state(), Some(PanelState::Closed));
        assert!(overlay_hidden(&page, &els));
    }

    #[test]
    fn test_mobile_link_closes_desktop_link_does_not() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));
        page.dispatch(HostEvent::Click(els.nav_links[1]), ms(1));
        assert_eq!(page.panel_state(), Some(PanelState::Closed));

        let (mut page, els) = ready(sample_page(DESKTOP));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));
        page.dispatch(HostEvent::Click(els.nav_links[1]), ms(1));
        assert_eq!(page.panel_state(), Some(PanelState::Open));
    }

    #[test]
    fn test_resize_to_landscape_forces_close() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));
        page.document_mut().set_viewport(WIDE_LANDSCAPE);
        page.dispatch(HostEvent::Resize, ms(10));
        assert_eq!(page.panel_state(), Some(PanelState::Closed));
        assert!(overlay_hidden(&page, &els));
    }

    #[test]
    fn test_orientation_change_waits_for_settle() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));

        // orientation reported before reflow: dimensions still portrait
        page.dispatch(HostEvent::OrientationChange, ms(1000));
        assert_eq!(page.next_deadline(), Some(ms(1100)));
        page.document_mut().set_viewport(WIDE_LANDSCAPE);

        page.advance(ms(1099));
        assert_eq!(page.panel_state(), Some(PanelState::Open));
        page.advance(ms(1100));
        assert_eq!(page.panel_state(), Some(PanelState::Closed));
    }

    #[test]
    fn test_dispatch_runs_due_settle_before_event() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        let toggle = els.menu_toggle.unwrap();
        page.dispatch(HostEvent::Click(toggle), ms(0));
        page.dispatch(HostEvent::OrientationChange, ms(1000));
        page.document_mut().set_viewport(WIDE_LANDSCAPE);

        // host never advanced past 1100 ms; the settle check closes the
        // panel first and the toggle then reopens it
        page.dispatch(HostEvent::Click(toggle), ms(1200));
        assert_eq!(page.panel_state(), Some(PanelState::Open));
        assert_ne!(page.next_deadline(), Some(ms(1100)));
    }

    #[test]
    fn test_dispatch_runs_due_notification_stages() {
        let (mut page, els) = ready(sample_page(DESKTOP));
        let msg = els.flash_messages[0];
        page.dispatch(HostEvent::Resize, ms(6000));
        assert!(!page.document().is_attached(msg));
    }

    #[test]
    fn test_orientation_burst_checks_once() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));
        page.dispatch(HostEvent::OrientationChange, ms(1000));
        page.dispatch(HostEvent::OrientationChange, ms(1050));
        // first check was superseded
        assert_eq!(page.next_deadline(), Some(ms(1150)));
        page.document_mut().set_viewport(WIDE_LANDSCAPE);
        assert_eq!(page.advance(ms(1150)), 1);
        assert_eq!(page.panel_state(), Some(PanelState::Closed));
    }

    #[test]
    fn test_orientation_settle_on_portrait_keeps_open() {
        let (mut page, els) = ready(sample_page(PHONE_PORTRAIT));
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));
        page.dispatch(HostEvent::OrientationChange, ms(10));
        page.advance(ms(200));
        assert_eq!(page.panel_state(), Some(PanelState::Open));
    }

    #[test]
    fn test_notification_timeline() {
        let (mut page, els) = ready(sample_page(DESKTOP));
        let msg = els.flash_messages[0];
        let with_button = els.flash_messages[1];

        assert_eq!(page.next_deadline(), Some(ms(5000)));
        page.advance(ms(4999));
        assert_eq!(page.notifications().phase(msg), Some(NotificationPhase::Pending));

        page.advance(ms(5000));
        assert_eq!(page.notifications().phase(msg), Some(NotificationPhase::Fading));
        assert_eq!(page.next_deadline(), Some(ms(5500)));

        page.advance(ms(5500));
        assert_eq!(page.notifications().phase(msg), Some(NotificationPhase::Removed));
        assert!(!page.document().is_attached(msg));

        assert!(page.document().is_attached(with_button));
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn test_late_advance_walks_whole_sequence() {
        let (mut page, els) = ready(sample_page(DESKTOP));
        assert_eq!(page.advance(ms(60_000)), 2);
        assert!(!page.document().is_attached(els.flash_messages[0]));
    }

    #[test]
    fn test_submit_blocked_prevents_default() {
        let config = ControllerConfig::default();
        let (mut page, els) = ready(
            sample_builder(&config, DESKTOP)
                .form(&[("title", true, "")])
                .build(),
        );
        let outcome = page.dispatch(HostEvent::Submit(els.forms[0]), ms(0));
        assert!(outcome.default_prevented);
        assert_eq!(page.document().alerts().len(), 1);

        page.document_mut().set_value(els.fields[0], "Lauf");
        let outcome = page.dispatch(HostEvent::Submit(els.forms[0]), ms(0));
        assert!(!outcome.default_prevented);
    }

    #[test]
    fn test_search_input_debounces() {
        let config = ControllerConfig::default();
        let (mut page, els) = ready(sample_builder(&config, DESKTOP).search_input("search").build());
        let input = els.search_inputs[0];
        page.advance(ms(10_000));

        page.dispatch(HostEvent::Input(input), ms(10_000));
        page.dispatch(HostEvent::Input(input), ms(10_200));
        assert_eq!(page.next_deadline(), Some(ms(10_500)));
        assert_eq!(page.advance(ms(10_500)), 1);
        assert_eq!(page.next_deadline(), None);
    }

    #[test]
    fn test_theme_toggle_click() {
        let (mut page, els) = ready(sample_page(DESKTOP));
        assert_eq!(page.theme(), Theme::Light);
        page.dispatch(HostEvent::Click(els.theme_toggle.unwrap()), ms(0));
        assert_eq!(page.theme(), Theme::Dark);
        let root = page.document().root();
        assert!(page.document().has_class(root, "dark"));
    }

    #[test]
    fn test_inert_navigation_ignores_events() {
        let config = ControllerConfig::default();
        let (mut page, els) = ready(sample_builder(&config, PHONE_PORTRAIT).without_panel().build());
        assert_eq!(page.panel_state(), None);
        page.dispatch(HostEvent::Click(els.menu_toggle.unwrap()), ms(0));
        page.dispatch(HostEvent::OrientationChange, ms(0));
        assert_eq!(page.panel_state(), None);
        // only the flash message timer
        assert_eq!(page.next_deadline(), Some(ms(5000)));
    }

    #[test]
    fn test_panel_without_overlay() {
        let config = ControllerConfig::default();
        let (mut page, els) = ready(sample_builder(&config, PHONE_PORTRAIT).without_overlay().build());
        let toggle = els.menu_toggle.unwrap();
        page.dispatch(HostEvent::Click(toggle), ms(0));
        assert!(page.document().has_class(els.panel.unwrap(), "open"));
        page.dispatch(HostEvent::Click(els.main.unwrap()), ms(1));
        assert!(!page.document().has_class(els.panel.unwrap(), "open"));
    }

    #[test]
    fn test_teardown_drops_timers() {
        let (mut page, els) = ready(sample_page(DESKTOP));
        page.teardown();
        assert_eq!(page.advance(ms(60_000)), 0);
        assert!(page.document().is_attached(els.flash_messages[0]));
    }
}
