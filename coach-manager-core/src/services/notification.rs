//! Flash message lifecycle
//!
//! Every qualifying message found at attach time runs a fixed two-stage
//! sequence, independently of all other messages:
//!
//! ```text
//! Pending --display--> Fading --fade--> Removed
//! ```
//!
//! The manager never schedules anything itself: `initial_schedule` and
//! `advance` return the delay until the next stage and the caller puts it on
//! its timer queue. Messages injected after attach are not tracked.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::NotificationConfig;
use crate::traits::Document;
use crate::types::ElementId;

/// Tags treated as interactive controls
const INTERACTIVE_TAGS: &[&str] = &["button", "input", "select", "textarea"];

/// Class fragment marking a styled call-to-action link
const STYLED_LINK_MARKER: &str = "bg-";

/// Stage of one message's removal sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Pending,
    Fading,
    Removed,
}

impl NotificationPhase {
    /// Following stage, `None` once removed
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Pending => Some(Self::Fading),
            Self::Fading => Some(Self::Removed),
            Self::Removed => None,
        }
    }
}

/// Snapshot of a message element taken at attach time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRecord {
    pub element: ElementId,
    pub text: String,
    /// Contains a control or styled link, i.e. needs the user's attention
    pub has_interactive_child: bool,
}

impl NotificationRecord {
    pub fn capture<D: Document>(doc: &D, element: ElementId) -> Self {
        let has_interactive_child = doc.descendants(element).into_iter().any(|el| {
            let Some(tag) = doc.tag_name(el) else {
                return false;
            };
            if INTERACTIVE_TAGS.contains(&tag.as_str()) {
                return true;
            }
            tag == "a"
                && doc
                    .attribute(el, "class")
                    .is_some_and(|class| class.contains(STYLED_LINK_MARKER))
        });

        Self {
            element,
            text: doc.text_content(element),
            has_interactive_child,
        }
    }

    /// Eligible for automatic removal
    pub fn qualifies(&self) -> bool {
        !self.text.trim().is_empty() && !self.has_interactive_child
    }
}

/// Tracks the removal sequence of every qualifying message
#[derive(Debug)]
pub struct NotificationLifecycleManager {
    records: Vec<NotificationRecord>,
    phases: HashMap<ElementId, NotificationPhase>,
    display: Duration,
    fade: Duration,
}

impl NotificationLifecycleManager {
    /// One-time scan for message elements; qualifying ones start `Pending`
    pub fn attach<D: Document>(doc: &D, config: &NotificationConfig) -> Self {
        let records: Vec<NotificationRecord> = doc
            .query_all(&|doc: &D, el| {
                config
                    .message_classes
                    .iter()
                    .any(|class| doc.has_class(el, class))
            })
            .into_iter()
            .map(|el| NotificationRecord::capture(doc, el))
            .collect();

        let phases: HashMap<ElementId, NotificationPhase> = records
            .iter()
            .filter(|r| r.qualifies())
            .map(|r| (r.element, NotificationPhase::Pending))
            .collect();

        if !records.is_empty() {
            log::info!(
                "Flash messages: {} found, {} scheduled for removal",
                records.len(),
                phases.len()
            );
        }

        Self {
            records,
            phases,
            display: config.display(),
            fade: config.fade(),
        }
    }

    /// `(element, delay)` for every message entering `Pending`
    pub fn initial_schedule(&self) -> Vec<(ElementId, Duration)> {
        self.records
            .iter()
            .filter(|r| self.phases.get(&r.element) == Some(&NotificationPhase::Pending))
            .map(|r| (r.element, self.display))
            .collect()
    }

    /// Moves `element` to its next stage and applies that stage's effect.
    ///
    /// # Returns
    /// * `Some(delay)` - schedule the next `advance` after `delay`
    /// * `None` - sequence finished, or the element is not tracked
    pub fn advance<D: Document>(&mut self, doc: &mut D, element: ElementId) -> Option<Duration> {
        let phase = self.phases.get_mut(&element)?;
        let next = phase.next()?;
        *phase = next;

        match next {
            NotificationPhase::Fading => {
                doc.set_style(
                    element,
                    "transition",
                    &format!("opacity {}ms", self.fade.as_millis()),
                );
                doc.set_style(element, "opacity", "0");
                Some(self.fade)
            }
            NotificationPhase::Removed => {
                if !doc.remove(element) {
                    log::debug!("Flash message {element:?} already detached");
                }
                None
            }
            NotificationPhase::Pending => None,
        }
    }

    pub fn phase(&self, element: ElementId) -> Option<NotificationPhase> {
        self.phases.get(&element).copied()
    }

    pub fn records(&self) -> &[NotificationRecord] {
        &self.records
    }

    /// Messages whose sequence has not finished yet
    pub fn active_count(&self) -> usize {
        self.phases
            .values()
            .filter(|p| **p != NotificationPhase::Removed)
            .count()
    }
}
