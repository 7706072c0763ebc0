//! Search input debounce
//!
//! Live search is not implemented; the debounce plumbing is in place and the
//! expiry hook only logs.

use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::services::scheduler::TimerHandle;
use crate::traits::Document;
use crate::types::ElementId;

/// Tracks the pending debounce timer per search field
#[derive(Debug, Default)]
pub struct SearchDebouncer {
    inputs: Vec<ElementId>,
    pending: HashMap<ElementId, TimerHandle>,
}

impl SearchDebouncer {
    /// Registers `input[type=text][name=<input_name>]` fields
    pub fn attach<D: Document>(doc: &D, config: &SearchConfig) -> Self {
        let inputs = doc.query_all(&|doc: &D, el| {
            doc.tag_name(el).as_deref() == Some("input")
                && doc.attribute(el, "type").as_deref() == Some("text")
                && doc.attribute(el, "name").as_deref() == Some(config.input_name.as_str())
        });
        Self {
            inputs,
            pending: HashMap::new(),
        }
    }

    pub fn is_search_input(&self, element: ElementId) -> bool {
        self.inputs.contains(&element)
    }

    /// Records the timer for `input`, returning the one it supersedes
    pub fn restart(&mut self, input: ElementId, handle: TimerHandle) -> Option<TimerHandle> {
        self.pending.insert(input, handle)
    }

    /// Debounce expired for `input`
    pub fn fire<D: Document>(&mut self, doc: &D, input: ElementId, handle: TimerHandle) {
        if self.pending.get(&input) != Some(&handle) {
            return;
        }
        self.pending.remove(&input);
        let query = doc.value(input).unwrap_or_default();
        log::debug!("Live search not implemented, ignoring query {query:?}");
    }

    pub fn inputs(&self) -> &[ElementId] {
        &self.inputs
    }

    pub fn is_pending(&self, input: ElementId) -> bool {
        self.pending.contains_key(&input)
    }
}
