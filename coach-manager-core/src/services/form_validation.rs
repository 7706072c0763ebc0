//! Required-field gating on form submission

use crate::config::FormConfig;
use crate::traits::Document;
use crate::types::ElementId;

/// Per-submit snapshot of a form's required fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidationContext {
    pub form: ElementId,
    /// `(field, value is blank)`
    pub fields: Vec<(ElementId, bool)>,
}

impl FormValidationContext {
    pub fn capture<D: Document>(doc: &D, form: ElementId) -> Self {
        let fields = doc
            .descendants(form)
            .into_iter()
            .filter(|el| doc.attribute(*el, "required").is_some())
            .map(|el| {
                let blank = doc.value(el).is_none_or(|v| v.trim().is_empty());
                (el, blank)
            })
            .collect();
        Self { form, fields }
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, blank)| !blank)
    }
}

/// Submit outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Allow,
    /// Submission cancelled, alert shown
    Block,
}

/// Marks blank required fields and decides whether `form` may submit.
///
/// Does not report which field failed; one alert covers all of them.
pub fn validate_submit<D: Document>(doc: &mut D, form: ElementId, config: &FormConfig) -> SubmitDecision {
    let context = FormValidationContext::capture(doc, form);
    for (field, blank) in &context.fields {
        if *blank {
            doc.add_class(*field, &config.invalid_class);
        } else {
            doc.remove_class(*field, &config.invalid_class);
        }
    }

    if context.is_valid() {
        SubmitDecision::Allow
    } else {
        log::debug!("Submit of {form:?} blocked: required fields empty");
        doc.alert(&config.alert_message);
        SubmitDecision::Block
    }
}
