//! Error summary aggregator

use crate::registry::{FieldId, FieldRegistry};
use crate::validation::Validator;
use serde::Serialize;

/// Consolidated error region
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryView {
    pub visible: bool,
    /// `"<Label>: <message>"` per failing field
    pub items: Vec<String>,
}

impl SummaryView {
    /// Rendered list, one entry per line; empty when hidden
    pub fn render(&self) -> String {
        self.items.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Re-run every applicable validator, apply each result to its field and
/// rebuild the summary.
///
/// The company chain is skipped while the company section is hidden. Running
/// this twice without an intervening change yields the same view.
pub fn aggregate(validator: &Validator, registry: &mut FieldRegistry) -> SummaryView {
    let state = registry.state();
    let mut items = Vec::new();

    for (field, result) in validator.validate_all(&state) {
        if field == FieldId::Company && !state.company_mode {
            continue;
        }
        registry.apply(field, result.valid, &result.message);
        if !result.valid {
            items.push(format!("{}: {}", field.label(), result.message));
        }
    }

    tracing::debug!(failures = items.len(), "error summary rebuilt");

    SummaryView {
        visible: !items.is_empty(),
        items,
    }
}
