//! Signup form controller
//!
//! Event-driven façade over the registry, validators, summary, draft and
//! submission. Every entry point is synchronous except [`SignupForm::submit`].
//! Debounced work is driven by [`SignupForm::tick`] with caller-supplied
//! instants; a UI loop sleeps until [`SignupForm::next_deadline`] and ticks.

use crate::config::FormConfig;
use crate::debounce::Debouncer;
use crate::draft;
use crate::error::Result;
use crate::phone;
use crate::registry::{FieldDisplay, FieldId, FieldRegistry, FormState};
use crate::storage::DraftStore;
use crate::submission::{self, Preparation, SubmitOutcome};
use crate::summary::{self, SummaryView};
use crate::transport::{Payload, SubmissionTransport};
use crate::validation::{ValidationResult, Validator};
use chrono::Utc;
use std::time::Instant;

/// The signup form
pub struct SignupForm<S: DraftStore> {
    config: FormConfig,
    validator: Validator,
    registry: FieldRegistry,
    summary: SummaryView,
    focused: Option<FieldId>,
    notice: Option<String>,
    live_validation: Debouncer<FieldId>,
    autosave: Debouncer<()>,
    store: S,
}

impl<S: DraftStore> SignupForm<S> {
    /// Empty form backed by `store`
    pub fn new(config: FormConfig, store: S) -> Result<Self> {
        let validator = Validator::new(&config)?;
        Ok(Self {
            live_validation: Debouncer::new(config.validation_window()),
            autosave: Debouncer::new(config.autosave_window()),
            validator,
            registry: FieldRegistry::new(),
            summary: SummaryView::default(),
            focused: None,
            notice: None,
            config,
            store,
        })
    }

    // =========================================================================
    // Read side
    // =========================================================================

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn value(&self, field: FieldId) -> &str {
        self.registry.value(field)
    }

    pub fn display(&self, field: FieldId) -> &FieldDisplay {
        self.registry.display(field)
    }

    pub fn summary(&self) -> &SummaryView {
        &self.summary
    }

    /// Field that received focus after a failed submit
    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Latest user-facing notice
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_company_mode_active(&self) -> bool {
        self.registry.is_company_mode_active()
    }

    pub fn is_required(&self, field: FieldId) -> bool {
        self.registry.is_required(field)
    }

    pub fn state(&self) -> FormState {
        self.registry.state()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Page load: restore whatever draft is stored
    pub fn load(&mut self) -> bool {
        self.restore_draft()
    }

    /// Input event on a field
    pub fn input(&mut self, field: FieldId, value: impl Into<String>, now: Instant) {
        self.registry.set_value(field, value);
        if field != FieldId::Hp {
            self.live_validation.trigger(field, now);
            self.autosave.trigger((), now);
        }
    }

    /// Company checkbox changed
    pub fn set_company_mode(&mut self, active: bool, now: Instant) {
        self.registry.set_company_mode_active(active);
        self.live_validation.trigger(FieldId::Company, now);
        self.autosave.trigger((), now);
    }

    /// Phone field lost focus
    pub fn blur_phone(&mut self) {
        let raw = self.registry.value(FieldId::Phone);
        if let Some(normalized) = phone::normalize(raw, &self.config.country_code) {
            if normalized != raw {
                tracing::debug!(%normalized, "phone normalized");
                self.registry.set_value(FieldId::Phone, normalized);
            }
        }
    }

    /// Run debounced work that is due at `now`
    pub fn tick(&mut self, now: Instant) {
        if let Some(field) = self.live_validation.poll(now) {
            tracing::debug!(%field, "live validation fired");
            self.validate_field(field);
            self.refresh_summary();
        }
        if self.autosave.poll(now).is_some() {
            self.save_draft();
        }
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.live_validation.deadline(), self.autosave.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Validate one field and show the result in its error slot
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        let result: ValidationResult = self.validator.validate(field, &self.registry.state());
        self.registry.apply(field, result.valid, &result.message);
        result.valid
    }

    /// Rebuild the error summary
    pub fn refresh_summary(&mut self) -> &SummaryView {
        self.summary = summary::aggregate(&self.validator, &mut self.registry);
        &self.summary
    }

    /// Persist the current values; failures are logged, never surfaced
    pub fn save_draft(&mut self) {
        if let Err(e) = draft::save(&self.store, &self.config.storage_key, &self.registry) {
            tracing::warn!(error = %e, "failed to save draft");
        }
    }

    /// Restore the stored draft
    ///
    /// A malformed or unreadable blob abandons the restore as a whole and is
    /// only logged. Returns whether a draft was applied.
    pub fn restore_draft(&mut self) -> bool {
        match draft::restore(&self.store, &self.config.storage_key, &mut self.registry) {
            Ok(restored) => restored,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable draft");
                self.registry.reset();
                false
            }
        }
    }

    /// Clear action: empty form, no draft, no errors, company section hidden
    pub fn clear(&mut self) {
        self.live_validation.cancel();
        self.autosave.cancel();
        self.registry.reset();
        if let Err(e) = draft::discard(&self.store, &self.config.storage_key) {
            tracing::warn!(error = %e, "failed to delete draft");
        }
        self.summary = SummaryView::default();
        self.focused = None;
        self.notice = None;
        tracing::info!("form cleared");
    }

    /// Synchronous part of submit: validation, bot check, payload
    ///
    /// Bypasses the debouncers. On a halt the focus and notice are updated
    /// and the halting outcome is returned as `Err`.
    pub fn prepare_submission(&mut self) -> std::result::Result<Payload, SubmitOutcome> {
        let Preparation { summary, next } =
            submission::prepare(&self.validator, &mut self.registry, Utc::now());
        self.summary = summary;
        if let Err(outcome) = &next {
            self.record(outcome);
        }
        next
    }

    /// Submit the form
    ///
    /// Concurrent submissions are not guarded against; callers wanting
    /// several in flight can pair [`prepare_submission`](Self::prepare_submission)
    /// with [`submission::dispatch`] themselves. The draft is kept whatever
    /// the outcome.
    pub async fn submit(&mut self, transport: &dyn SubmissionTransport) -> SubmitOutcome {
        let payload = match self.prepare_submission() {
            Ok(payload) => payload,
            Err(outcome) => return outcome,
        };
        let outcome = submission::dispatch(transport, &payload).await;
        self.record(&outcome);
        outcome
    }

    fn record(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Invalid { focus } = outcome {
            self.focused = *focus;
        } else {
            self.focused = None;
        }
        self.notice = outcome.notice();
    }
}
