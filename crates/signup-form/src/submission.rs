//! Submission controller
//!
//! Final validation pass, bot-trap check, payload construction and the
//! remote send. Nothing here retries, and nothing here touches the draft.

use crate::registry::{FieldId, FieldRegistry, FormState};
use crate::summary::{self, SummaryView};
use crate::transport::{Payload, SubmissionId, SubmissionTransport};
use crate::validation::Validator;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Notice shown when the bot trap is filled
pub const BOT_BLOCKED_NOTICE: &str = "Submission blocked. Please reload the page and try again.";

/// Notice shown when the send fails
pub const RETRY_NOTICE: &str = "Something went wrong while sending the form. Please try again.";

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// At least one field failed; focus moves to the first one
    Invalid { focus: Option<FieldId> },
    /// Hidden bot-trap field was filled
    BotBlocked,
    /// Endpoint accepted the payload
    Submitted { id: SubmissionId },
    /// Network or response failure
    Failed,
}

impl SubmitOutcome {
    /// User-facing notice, if the outcome raises one
    pub fn notice(&self) -> Option<String> {
        match self {
            SubmitOutcome::Invalid { .. } => None,
            SubmitOutcome::BotBlocked => Some(BOT_BLOCKED_NOTICE.to_string()),
            SubmitOutcome::Submitted { id } => Some(format!(
                "Thanks for signing up! Your registration ID is {}.",
                id
            )),
            SubmitOutcome::Failed => Some(RETRY_NOTICE.to_string()),
        }
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted { .. })
    }
}

/// Result of the synchronous part of a submit
#[derive(Debug, Clone)]
pub struct Preparation {
    /// Summary rebuilt by the validation pass
    pub summary: SummaryView,
    /// Payload ready to send, or the outcome that halted the submit
    pub next: std::result::Result<Payload, SubmitOutcome>,
}

/// Build the outbound payload
///
/// Company is forced empty while company mode is off, whatever the field holds.
pub fn build_payload(state: &FormState, time: DateTime<Utc>) -> Payload {
    Payload {
        name: state.name.clone(),
        email: state.email.clone(),
        phone: state.phone.clone(),
        company: if state.company_mode {
            state.company.clone()
        } else {
            String::new()
        },
        time: time.to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

/// Validate everything, check the bot trap and build the payload
///
/// All five validators run; none is short-circuited by an earlier failure.
pub fn prepare(
    validator: &Validator,
    registry: &mut FieldRegistry,
    time: DateTime<Utc>,
) -> Preparation {
    let state = registry.state();
    let mut valid = true;
    for (field, result) in validator.validate_all(&state) {
        registry.apply(field, result.valid, &result.message);
        valid &= result.valid;
    }
    let summary = summary::aggregate(validator, registry);

    if !valid {
        let focus = registry.first_invalid();
        tracing::debug!(?focus, "submit halted by validation");
        return Preparation {
            summary,
            next: Err(SubmitOutcome::Invalid { focus }),
        };
    }

    if !state.hp.is_empty() {
        tracing::warn!("submit blocked: bot trap filled");
        return Preparation {
            summary,
            next: Err(SubmitOutcome::BotBlocked),
        };
    }

    Preparation {
        summary,
        next: Ok(build_payload(&state, time)),
    }
}

/// Send a prepared payload and translate the result
pub async fn dispatch(transport: &dyn SubmissionTransport, payload: &Payload) -> SubmitOutcome {
    match transport.send(payload).await {
        Ok(receipt) => {
            tracing::info!(
                id = %receipt.id,
                payload = %serde_json::to_string(payload).unwrap_or_default(),
                "signup submitted"
            );
            SubmitOutcome::Submitted { id: receipt.id }
        }
        Err(e) => {
            tracing::error!(error = %e, "signup submission failed");
            SubmitOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use chrono::TimeZone;

    fn time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap()
    }

    fn filled() -> FieldRegistry {
        let mut registry = FieldRegistry::new();
        registry.set_value(FieldId::Name, "Aino Virtanen");
        registry.set_value(FieldId::Email, "aino@example.fi");
        registry.set_value(FieldId::Password, "Secret123");
        registry.set_value(FieldId::Company, "Leftover Oy");
        registry
    }

    fn validator() -> Validator {
        Validator::new(&FormConfig::default()).unwrap()
    }

    #[test]
    fn test_payload_drops_company_outside_company_mode() {
        let payload = build_payload(&filled().state(), time());
        assert_eq!(payload.company, "");
        assert_eq!(payload.time, "2026-10-19T08:30:00.000Z");

        let mut registry = filled();
        registry.set_company_mode_active(true);
        assert_eq!(build_payload(&registry.state(), time()).company, "Leftover Oy");
    }

    #[test]
    fn test_invalid_focuses_first_failing_field() {
        let mut registry = filled();
        registry.set_value(FieldId::Email, "nope");
        registry.set_value(FieldId::Phone, "letters");

        let prep = prepare(&validator(), &mut registry, time());
        assert_eq!(
            prep.next.unwrap_err(),
            SubmitOutcome::Invalid { focus: Some(FieldId::Email) }
        );
        assert_eq!(prep.summary.items.len(), 2);
        // Not short-circuited: phone was evaluated too
        assert!(registry.display(FieldId::Phone).invalid);
    }

    #[test]
    fn test_company_mode_requires_company() {
        let mut registry = filled();
        registry.set_value(FieldId::Company, "");
        registry.set_company_mode_active(true);

        let prep = prepare(&validator(), &mut registry, time());
        assert_eq!(
            prep.next.unwrap_err(),
            SubmitOutcome::Invalid { focus: Some(FieldId::Company) }
        );
    }

    #[test]
    fn test_bot_trap_checked_after_validity() {
        let mut registry = FieldRegistry::new();
        registry.set_value(FieldId::Hp, "https://spam.example");
        let prep = prepare(&validator(), &mut registry, time());
        assert!(matches!(prep.next, Err(SubmitOutcome::Invalid { .. })));

        let mut registry = filled();
        registry.set_value(FieldId::Hp, "https://spam.example");
        let prep = prepare(&validator(), &mut registry, time());
        assert_eq!(prep.next.unwrap_err(), SubmitOutcome::BotBlocked);
        assert!(!prep.summary.visible);
    }

    #[test]
    fn test_notices() {
        assert_eq!(SubmitOutcome::Invalid { focus: None }.notice(), None);
        assert_eq!(
            SubmitOutcome::Submitted { id: SubmissionId::Number(101) }.notice().unwrap(),
            "Thanks for signing up! Your registration ID is 101."
        );
        assert_eq!(SubmitOutcome::Failed.notice().unwrap(), RETRY_NOTICE);
        assert_eq!(SubmitOutcome::BotBlocked.notice().unwrap(), BOT_BLOCKED_NOTICE);
    }
}
