//! Field validators
//!
//! Each field owns an ordered list of `(check, message)` rules. Evaluation
//! stops at the first failing rule and its message wins. Validators read a
//! [`FormState`] snapshot and return a [`ValidationResult`]; applying the
//! result to the display is the caller's job.

use crate::config::FormConfig;
use crate::error::{FormError, Result};
use crate::registry::{FieldId, FormState};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

// =============================================================================
// Results
// =============================================================================

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    /// Winning message, empty when valid
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

// =============================================================================
// Rules
// =============================================================================

/// A condition that, when it holds, fails the field
#[derive(Debug, Clone)]
pub enum Check {
    /// Empty after trimming
    Missing,
    /// No characters at all; whitespace counts
    Empty,
    /// Fewer than `n` characters after trimming
    TrimmedShorterThan(usize),
    /// Fewer than `n` characters
    ShorterThan(usize),
    /// Does not match the pattern
    NoMatch(Regex),
    /// Lacks an ASCII upper case letter, lower case letter or digit
    WeakMix,
}

impl Check {
    /// True when the value violates this check
    pub fn fails(&self, value: &str) -> bool {
        match self {
            Check::Missing => value.trim().is_empty(),
            Check::Empty => value.is_empty(),
            Check::TrimmedShorterThan(n) => value.trim().chars().count() < *n,
            Check::ShorterThan(n) => value.chars().count() < *n,
            Check::NoMatch(re) => !re.is_match(value),
            Check::WeakMix => {
                let upper = value.chars().any(|c| c.is_ascii_uppercase());
                let lower = value.chars().any(|c| c.is_ascii_lowercase());
                let digit = value.chars().any(|c| c.is_ascii_digit());
                !(upper && lower && digit)
            }
        }
    }
}

/// One rule of a field's chain
#[derive(Debug, Clone)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

impl Rule {
    fn new(check: Check, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// When a field's rule chain runs at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applies {
    Always,
    /// Optional field: empty is valid
    WhenFilled,
    /// Only while the form marks the field as required
    WhenRequired,
}

/// Ordered rule chain for one field
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: FieldId,
    pub applies: Applies,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    /// Run the chain; the first failing rule wins
    pub fn evaluate(&self, state: &FormState) -> ValidationResult {
        let value = state.value(self.field);
        let active = match self.applies {
            Applies::Always => true,
            Applies::WhenFilled => !value.is_empty(),
            Applies::WhenRequired => state.is_required(self.field),
        };
        if !active {
            return ValidationResult::ok();
        }

        self.rules
            .iter()
            .find(|rule| rule.check.fails(value))
            .map(|rule| ValidationResult::fail(rule.message))
            .unwrap_or_else(ValidationResult::ok)
    }
}

// =============================================================================
// Validator
// =============================================================================

/// Rule chains for every validated field
#[derive(Debug, Clone)]
pub struct Validator {
    chains: Vec<FieldRules>,
}

impl Validator {
    /// Build the chains, compiling the configured phone pattern
    pub fn new(config: &FormConfig) -> Result<Self> {
        let email = Regex::new(EMAIL_PATTERN)
            .map_err(|e| FormError::Config(format!("email pattern: {}", e)))?;
        let phone = Regex::new(&config.phone_pattern)
            .map_err(|e| FormError::Config(format!("phone_pattern: {}", e)))?;

        let chains = vec![
            FieldRules {
                field: FieldId::Name,
                applies: Applies::Always,
                rules: vec![
                    Rule::new(Check::Missing, "Name is required."),
                    Rule::new(
                        Check::TrimmedShorterThan(2),
                        "Name must be at least 2 characters.",
                    ),
                ],
            },
            FieldRules {
                field: FieldId::Email,
                applies: Applies::Always,
                rules: vec![
                    Rule::new(Check::Missing, "Email is required."),
                    Rule::new(Check::NoMatch(email), "Enter a valid email address."),
                ],
            },
            FieldRules {
                field: FieldId::Password,
                applies: Applies::Always,
                rules: vec![
                    Rule::new(Check::Empty, "Password is required."),
                    Rule::new(
                        Check::ShorterThan(8),
                        "Password must be at least 8 characters.",
                    ),
                    Rule::new(Check::WeakMix, "Add upper case, lower case, and a number."),
                ],
            },
            FieldRules {
                field: FieldId::Phone,
                applies: Applies::WhenFilled,
                rules: vec![Rule::new(
                    Check::NoMatch(phone),
                    "Phone format example: +358 40 123 4567.",
                )],
            },
            FieldRules {
                field: FieldId::Company,
                applies: Applies::WhenRequired,
                rules: vec![Rule::new(
                    Check::Missing,
                    "Company name is required when registering as a company.",
                )],
            },
        ];

        Ok(Self { chains })
    }

    /// Rule chain of a field, `None` for the bot trap
    pub fn rules(&self, field: FieldId) -> Option<&FieldRules> {
        self.chains.iter().find(|c| c.field == field)
    }

    /// Validate one field
    pub fn validate(&self, field: FieldId, state: &FormState) -> ValidationResult {
        match self.rules(field) {
            Some(chain) => chain.evaluate(state),
            None => ValidationResult::ok(),
        }
    }

    /// Validate every field, in document order, without short-circuiting
    pub fn validate_all(&self, state: &FormState) -> Vec<(FieldId, ValidationResult)> {
        self.chains
            .iter()
            .map(|chain| (chain.field, chain.evaluate(state)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> Validator {
        Validator::new(&FormConfig::default()).unwrap()
    }

    fn state() -> FormState {
        FormState {
            name: "Aino Virtanen".into(),
            email: "aino@example.fi".into(),
            password: "Secret123".into(),
            ..Default::default()
        }
    }

    fn message(field: FieldId, state: &FormState) -> String {
        validator().validate(field, state).message
    }

    #[test]
    fn test_valid_state() {
        let v = validator();
        assert!(v.validate_all(&state()).iter().all(|(_, r)| r.valid));
    }

    #[test]
    fn test_name_rules() {
        let mut s = state();
        s.name = String::new();
        assert_eq!(message(FieldId::Name, &s), "Name is required.");

        s.name = "   ".into();
        assert_eq!(message(FieldId::Name, &s), "Name is required.");

        s.name = " A ".into();
        assert_eq!(message(FieldId::Name, &s), "Name must be at least 2 characters.");

        s.name = "Al".into();
        assert!(validator().validate(FieldId::Name, &s).valid);
    }

    #[test]
    fn test_email_rules() {
        let mut s = state();
        s.email = String::new();
        assert_eq!(message(FieldId::Email, &s), "Email is required.");

        for bad in ["aino", "aino@", "aino@example", "ai no@example.fi", "@example.fi"] {
            s.email = bad.into();
            assert_eq!(
                message(FieldId::Email, &s),
                "Enter a valid email address.",
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_password_precedence() {
        let mut s = state();
        s.password = String::new();
        assert_eq!(message(FieldId::Password, &s), "Password is required.");

        // Too short wins over the character mix
        s.password = "abc".into();
        assert_eq!(
            message(FieldId::Password, &s),
            "Password must be at least 8 characters."
        );

        s.password = "abc12345".into();
        assert_eq!(
            message(FieldId::Password, &s),
            "Add upper case, lower case, and a number."
        );

        s.password = "12345Abc".into();
        assert!(validator().validate(FieldId::Password, &s).valid);
    }

    #[test]
    fn test_blank_password_is_not_missing() {
        let mut s = state();
        s.password = " ".repeat(8);
        assert_eq!(
            message(FieldId::Password, &s),
            "Add upper case, lower case, and a number."
        );

        s.password = "   ".into();
        assert_eq!(
            message(FieldId::Password, &s),
            "Password must be at least 8 characters."
        );
    }

    #[test]
    fn test_phone_is_optional() {
        let mut s = state();
        assert!(validator().validate(FieldId::Phone, &s).valid);

        s.phone = "+358 40 123 4567".into();
        assert!(validator().validate(FieldId::Phone, &s).valid);

        s.phone = "call me".into();
        assert_eq!(
            message(FieldId::Phone, &s),
            "Phone format example: +358 40 123 4567."
        );
    }

    #[test]
    fn test_company_depends_on_mode() {
        let mut s = state();
        assert!(validator().validate(FieldId::Company, &s).valid);

        s.company_mode = true;
        assert_eq!(
            message(FieldId::Company, &s),
            "Company name is required when registering as a company."
        );

        s.company = "Oy Example Ab".into();
        assert!(validator().validate(FieldId::Company, &s).valid);
    }

    #[test]
    fn test_validation_is_pure() {
        let v = validator();
        let mut s = state();
        s.password = "short".into();
        let first = v.validate_all(&s);
        let second = v.validate_all(&s);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bot_trap_never_fails() {
        let mut s = state();
        s.hp = "http://spam".into();
        assert!(validator().rules(FieldId::Hp).is_none());
        assert!(validator().validate(FieldId::Hp, &s).valid);
    }

    #[test]
    fn test_custom_phone_pattern() {
        let config = FormConfig {
            phone_pattern: r"^\+358\d{6,10}$".into(),
            ..Default::default()
        };
        let v = Validator::new(&config).unwrap();
        let mut s = state();
        s.phone = "+358 40 123 4567".into();
        assert!(!v.validate(FieldId::Phone, &s).valid);
        s.phone = "+358401234567".into();
        assert!(v.validate(FieldId::Phone, &s).valid);
    }

    #[test]
    fn test_invalid_phone_pattern_is_config_error() {
        let config = FormConfig {
            phone_pattern: "([".into(),
            ..Default::default()
        };
        assert!(matches!(Validator::new(&config), Err(FormError::Config(_))));
    }
}
