//! Field registry
//!
//! Structural lookup only: field values, their error-display slots and the
//! company-section toggle. Validation lives in [`crate::validation`].

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Field identifiers
// =============================================================================

/// Bindable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Password,
    Phone,
    Company,
    /// Hidden bot trap
    Hp,
}

impl FieldId {
    /// All fields in document order
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Hp,
    ];

    /// Fields that carry validation rules, in document order
    pub const VALIDATED: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Password,
        FieldId::Phone,
        FieldId::Company,
    ];

    /// Element name
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::Phone => "phone",
            FieldId::Company => "company",
            FieldId::Hp => "hp",
        }
    }

    /// Human-readable label used in the error summary
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Password => "Password",
            FieldId::Phone => "Phone",
            FieldId::Company => "Company",
            FieldId::Hp => "Website",
        }
    }

    /// Whether the field has to be filled in, given the company toggle
    pub fn is_required(&self, company_mode: bool) -> bool {
        match self {
            FieldId::Name | FieldId::Email | FieldId::Password => true,
            FieldId::Company => company_mode,
            FieldId::Phone | FieldId::Hp => false,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("unknown field: {}", s))
    }
}

// =============================================================================
// Display slots
// =============================================================================

/// What the rendering surface shows next to a field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldDisplay {
    /// Inline error text, empty when valid
    pub error_text: String,
    /// Validity marker (`aria-invalid`)
    pub invalid: bool,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    value: String,
    display: FieldDisplay,
}

// =============================================================================
// Form state snapshot
// =============================================================================

/// Snapshot of every field value plus the company toggle
///
/// Validators read only this.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub company: String,
    pub hp: String,
    pub company_mode: bool,
}

impl FormState {
    /// Value of one field
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
            FieldId::Phone => &self.phone,
            FieldId::Company => &self.company,
            FieldId::Hp => &self.hp,
        }
    }

    /// Whether a field currently has to be filled in
    pub fn is_required(&self, field: FieldId) -> bool {
        field.is_required(self.company_mode)
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Holds the bindable fields and the company-section toggle
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    slots: [Slot; 6],
    company_mode: bool,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRegistry {
    /// Empty form, company section hidden
    pub fn new() -> Self {
        Self {
            slots: Default::default(),
            company_mode: false,
        }
    }

    /// Current value of a field
    pub fn value(&self, field: FieldId) -> &str {
        &self.slots[field.index()].value
    }

    /// Replace a field value
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.slots[field.index()].value = value.into();
    }

    /// Whether the field is currently required
    pub fn is_required(&self, field: FieldId) -> bool {
        field.is_required(self.company_mode)
    }

    /// Error slot of a field
    pub fn display(&self, field: FieldId) -> &FieldDisplay {
        &self.slots[field.index()].display
    }

    /// Write a validation outcome into a field's error slot
    pub fn apply(&mut self, field: FieldId, valid: bool, message: &str) {
        let display = &mut self.slots[field.index()].display;
        display.invalid = !valid;
        display.error_text.clear();
        if !valid {
            display.error_text.push_str(message);
        }
    }

    /// Reset a field's error slot
    pub fn clear_error(&mut self, field: FieldId) {
        self.slots[field.index()].display = FieldDisplay::default();
    }

    pub fn is_company_mode_active(&self) -> bool {
        self.company_mode
    }

    /// Show or hide the company section
    ///
    /// The company field is required exactly while the section is visible.
    /// Hiding it also clears any company error.
    pub fn set_company_mode_active(&mut self, active: bool) {
        self.company_mode = active;
        if !active {
            self.clear_error(FieldId::Company);
        }
    }

    /// First validated field carrying the invalid marker, in document order
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::VALIDATED
            .into_iter()
            .find(|f| self.display(*f).invalid)
    }

    /// Snapshot for the validators
    pub fn state(&self) -> FormState {
        FormState {
            name: self.value(FieldId::Name).to_string(),
            email: self.value(FieldId::Email).to_string(),
            password: self.value(FieldId::Password).to_string(),
            phone: self.value(FieldId::Phone).to_string(),
            company: self.value(FieldId::Company).to_string(),
            hp: self.value(FieldId::Hp).to_string(),
            company_mode: self.company_mode,
        }
    }

    /// Back to the freshly constructed form
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_mode_toggles_required() {
        let mut registry = FieldRegistry::new();
        assert!(!registry.is_required(FieldId::Company));

        registry.set_company_mode_active(true);
        assert!(registry.is_required(FieldId::Company));
        assert!(registry.state().is_required(FieldId::Company));

        registry.apply(
            FieldId::Company,
            false,
            "Company name is required when registering as a company.",
        );
        registry.set_company_mode_active(false);
        assert!(!registry.is_required(FieldId::Company));
        assert_eq!(registry.display(FieldId::Company), &FieldDisplay::default());
    }

    #[test]
    fn test_registry_and_snapshot_agree_on_required() {
        let mut registry = FieldRegistry::new();
        for active in [false, true, false] {
            registry.set_company_mode_active(active);
            let state = registry.state();
            for field in FieldId::ALL {
                assert_eq!(registry.is_required(field), state.is_required(field), "{}", field);
            }
        }
        assert!(registry.is_required(FieldId::Password));
        assert!(!registry.is_required(FieldId::Phone));
    }

    #[test]
    fn test_first_invalid_follows_document_order() {
        let mut registry = FieldRegistry::new();
        registry.apply(FieldId::Phone, false, "bad");
        registry.apply(FieldId::Email, false, "bad");
        assert_eq!(registry.first_invalid(), Some(FieldId::Email));

        registry.apply(FieldId::Email, true, "");
        assert_eq!(registry.first_invalid(), Some(FieldId::Phone));
        assert_eq!(registry.display(FieldId::Email).error_text, "");
    }

    #[test]
    fn test_field_id_parse() {
        assert_eq!("phone".parse::<FieldId>().unwrap(), FieldId::Phone);
        assert!("age".parse::<FieldId>().is_err());
        assert_eq!(FieldId::Company.label(), "Company");
    }
}
