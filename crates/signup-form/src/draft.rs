//! Draft persistence
//!
//! The draft is one JSON blob under one fixed key, written whole on every
//! save and deleted whole on clear.

use crate::error::Result;
use crate::registry::{FieldId, FieldRegistry};
use crate::storage::DraftStore;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Persisted snapshot of the in-progress form
///
/// Missing keys, `null`s and values of the wrong type all fall back to
/// `""` / `false`. Only a blob that is not a JSON object fails to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub password: String,
    #[serde(deserialize_with = "lenient_bool")]
    pub company_toggle: bool,
    #[serde(deserialize_with = "lenient_string")]
    pub company: String,
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

impl Draft {
    /// Capture the current field values
    pub fn capture(registry: &FieldRegistry) -> Self {
        Self {
            name: registry.value(FieldId::Name).to_string(),
            email: registry.value(FieldId::Email).to_string(),
            phone: registry.value(FieldId::Phone).to_string(),
            password: registry.value(FieldId::Password).to_string(),
            company_toggle: registry.is_company_mode_active(),
            company: registry.value(FieldId::Company).to_string(),
        }
    }

    /// Write every stored value back and re-derive company visibility
    pub fn apply(&self, registry: &mut FieldRegistry) {
        registry.set_value(FieldId::Name, self.name.as_str());
        registry.set_value(FieldId::Email, self.email.as_str());
        registry.set_value(FieldId::Phone, self.phone.as_str());
        registry.set_value(FieldId::Password, self.password.as_str());
        registry.set_value(FieldId::Company, self.company.as_str());
        registry.set_company_mode_active(self.company_toggle);
    }

    pub fn encode(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn decode(blob: &str) -> Result<Self> {
        Ok(serde_json::from_str(blob)?)
    }
}

/// Overwrite the stored draft with the current field values
pub fn save(store: &dyn DraftStore, key: &str, registry: &FieldRegistry) -> Result<()> {
    let blob = Draft::capture(registry).encode()?;
    store.set(key, &blob)?;
    tracing::debug!(key, bytes = blob.len(), "draft saved");
    Ok(())
}

/// Load the stored draft into the registry
///
/// Returns `Ok(false)` when nothing is stored. Decoding happens before any
/// field is touched, so an unparseable blob leaves the registry as it was.
pub fn restore(store: &dyn DraftStore, key: &str, registry: &mut FieldRegistry) -> Result<bool> {
    let Some(blob) = store.get(key)? else {
        return Ok(false);
    };
    let draft = Draft::decode(&blob)?;
    draft.apply(registry);
    tracing::info!(key, company = draft.company_toggle, "draft restored");
    Ok(true)
}

/// Delete the stored draft
pub fn discard(store: &dyn DraftStore, key: &str) -> Result<()> {
    store.remove(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use proptest::prelude::*;

    const KEY: &str = "signup-draft";

    #[test]
    fn test_blob_shape() {
        let draft = Draft {
            name: "Aino".into(),
            company_toggle: true,
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&draft.encode().unwrap()).unwrap();
        assert_eq!(value["name"], "Aino");
        assert_eq!(value["companyToggle"], true);
        for key in ["email", "phone", "password", "company"] {
            assert_eq!(value[key], "", "{}", key);
        }
    }

    #[test]
    fn test_missing_keys_default() {
        let draft = Draft::decode(r#"{"email":"a@b.fi"}"#).unwrap();
        assert_eq!(draft.email, "a@b.fi");
        assert_eq!(draft.name, "");
        assert!(!draft.company_toggle);
    }

    #[test]
    fn test_restore_absent_is_noop() {
        let store = MemoryStore::new();
        let mut registry = FieldRegistry::new();
        assert!(!restore(&store, KEY, &mut registry).unwrap());
        assert_eq!(registry.state(), FieldRegistry::new().state());
    }

    #[test]
    fn test_malformed_blob_leaves_defaults() {
        let store = MemoryStore::new();
        let mut registry = FieldRegistry::new();

        for blob in [r#"{"name":"Ai"#, "null", r#""text""#, "not json"] {
            store.set(KEY, blob).unwrap();
            assert!(restore(&store, KEY, &mut registry).is_err(), "{}", blob);
            assert_eq!(registry.state(), FieldRegistry::new().state());
        }
    }

    #[test]
    fn test_null_and_mistyped_values_fall_back() {
        let store = MemoryStore::new();
        store
            .set(
                KEY,
                r#"{"name":null,"email":"aino@example.fi","companyToggle":true,"company":"Oy"}"#,
            )
            .unwrap();

        let mut registry = FieldRegistry::new();
        assert!(restore(&store, KEY, &mut registry).unwrap());
        assert_eq!(registry.value(FieldId::Name), "");
        assert_eq!(registry.value(FieldId::Email), "aino@example.fi");
        assert!(registry.is_company_mode_active());
        assert_eq!(registry.value(FieldId::Company), "Oy");

        let draft = Draft::decode(r#"{"name":5,"phone":[],"companyToggle":"yes"}"#).unwrap();
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn test_restore_rederives_company_section() {
        let store = MemoryStore::new();
        store
            .set(KEY, r#"{"companyToggle":true,"company":"Oy Ab"}"#)
            .unwrap();

        let mut registry = FieldRegistry::new();
        assert!(restore(&store, KEY, &mut registry).unwrap());
        assert!(registry.is_company_mode_active());
        assert!(registry.is_required(FieldId::Company));
        assert_eq!(registry.value(FieldId::Company), "Oy Ab");
    }

    #[test]
    fn test_discard() {
        let store = MemoryStore::new();
        save(&store, KEY, &FieldRegistry::new()).unwrap();
        assert!(!store.is_empty());
        discard(&store, KEY).unwrap();
        assert!(store.is_empty());
    }

    proptest! {
        #[test]
        fn prop_round_trip(
            name in ".*",
            email in ".*",
            phone in ".*",
            password in ".*",
            company in ".*",
            company_toggle in any::<bool>(),
        ) {
            let mut source = FieldRegistry::new();
            source.set_value(FieldId::Name, name);
            source.set_value(FieldId::Email, email);
            source.set_value(FieldId::Phone, phone);
            source.set_value(FieldId::Password, password);
            source.set_value(FieldId::Company, company);
            source.set_company_mode_active(company_toggle);

            let store = MemoryStore::new();
            save(&store, KEY, &source).unwrap();

            let mut restored = FieldRegistry::new();
            prop_assert!(restore(&store, KEY, &mut restored).unwrap());
            prop_assert_eq!(restored.state(), source.state());
            prop_assert_eq!(Draft::capture(&restored), Draft::capture(&source));
        }
    }
}
