use crate::api::ports::SettingsStore;
use crate::util::error::GridError;
use serde::{Deserialize, Serialize};

/// Persisted overlay settings.
///
/// Missing fields are backfilled from [`Settings::default`]; unknown fields
/// are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(alias = "Enabled")]
    pub enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Settings {
    /// Parses a stored payload. `null` and malformed payloads yield `None`.
    pub fn from_json(payload: &str) -> Option<Self> {
        match serde_json::from_str::<Option<Settings>>(payload) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings payload: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Result<String, GridError> {
        serde_json::to_string(self).map_err(|e| GridError::SettingsError(e.to_string()))
    }

    /// Reads settings from `store`, falling back to defaults when the entry
    /// is absent or unusable.
    pub fn load<S: SettingsStore>(store: &S, key: &str) -> Self {
        store
            .get(key)
            .and_then(|payload| Self::from_json(&payload))
            .unwrap_or_default()
    }

    pub fn save<S: SettingsStore>(&self, store: &mut S, key: &str) -> Result<(), GridError> {
        store.set(key, &self.to_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::store::MemoryStore;

    const KEY: &str = "test_settings";

    #[test]
    fn test_default_is_enabled() {
        assert!(Settings::default().enabled);
    }

    #[test]
    fn test_empty_object_backfills_default() {
        let store = MemoryStore::new().with_entry(KEY, "{}");
        assert_eq!(Settings::load(&store, KEY), Settings { enabled: true });
    }

    #[test]
    fn test_missing_entry_is_default() {
        let store = MemoryStore::new();
        assert_eq!(Settings::load(&store, KEY), Settings::default());
    }

    #[test]
    fn test_malformed_payloads_fall_back() {
        for payload in ["not json", "null", "42", r#"{"enabled":"yes"}"#] {
            let store = MemoryStore::new().with_entry(KEY, payload);
            assert_eq!(Settings::load(&store, KEY), Settings::default(), "{}", payload);
        }
    }

    #[test]
    fn test_legacy_capitalised_key() {
        let store = MemoryStore::new().with_entry(KEY, r#"{"Enabled":false}"#);
        assert!(!Settings::load(&store, KEY).enabled);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let store = MemoryStore::new().with_entry(KEY, r#"{"enabled":false,"colour":"red"}"#);
        assert!(!Settings::load(&store, KEY).enabled);
    }

    #[test]
    fn test_save_then_load() -> Result<(), GridError> {
        let mut store = MemoryStore::new();
        Settings { enabled: false }.save(&mut store, KEY)?;

        assert_eq!(store.get(KEY).as_deref(), Some(r#"{"enabled":false}"#));
        assert!(!Settings::load(&store, KEY).enabled);
        Ok(())
    }
}
