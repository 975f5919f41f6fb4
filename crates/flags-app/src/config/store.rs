//! Durable key/value storage seam for preferences

use std::collections::HashMap;

use flags_core::prelude::*;

/// String-keyed scalar storage that survives sessions.
///
/// Implementations must tolerate absent keys; writes may fail (quota,
/// private browsing) and report [`Error::Storage`].
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store, used natively and in tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail
    pub fn read_only() -> Self {
        Self {
            values: HashMap::new(),
            read_only: true,
        }
    }

    pub fn with_values<'a>(values: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            read_only: false,
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.read_only {
            return Err(Error::storage(format!("store is read-only, cannot write {key}")));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("speechRate"), None);

        store.set("speechRate", "1.4").unwrap();
        assert_eq!(store.get("speechRate").as_deref(), Some("1.4"));
    }

    #[test]
    fn test_read_only_store_rejects_writes() {
        let mut store = MemoryStore::read_only();
        let err = store.set("appLanguage", "sv").unwrap_err();
        assert!(matches!(err, Error::Storage { .. }));
        assert_eq!(store.get("appLanguage"), None);
    }
}
