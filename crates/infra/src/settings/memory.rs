//! In-memory settings store.

use std::collections::HashMap;

use etincelle_core::SettingsStore;
use etincelle_domain::Result;
use parking_lot::Mutex;

/// Volatile settings backend; every value is lost on drop.
#[derive(Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set_string(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_read_as_defaults() {
        let store = MemorySettingsStore::new();
        assert_eq!(store.get_string("nope").expect("read"), None);
        assert!(!store.get_bool("nope").expect("read"));
        assert_eq!(store.get_u32("nope").expect("read"), 0);
    }

    #[test]
    fn typed_helpers_round_trip() {
        let store = MemorySettingsStore::new();
        store.set_bool("flag", true).expect("write");
        store.set_u32("count", 4).expect("write");

        assert!(store.get_bool("flag").expect("read"));
        assert_eq!(store.get_u32("count").expect("read"), 4);
    }
}
