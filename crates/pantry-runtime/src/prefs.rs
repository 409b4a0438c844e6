use crate::Result;
use pantry_types::{Locale, ViewMode};
use std::collections::BTreeMap;
use std::sync::Mutex;

pub const VIEW_MODE_KEY: &str = "view_mode";
pub const LOCALE_KEY: &str = "locale";

/// Key-value preference storage for the current session.
///
/// Unknown or unparsable values read back as `None` so a corrupt entry never
/// blocks startup.
pub trait PrefStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn view_mode(&self) -> Option<ViewMode> {
        self.get(VIEW_MODE_KEY).and_then(|v| v.parse().ok())
    }

    fn set_view_mode(&self, mode: ViewMode) -> Result<()> {
        self.set(VIEW_MODE_KEY, mode.as_str())
    }

    fn locale(&self) -> Option<Locale> {
        self.get(LOCALE_KEY)
            .map(|v| Locale::new(&v))
            .filter(|l| !l.as_str().is_empty())
    }

    fn set_locale(&self, locale: &Locale) -> Result<()> {
        self.set(LOCALE_KEY, locale.as_str())
    }
}

/// Session-scoped preferences, gone when the process exits
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_prefs() -> Result<()> {
        let prefs = MemoryPrefs::new();
        assert_eq!(prefs.view_mode(), None);
        assert_eq!(prefs.locale(), None);

        prefs.set_view_mode(ViewMode::List)?;
        prefs.set_locale(&Locale::new("NL"))?;
        assert_eq!(prefs.view_mode(), Some(ViewMode::List));
        assert_eq!(prefs.locale(), Some(Locale::new("nl")));
        Ok(())
    }

    #[test]
    fn test_garbage_values_read_as_none() -> Result<()> {
        let prefs = MemoryPrefs::new();
        prefs.set(VIEW_MODE_KEY, "sideways")?;
        prefs.set(LOCALE_KEY, "")?;

        assert_eq!(prefs.view_mode(), None);
        assert_eq!(prefs.locale(), None);
        Ok(())
    }
}
