pub mod browser;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod loader;
pub mod locale_switch;
pub mod prefs;
pub mod startup;

pub use browser::{Browser, BrowserEvent, ChannelSubscriber, Subscriber};
pub use clipboard::{ClipboardSink, CopyOutcome, FileClipboard, SystemClipboard, copy_with_fallback};
pub use config::{Config, expand_tilde, resolve_data_path};
pub use error::{Error, Result};
pub use loader::{CatalogSource, FsCatalogSource, MemoryCatalogSource};
pub use locale_switch::{LocaleLoaded, LocaleOutcome, LocaleSwitcher, LocaleTicket, spawn_locale_load};
pub use prefs::{LOCALE_KEY, MemoryPrefs, PrefStore, VIEW_MODE_KEY};
pub use startup::{bootstrap, preferred_locale};
