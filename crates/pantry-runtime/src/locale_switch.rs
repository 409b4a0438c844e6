use crate::Result;
use crate::loader::CatalogSource;
use pantry_types::{Catalog, Locale};
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

/// Identifies one locale switch request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTicket {
    generation: u64,
    locale: Locale,
}

impl LocaleTicket {
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Completion of a background catalog load
#[derive(Debug)]
pub struct LocaleLoaded {
    pub ticket: LocaleTicket,
    pub result: Result<Catalog>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleOutcome {
    /// The catalog was swapped in
    Applied(Locale),
    /// A newer request was issued after this one; the result was dropped
    Stale,
}

/// Last-write-wins bookkeeping for overlapping locale switches.
///
/// Every `begin` supersedes all earlier tickets, so a slow load finishing
/// after a fast one never overwrites the newer catalog.
#[derive(Debug, Default)]
pub struct LocaleSwitcher {
    generation: u64,
}

impl LocaleSwitcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, locale: Locale) -> LocaleTicket {
        self.generation += 1;
        LocaleTicket {
            generation: self.generation,
            locale,
        }
    }

    pub fn is_current(&self, ticket: &LocaleTicket) -> bool {
        ticket.generation == self.generation
    }
}

/// Load the ticket's catalog on a worker thread and send the result back.
///
/// A closed receiver just means the UI went away; the result is dropped.
pub fn spawn_locale_load(
    source: Arc<dyn CatalogSource>,
    ticket: LocaleTicket,
    tx: Sender<LocaleLoaded>,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        tracing::debug!(locale = %ticket.locale, generation = ticket.generation, "loading locale catalog");
        let result = source.load(Some(&ticket.locale));
        if tx.send(LocaleLoaded { ticket, result }).is_err() {
            tracing::debug!("locale load finished after receiver closed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCatalogSource;
    use std::sync::mpsc;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut switcher = LocaleSwitcher::new();
        let first = switcher.begin(Locale::new("fr"));
        let second = switcher.begin(Locale::new("nl"));

        assert!(!switcher.is_current(&first));
        assert!(switcher.is_current(&second));
        assert_eq!(second.locale().as_str(), "nl");
    }

    #[test]
    fn test_worker_delivers_result() {
        let source: Arc<dyn CatalogSource> =
            Arc::new(MemoryCatalogSource::new().with_locale("fr", Catalog::new(Vec::new())));
        let mut switcher = LocaleSwitcher::new();
        let (tx, rx) = mpsc::channel();

        let handle = spawn_locale_load(source, switcher.begin(Locale::new("fr")), tx);
        handle.join().unwrap();

        let loaded = rx.recv().unwrap();
        assert!(switcher.is_current(&loaded.ticket));
        assert!(loaded.result.is_ok());
    }

    #[test]
    fn test_worker_survives_dropped_receiver() {
        let source: Arc<dyn CatalogSource> = Arc::new(MemoryCatalogSource::new());
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let handle = spawn_locale_load(source, LocaleSwitcher::new().begin(Locale::new("en")), tx);
        assert!(handle.join().is_ok());
    }
}
