use crate::browser::Browser;
use crate::loader::CatalogSource;
use crate::{Error, Result};
use pantry_types::Locale;

/// Load the startup catalog and build the browser around it.
///
/// With a requested locale, its catalog is tried first and the unlocalized
/// catalog second. Without one, the unlocalized catalog is tried first and
/// then the default (or first discovered) locale. Failure here is terminal
/// for the session.
pub fn bootstrap(source: &dyn CatalogSource, requested: Option<Locale>) -> Result<Browser> {
    if let Some(locale) = requested {
        return match source.load(Some(&locale)) {
            Ok(catalog) => Ok(Browser::new(catalog).with_locale(locale)),
            Err(Error::CatalogNotFound { .. }) => {
                tracing::warn!(%locale, "no catalog for locale, using the unlocalized catalog");
                source.load(None).map(Browser::new)
            }
            Err(err) => Err(err),
        };
    }

    match source.load(None) {
        Ok(catalog) => Ok(Browser::new(catalog)),
        Err(Error::CatalogNotFound { searched }) => {
            let available = source.locales();
            let fallback = available
                .iter()
                .find(|l| **l == Locale::default())
                .or_else(|| available.first())
                .cloned();

            match fallback {
                Some(locale) => {
                    tracing::info!(%locale, "no unlocalized catalog, starting in locale");
                    let catalog = source.load(Some(&locale))?;
                    Ok(Browser::new(catalog).with_locale(locale))
                }
                None => Err(Error::CatalogNotFound { searched }),
            }
        }
        Err(err) => Err(err),
    }
}

/// Startup locale: the command line, then the config default
pub fn preferred_locale(explicit: Option<&str>, configured: Option<&Locale>) -> Option<Locale> {
    explicit
        .map(Locale::new)
        .filter(|l| !l.as_str().is_empty())
        .or_else(|| configured.cloned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryCatalogSource;
    use pantry_types::{Catalog, Recipe};

    fn catalog(name: &str) -> Catalog {
        Catalog::new(vec![Recipe::new(1, name)])
    }

    #[test]
    fn test_requested_locale_is_loaded() -> Result<()> {
        let source = MemoryCatalogSource::new()
            .with_default(catalog("Omelette"))
            .with_locale("fr", catalog("Omelette (fr)"));

        let browser = bootstrap(&source, Some(Locale::new("fr")))?;
        assert_eq!(browser.catalog().recipes()[0].name, "Omelette (fr)");
        assert_eq!(browser.locale(), Some(&Locale::new("fr")));
        Ok(())
    }

    #[test]
    fn test_missing_locale_falls_back_to_unlocalized() -> Result<()> {
        let source = MemoryCatalogSource::new().with_default(catalog("Omelette"));

        let browser = bootstrap(&source, Some(Locale::new("nl")))?;
        assert_eq!(browser.catalog().len(), 1);
        assert_eq!(browser.locale(), None);
        Ok(())
    }

    #[test]
    fn test_locale_only_catalogs_start_in_default_locale() -> Result<()> {
        let source = MemoryCatalogSource::new()
            .with_locale("en", catalog("Omelette"))
            .with_locale("de", catalog("Omelett"));

        let browser = bootstrap(&source, None)?;
        assert_eq!(browser.locale(), Some(&Locale::new("en")));
        Ok(())
    }

    #[test]
    fn test_nothing_to_load_is_an_error() {
        let result = bootstrap(&MemoryCatalogSource::new(), None);
        assert!(matches!(result, Err(Error::CatalogNotFound { .. })));
    }

    #[test]
    fn test_preferred_locale_order() {
        let configured = Locale::new("nl");
        assert_eq!(
            preferred_locale(Some("FR"), Some(&configured)),
            Some(Locale::new("fr"))
        );
        assert_eq!(
            preferred_locale(None, Some(&configured)),
            Some(Locale::new("nl"))
        );
        assert_eq!(preferred_locale(Some(" "), None), None);
    }
}
