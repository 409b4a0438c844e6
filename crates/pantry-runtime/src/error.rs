use pantry_types::Locale;
use std::fmt;
use std::path::PathBuf;

/// Result type for pantry-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// A catalog file exists but could not be read or decoded
    CatalogLoad {
        path: PathBuf,
        source: pantry_types::Error,
    },

    /// None of the candidate catalog files exist
    CatalogNotFound { searched: Vec<PathBuf> },

    /// Loading the catalog for a locale switch failed
    LocaleLoad { locale: Locale, source: Box<Error> },

    /// Clipboard write failed (including the fallback)
    Clipboard(String),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CatalogLoad { path, source } => {
                write!(f, "Failed to load catalog {}: {}", path.display(), source)
            }
            Error::CatalogNotFound { searched } => {
                let paths: Vec<String> = searched.iter().map(|p| p.display().to_string()).collect();
                write!(f, "No recipe catalog found (searched: {})", paths.join(", "))
            }
            Error::LocaleLoad { locale, source } => {
                write!(f, "Failed to switch to locale '{}': {}", locale, source)
            }
            Error::Clipboard(msg) => write!(f, "Clipboard error: {}", msg),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::CatalogLoad { source, .. } => Some(source),
            Error::LocaleLoad { source, .. } => Some(source.as_ref()),
            Error::Io(err) => Some(err),
            Error::CatalogNotFound { .. } | Error::Clipboard(_) | Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
