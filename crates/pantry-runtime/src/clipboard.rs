use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Somewhere the shopping list can be copied to
pub trait ClipboardSink {
    /// Where the text ends up, for status messages
    fn target(&self) -> String;
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard via arboard.
///
/// The handle is kept for the life of the sink; on X11 the copied text is
/// only served while its owner is alive.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| Error::Clipboard("clipboard unavailable".to_string()))
    }
}

impl ClipboardSink for SystemClipboard {
    fn target(&self) -> String {
        "clipboard".to_string()
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        let clipboard = self.handle()?;
        match clipboard.set_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                // A broken handle is dropped so the next copy reconnects
                self.inner = None;
                Err(Error::Clipboard(e.to_string()))
            }
        }
    }
}

/// Writes the text to a file, replacing previous contents
#[derive(Debug, Clone)]
pub struct FileClipboard {
    path: PathBuf,
}

impl FileClipboard {
    pub const FILE_NAME: &'static str = "shopping-list.txt";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ClipboardSink for FileClipboard {
    fn target(&self) -> String {
        self.path.display().to_string()
    }

    fn copy(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut content = text.to_string();
        content.push('\n');
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// The primary sink failed; the text went to the fallback instead
    Saved(String),
    Failed(String),
}

impl CopyOutcome {
    /// Short status line for a toast
    pub fn message(&self) -> String {
        match self {
            CopyOutcome::Copied => "Copied!".to_string(),
            CopyOutcome::Saved(target) => format!("Saved to {}", target),
            CopyOutcome::Failed(_) => "Copy failed".to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        !matches!(self, CopyOutcome::Failed(_))
    }
}

/// Copy to `primary`, falling back to `fallback`. Never returns an error;
/// failures are reported through the outcome.
pub fn copy_with_fallback(
    primary: &mut dyn ClipboardSink,
    fallback: &mut dyn ClipboardSink,
    text: &str,
) -> CopyOutcome {
    let first = match primary.copy(text) {
        Ok(()) => return CopyOutcome::Copied,
        Err(err) => err,
    };
    tracing::warn!(sink = %primary.target(), "copy failed, trying fallback: {}", first);

    match fallback.copy(text) {
        Ok(()) => CopyOutcome::Saved(fallback.target()),
        Err(err) => {
            tracing::warn!(sink = %fallback.target(), "fallback copy failed: {}", err);
            CopyOutcome::Failed(err.to_string())
        }
    }
}
