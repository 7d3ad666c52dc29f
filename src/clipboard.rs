//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Destination for a copied password.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

pub struct SystemClipboard(ClipboardContext);

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        ClipboardContext::new()
            .map(SystemClipboard)
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        self.0
            .set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;
        // Drop the provider's read-back copy
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        log::debug!("copied {} chars to clipboard", text.len());
        Ok(())
    }
}

/// Opens the system clipboard on first use and keeps it for later copies.
#[derive(Default)]
pub struct LazyClipboard(Option<SystemClipboard>);

impl Clipboard for LazyClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        let clip = match self.0.take() {
            Some(clip) => clip,
            None => SystemClipboard::new()?,
        };
        self.0.insert(clip).copy(text)
    }
}
