//! Clipboard access.
//!
//! `arboard` handles Windows, macOS and Linux. A fresh handle is opened per
//! copy so nothing holds the clipboard between copies.

use anyhow::{Context, Result};
use std::time::Duration;

pub trait ClipboardSink: Send + Sync {
    fn set_text(&self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard {
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// On X11 and Wayland copied text is only served while this process owns
    /// the selection. A holding clipboard blocks in `set_text` until another
    /// program takes the clipboard over or `hold` runs out. Other platforms
    /// keep the text after the process exits and ignore it.
    pub fn holding_for(hold: Duration) -> Self {
        Self { hold: Some(hold) }
    }

    pub fn hold(&self) -> Option<Duration> {
        self.hold
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to access clipboard")?;
        let set = clipboard.set();

        #[cfg(all(
            unix,
            not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
        ))]
        let set = match self.hold {
            Some(hold) => {
                use arboard::SetExtLinux;
                set.wait_until(std::time::Instant::now() + hold)
            }
            None => set,
        };

        set.text(text).context("Failed to set clipboard text")?;
        Ok(())
    }
}
