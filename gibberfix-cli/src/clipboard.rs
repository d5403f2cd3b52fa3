//! Clipboard capability used by the command line shell

use anyhow::{Context, Result};
use gibberfix_core::Conversion;

/// Something that can receive converted text
pub trait Clipboard {
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;
}

/// The desktop clipboard.
///
/// On Linux the selection is served by this process, so copying blocks until
/// another application takes the clipboard over.
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    #[cfg(target_os = "linux")]
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        use arboard::SetExtLinux;

        let mut clipboard = arboard::Clipboard::new().context("Failed to open the system clipboard")?;
        log::info!("Serving the clipboard until another application replaces it");
        clipboard
            .set()
            .wait()
            .text(text.to_owned())
            .context("Failed to write to the system clipboard")?;
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Failed to open the system clipboard")?;
        clipboard
            .set_text(text.to_owned())
            .context("Failed to write to the system clipboard")?;
        Ok(())
    }
}

/// Copies the conversion output if there is any. Returns whether it copied.
pub fn copy_output<C: Clipboard>(clipboard: &mut C, conversion: &Conversion) -> Result<bool> {
    if conversion.is_empty() {
        log::warn!("Nothing to copy, the converted text is empty");
        return Ok(false);
    }

    clipboard.copy_to_clipboard(conversion.text())?;
    log::info!("Copied {} characters to the clipboard", conversion.len());
    Ok(true)
}
