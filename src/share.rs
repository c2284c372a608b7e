use crate::error::ShareError;
use crate::source::Ayah;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use std::io::Write;
use tracing::{debug, warn};

/// Canonical plain-text rendering of one verse for copy/share. Absent
/// sections are omitted entirely, so the output never carries doubled
/// blank lines.
pub fn verse_share_text(ayah: &Ayah, surah_name: &str) -> String {
    let mut sections: Vec<&str> = vec![ayah.arabic.as_str()];
    if let Some(t) = &ayah.transliteration {
        sections.push(t);
    }
    if let Some(t) = &ayah.translation {
        sections.push(t);
    }
    let attribution = format!("({}, Ayat {})", surah_name, ayah.ayah);
    let mut out = sections.join("\n\n");
    out.push_str("\n\n");
    out.push_str(&attribution);
    out
}

/// Copy text to the system clipboard, falling back to an OSC 52 escape
/// sequence when no native clipboard is reachable (headless terminals,
/// SSH sessions).
pub fn copy_text(text: &str) -> Result<(), ShareError> {
    match arboard::Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text.to_string()) {
            Ok(()) => {
                debug!("Copied {} bytes to clipboard", text.len());
                Ok(())
            }
            Err(e) => {
                warn!("Clipboard write failed, trying OSC 52: {}", e);
                copy_via_osc52(text)
            }
        },
        Err(e) => {
            warn!("Clipboard unavailable, trying OSC 52: {}", e);
            copy_via_osc52(text)
        }
    }
}

fn copy_via_osc52(text: &str) -> Result<(), ShareError> {
    let encoded = BASE64.encode(text.as_bytes());
    let mut stdout = std::io::stdout();
    write!(stdout, "\x1b]52;c;{}\x07", encoded)?;
    stdout.flush()?;
    Ok(())
}
