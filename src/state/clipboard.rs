//! Clipboard access.
//!
//! On Linux the external tools (`wl-copy`, `xclip`, `xsel`) are tried first
//! because their content outlives the process; `arboard` is the fallback and
//! the only path on macOS and Windows.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    NotAvailable,
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Copies `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error if no clipboard is reachable or the copy fails.
pub fn copy_text(text: &str) -> Result<(), ClipboardError> {
    #[cfg(target_os = "linux")]
    if copy_with_external_tool(text) {
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
}

#[cfg(target_os = "linux")]
const LINUX_TOOLS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "linux")]
fn copy_with_external_tool(text: &str) -> bool {
    LINUX_TOOLS
        .iter()
        .any(|(tool, args)| pipe_to_tool(tool, args, text))
}

#[cfg(target_os = "linux")]
fn pipe_to_tool(tool: &str, args: &[&str], text: &str) -> bool {
    use std::io::Write;
    use std::process::{Command, Stdio};

    let Ok(mut child) = Command::new(tool)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    let Some(mut stdin) = child.stdin.take() else {
        return false;
    };
    if stdin.write_all(text.as_bytes()).is_err() {
        return false;
    }
    drop(stdin);

    child.wait().map(|s| s.success()).unwrap_or(false)
}
