use crate::error::{Result, ShelfError};
use std::process::{Command, Stdio};
use tracing::debug;

/// Environment variable naming a program to open links with, overriding the
/// platform opener.
pub const BROWSER_ENV: &str = "PAPERSHELF_BROWSER";

/// Opens `target` in a new browsing context, in an OS-specific way.
/// - macOS: uses open
/// - Linux: uses xdg-open
/// - Windows: uses `cmd /C start`
///
/// `$PAPERSHELF_BROWSER` takes precedence on every platform.
pub fn open_target(target: &str) -> Result<()> {
    if !is_openable(target) {
        return Err(ShelfError::Browser(format!(
            "Refusing to open non-web target: {}",
            target
        )));
    }

    let (program, args) = opener_command(target);
    debug!(%program, url = target, "opening link");

    let status = Command::new(&program)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| ShelfError::Browser(format!("Failed to launch {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(ShelfError::Browser(format!("{} exited with error", program)))
    }
}

/// Only web links are handed to the opener.
pub fn is_openable(target: &str) -> bool {
    let lower = target.trim().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

fn opener_command(target: &str) -> (String, Vec<String>) {
    if let Ok(browser) = std::env::var(BROWSER_ENV) {
        if !browser.trim().is_empty() {
            return (browser, vec![target.to_string()]);
        }
    }
    platform_opener(target)
}

#[cfg(target_os = "macos")]
fn platform_opener(target: &str) -> (String, Vec<String>) {
    ("open".to_string(), vec![target.to_string()])
}

#[cfg(target_os = "windows")]
fn platform_opener(target: &str) -> (String, Vec<String>) {
    (
        "cmd".to_string(),
        vec![
            "/C".to_string(),
            "start".to_string(),
            String::new(),
            target.to_string(),
        ],
    )
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_opener(target: &str) -> (String, Vec<String>) {
    ("xdg-open".to_string(), vec![target.to_string()])
}
