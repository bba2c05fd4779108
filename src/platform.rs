//! Platform-specific configuration

use anyhow::{Context, Result};
use std::process::Command;

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Opens an external URL, leaving the app
#[cfg_attr(test, mockall::automock)]
pub trait Redirector: Send {
    fn open(&self, url: &str) -> Result<()>;
}

/// Hands URLs to the desktop's default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl SystemBrowser {
    /// Launcher command and leading arguments
    /// - macOS: `open`
    /// - Windows: `cmd /C start ""`
    /// - Others: `xdg-open`
    fn launcher() -> (&'static str, &'static [&'static str]) {
        if cfg!(target_os = "macos") {
            ("open", &[])
        } else if cfg!(target_os = "windows") {
            ("cmd", &["/C", "start", ""])
        } else {
            ("xdg-open", &[])
        }
    }
}

impl Redirector for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let (program, args) = Self::launcher();
        Command::new(program)
            .args(args)
            .arg(url)
            .spawn()
            .with_context(|| format!("Failed to open {url} with {program}"))?;
        tracing::info!(%url, "Redirected to external URL");
        Ok(())
    }
}
