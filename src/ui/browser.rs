// src/ui/browser.rs

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use log::{debug, info};

/// Something that can show a local file in a browser.
pub trait BrowserLauncher {
    /// Hands `target` to the browser. `target` is always absolute.
    fn open(&self, target: &Path) -> Result<()>;
}

/// Uses the platform's default-browser facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, target: &Path) -> Result<()> {
        let mut cmd = launch_command(target);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // The launcher is left running; the browser owns the page from here.
        cmd.spawn()
            .with_context(|| format!("Failed to launch browser for {}", target.display()))?;
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn launch_command(target: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(target_os = "macos")]
fn launch_command(target: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn launch_command(target: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

/// Resolves `page` against the current directory.
pub fn resolve_page(page: &Path) -> Result<PathBuf> {
    if page.is_absolute() {
        return Ok(page.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(page))
}

/// Opens `page` with `launcher`.
///
/// Existence of the page is not checked. A launcher failure is swallowed and
/// yields `None`; only a failure to resolve the path is returned.
pub fn open_page(launcher: &dyn BrowserLauncher, page: &Path) -> Result<Option<PathBuf>> {
    let target = resolve_page(page)?;
    info!("Opening {} in the default browser", target.display());
    match launcher.open(&target) {
        Ok(()) => Ok(Some(target)),
        Err(e) => {
            debug!("{e:#}");
            Ok(None)
        }
    }
}
