use anyhow::Result;
use log::debug;

use crate::{
    engine::{config::TestPageConfig, render},
    ui::{
        browser::{self, BrowserLauncher, SystemBrowser},
        cli::Cli,
        output,
    },
};

/// The primary orchestration function for the application.
pub fn run(args: Cli) -> Result<()> {
    run_with(&args, &TestPageConfig::default(), &SystemBrowser)
}

/// Runs the requested steps against `config`, rendering before opening.
///
/// Each step is independent: opening never re-renders and does not depend on
/// a render having happened in the same invocation.
pub fn run_with(args: &Cli, config: &TestPageConfig, launcher: &dyn BrowserLauncher) -> Result<()> {
    if args.is_noop() {
        debug!("No steps requested, nothing to do");
        return Ok(());
    }

    // ──────────────────────────────────────────────────────────
    // Render step
    // ──────────────────────────────────────────────────────────
    if args.test_render {
        debug!(
            "Rendering {} + {} -> {}",
            config.template_path.display(),
            config.script_path.display(),
            config.output_path.display()
        );
        let written = render::render_to_file(config)?;
        output::print_written(&written);
    }

    // ──────────────────────────────────────────────────────────
    // Browser-open step
    // ──────────────────────────────────────────────────────────
    if args.test_browser {
        if let Some(target) = browser::open_page(launcher, &config.output_path)? {
            output::print_opening(&target);
        }
    }

    Ok(())
}
