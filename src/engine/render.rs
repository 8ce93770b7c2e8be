//! Inlines the canvas script into the HTML template.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::engine::config::TestPageConfig;

/// Replaces every occurrence of `placeholder` in `template` with `fragment`.
///
/// Matches are found left to right without overlap and the inserted text is
/// never rescanned, so a placeholder inside the fragment is kept as is.
pub fn substitute(template: &str, fragment: &str, placeholder: &str) -> String {
    template.replace(placeholder, fragment)
}

/// Reads both inputs and returns the finished page without touching the output file.
pub fn render_page(config: &TestPageConfig) -> Result<String> {
    let fragment = read_input(&config.script_path, "script fragment")?;
    let template = read_input(&config.template_path, "template")?;

    let occurrences = template.matches(config.placeholder.as_str()).count();
    debug!(
        "Substituting {} occurrence(s) of '{}' in {}",
        occurrences,
        config.placeholder,
        config.template_path.display()
    );

    Ok(substitute(&template, &fragment, &config.placeholder))
}

/// Renders the page and writes it to `config.output_path`, truncating any previous page.
///
/// The output file is only created once both inputs have been read.
pub fn render_to_file(config: &TestPageConfig) -> Result<PathBuf> {
    let page = render_page(config)?;
    write_page(&config.output_path, &page)?;
    Ok(config.output_path.clone())
}

fn read_input(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {what} file: {}", path.display()))
}

fn write_page(path: &Path, page: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create test page: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(page.as_bytes())
        .with_context(|| format!("Failed to write test page: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush test page: {}", path.display()))?;
    debug!("Wrote {} bytes to {}", page.len(), path.display());
    Ok(())
}
