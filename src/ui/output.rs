use std::path::Path;

#[cfg(feature = "colors")]
use colored::Colorize;

/// Reports a freshly written test page.
pub fn print_written(path: &Path) {
    let msg = format!("Test page written to: {}", path.display());

    #[cfg(feature = "colors")]
    println!(
        "{}{}{} {}",
        "[".bold().white(),
        "✓".bold().green(),
        "]".bold().white(),
        msg.green()
    );

    #[cfg(not(feature = "colors"))]
    println!("[✓] {msg}");
}

/// Reports the page handed to the browser.
pub fn print_opening(path: &Path) {
    let msg = format!("Opening in browser: {}", path.display());

    #[cfg(feature = "colors")]
    println!("{} {}", "[i]".bold().white(), msg.yellow());

    #[cfg(not(feature = "colors"))]
    println!("[i] {msg}");
}
