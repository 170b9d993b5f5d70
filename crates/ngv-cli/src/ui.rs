//! Status messages on stderr.

use console::style;

/// Enable or disable styling for the status messages.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && crate::logger::should_use_colors();
    console::set_colors_enabled_stderr(enabled);
}

pub fn success(message: &str) {
    eprintln!("{} {}", style("✓").green().bold().for_stderr(), message);
}

pub fn info(message: &str) {
    eprintln!("{} {}", style("ℹ").blue().bold().for_stderr(), message);
}

pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        style("⚠").yellow().bold().for_stderr(),
        style(message).yellow().for_stderr()
    );
}
