//! Terminal styling: dialoguer theme, spinner, status lines.
//!
//! Everything here writes to stderr so stdout carries only captions.

use console::{style, Style};
use dialoguer::theme::ColorfulTheme;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Returns a `ColorfulTheme` for socialcap prompts.
///
/// - Prompt prefix: magenta `?`
/// - Success prefix: green `✓`
/// - Error prefix: red `✗`
pub fn socialcap_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("?".to_string()).for_stderr().magenta(),
        prompt_style: Style::new().for_stderr().bold(),
        prompt_suffix: style("›".to_string()).for_stderr().bright().black(),
        success_prefix: style("✓".to_string()).for_stderr().green(),
        success_suffix: style("·".to_string()).for_stderr().bright().black(),
        error_prefix: style("✗".to_string()).for_stderr().red(),
        error_style: Style::new().for_stderr().red(),
        values_style: Style::new().for_stderr().green(),
        ..ColorfulTheme::default()
    }
}

/// Spinner shown while a provider call is in flight.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.magenta} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a red error line to stderr.
pub fn print_error(message: &str) {
    let red = Style::new().for_stderr().red();
    eprintln!("  {} {}", red.apply_to("✗"), message);
}

/// Print a dimmed hint line to stderr.
pub fn print_hint(message: &str) {
    let dim = Style::new().for_stderr().dim();
    eprintln!("  {}", dim.apply_to(message));
}
