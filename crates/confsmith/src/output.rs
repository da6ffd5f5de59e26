//! Output formatting: text, JSON, YAML.
//!
//! Structured formats serialize via serde; text rendering is supplied by
//! each command. Color is gated on terminal detection and `--color`.

use std::io::{self, IsTerminal, Write};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Determine whether color output should be enabled.
pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Render serializable data in the chosen format; `text_fn` supplies the
/// plain-text rendering.
pub fn render<T: serde::Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl Fn(&T) -> String,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => Ok(text_fn(data)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).map_err(|e| CliError::Render(e.to_string()))
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(data).map_err(|e| CliError::Render(e.to_string()))
        }
    }
}

/// Print rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}
