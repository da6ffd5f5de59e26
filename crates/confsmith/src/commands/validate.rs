//! `validate`: check a form file without submitting.

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use confsmith_core::InterfaceDefinition;

use crate::cli::{GlobalOpts, OutputFormat, ValidateArgs};
use crate::error::CliError;
use crate::{form, output};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct InterfaceRow {
    #[tabled(rename = "#")]
    ordinal: usize,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Mask")]
    mask: String,
    #[tabled(rename = "No shutdown")]
    no_shutdown: String,
    #[tabled(rename = "State")]
    state: String,
}

impl InterfaceRow {
    fn new(ordinal: usize, e: &InterfaceDefinition) -> Self {
        let state = if e.is_blank() {
            "blank"
        } else if e.is_filled() {
            "filled"
        } else {
            "partial"
        };
        Self {
            ordinal,
            name: e.name.clone(),
            ip: e.ip.clone(),
            mask: e.mask.clone(),
            no_shutdown: if e.no_shutdown { "yes" } else { "no" }.into(),
            state: state.into(),
        }
    }
}

#[derive(Serialize)]
struct ValidationReport {
    valid: bool,
    interfaces: usize,
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ValidateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let form = form::load_form(&args.form)?;

    // Show the parsed entries first so the reported ordinal in any
    // validation error lines up with what the operator sees.
    if global.output == OutputFormat::Text && !global.quiet && !form.interfaces.is_empty() {
        let rows: Vec<InterfaceRow> = form
            .interfaces
            .list()
            .iter()
            .enumerate()
            .map(|(i, e)| InterfaceRow::new(i + 1, e))
            .collect();
        output::print_output(&Table::new(rows).with(Style::rounded()).to_string(), false);
    }

    confsmith_core::validate(&form)?;

    let report = ValidationReport {
        valid: true,
        interfaces: form.interfaces.len(),
    };
    let out = output::render(global.output, &report, |r| {
        let message = format!("form is valid ({} interfaces)", r.interfaces);
        if output::should_color(global.color) {
            message.green().to_string()
        } else {
            message
        }
    })?;
    output::print_output(&out, global.quiet);
    Ok(())
}
