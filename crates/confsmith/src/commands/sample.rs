//! `sample`: write a starter form file.

use crate::cli::{GlobalOpts, SampleArgs};
use crate::error::CliError;
use crate::{form, output};

pub fn handle(args: SampleArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let text =
        toml::to_string_pretty(&form::sample()).map_err(|e| CliError::Render(e.to_string()))?;

    match args.file {
        Some(path) => {
            std::fs::write(&path, &text)?;
            output::print_output(&format!("wrote sample form to {}", path.display()), global.quiet);
        }
        None => output::print_output(&text, global.quiet),
    }
    Ok(())
}
