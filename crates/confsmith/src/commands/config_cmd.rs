//! `config`: manage the TOML settings file.

use confsmith_config::Config;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let path = confsmith_config::save_config(&Config::default())?;
            output::print_output(&format!("wrote {}", path.display()), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = confsmith_config::load_config_or_default();
            let out = match global.output {
                // TOML is the natural text rendering for the config itself.
                OutputFormat::Text => {
                    toml::to_string_pretty(&cfg).map_err(|e| CliError::Render(e.to_string()))?
                }
                other => output::render(other, &cfg, |_| String::new())?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(
                &confsmith_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }
    }
}
