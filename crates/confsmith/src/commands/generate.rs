//! `generate`: validate, assemble, submit, print.

use owo_colors::OwoColorize;
use tracing::debug;

use confsmith_api::GeneratorClient;

use crate::cli::{GenerateArgs, GlobalOpts, OutputFormat};
use crate::error::{CliError, map_api_error};
use crate::{config, form, output};

pub async fn handle(args: GenerateArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let form = form::load_form(&args.form)?;
    let resolved = config::resolve(global)?;

    // Validation halts here; no request object exists on failure.
    let request = confsmith_core::prepare_request(&form, &resolved.policy)?;

    if args.dry_run {
        let out = output::render(global.output, &request, |r| {
            serde_json::to_string_pretty(r).unwrap_or_default()
        })?;
        output::print_output(&out, global.quiet);
        return Ok(());
    }

    let client = GeneratorClient::new(resolved.endpoint.clone(), &resolved.transport)
        .map_err(|e| map_api_error(e, &resolved.endpoint))?;

    debug!(endpoint = %resolved.endpoint, "submitting generation request");

    let text = client
        .submit(&request)
        .await
        .map_err(|e| map_api_error(e, &resolved.endpoint))?;

    match global.output {
        OutputFormat::Text => {
            let rendered = if output::should_color(global.color) {
                text.green().to_string()
            } else {
                text
            };
            output::print_output(&rendered, global.quiet);
        }
        other => {
            let doc = serde_json::json!({ "config": text });
            let out = output::render(other, &doc, |_| String::new())?;
            output::print_output(&out, global.quiet);
        }
    }

    Ok(())
}
