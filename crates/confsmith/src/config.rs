//! Config resolution: file + environment + CLI flag overrides.

use url::Url;

use confsmith_api::TransportConfig;
use confsmith_core::PolicyDefaults;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Everything `generate` needs to talk to the generator, after merging
/// the config file with CLI overrides.
pub struct Resolved {
    pub endpoint: Url,
    pub transport: TransportConfig,
    pub policy: PolicyDefaults,
}

/// Load the config file (or defaults) and apply CLI flag overrides.
pub fn resolve(global: &GlobalOpts) -> Result<Resolved, CliError> {
    let mut cfg = confsmith_config::load_config_or_default();

    if let Some(ref endpoint) = global.endpoint {
        cfg.generator.endpoint = endpoint.clone();
    }
    if let Some(timeout) = global.timeout {
        cfg.generator.timeout = timeout;
    }
    if global.insecure {
        cfg.generator.insecure = true;
    }

    let endpoint = cfg.generator.endpoint_url()?;

    Ok(Resolved {
        endpoint,
        transport: cfg.generator.transport(),
        policy: cfg.policy,
    })
}
