//! CLI error types with miette diagnostics.
//!
//! Maps core, config, and generator errors into user-facing diagnostics
//! with actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use confsmith_core::{CoreError, ValidationError};

/// Exit codes for process termination.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const FORM: i32 = 3;
    pub const GENERATOR: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Form file ────────────────────────────────────────────────────

    #[error("Could not read form file '{path}'")]
    #[diagnostic(
        code(confsmith::form_unreadable),
        help("Check the path. `confsmith sample -f {path}` writes a starter form.")
    )]
    FormRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Form file '{path}' is not valid TOML")]
    #[diagnostic(
        code(confsmith::form_parse),
        help("Compare against `confsmith sample` for the expected layout.")
    )]
    FormParse {
        path: String,
        #[source]
        source: Box<toml::de::Error>,
    },

    #[error("Too many interfaces in the form")]
    #[diagnostic(
        code(confsmith::interface_limit),
        help("This router model supports at most {max} interfaces; remove the extras.")
    )]
    InterfaceLimit { max: usize },

    #[error("Too many telephony extensions in the form")]
    #[diagnostic(
        code(confsmith::extension_limit),
        help("The directory-number roster has {max} slots; remove the extras.")
    )]
    ExtensionLimit { max: usize },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Validation failed: {source}")]
    #[diagnostic(
        code(confsmith::validation),
        help("Fix the reported field and rerun. `confsmith validate <FORM>` checks without submitting.")
    )]
    Validation {
        #[source]
        source: ValidationError,
    },

    // ── Generator ────────────────────────────────────────────────────

    /// The generator answered, but with its failure marker. The message
    /// is shown verbatim — it is the generator's own diagnostic.
    #[error("{message}")]
    #[diagnostic(code(confsmith::generator_failed))]
    GeneratorFailure { message: String },

    #[error("Could not reach the generator at {url}")]
    #[diagnostic(
        code(confsmith::connection_failed),
        help(
            "Check that the generator service is running and reachable.\n\
             Override the endpoint with --endpoint or [generator].endpoint in the config."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(confsmith::timeout),
        help("Increase the timeout with --timeout or check generator responsiveness.")
    )]
    Timeout { seconds: u64 },

    #[error("TLS error: {message}")]
    #[diagnostic(
        code(confsmith::tls_error),
        help("Use --insecure (-k) for self-signed generator certificates.")
    )]
    Tls { message: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(confsmith::invalid_value))]
    InvalidValue { field: String, reason: String },

    #[error(transparent)]
    #[diagnostic(code(confsmith::config))]
    Config(#[from] confsmith_config::ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(confsmith::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } | Self::InvalidValue { .. } => exit_code::USAGE,
            Self::FormRead { .. }
            | Self::FormParse { .. }
            | Self::InterfaceLimit { .. }
            | Self::ExtensionLimit { .. } => exit_code::FORM,
            Self::GeneratorFailure { .. } => exit_code::GENERATOR,
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CapacityExceeded { max } => CliError::InterfaceLimit { max },
            CoreError::Validation(source) => CliError::Validation { source },
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(source: ValidationError) -> Self {
        CliError::Validation { source }
    }
}

/// Map a generator-client error, attaching the endpoint for context.
pub fn map_api_error(err: confsmith_api::Error, endpoint: &url::Url) -> CliError {
    match err {
        confsmith_api::Error::Generator { message } => CliError::GeneratorFailure { message },
        confsmith_api::Error::Timeout { timeout_secs } => CliError::Timeout {
            seconds: timeout_secs,
        },
        confsmith_api::Error::Tls(message) => CliError::Tls { message },
        confsmith_api::Error::InvalidUrl(e) => CliError::InvalidValue {
            field: "endpoint".into(),
            reason: e.to_string(),
        },
        confsmith_api::Error::Transport(e) => CliError::ConnectionFailed {
            url: endpoint.to_string(),
            source: Box::new(e),
        },
    }
}
