use thiserror::Error;

/// Top-level error type for the `confsmith-api` crate.
///
/// Distinguishes the two remote failure classes the UI must render
/// differently: a failure *reported by* the generator (it answered, but with
/// its failure marker) versus a failure *reaching* the generator (transport).
#[derive(Debug, Error)]
pub enum Error {
    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, bad status).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request timed out.
    #[error("Request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Generator ───────────────────────────────────────────────────
    /// The generator answered with its failure marker. The message is the
    /// full reported text, marker included, surfaced verbatim to the user.
    #[error("Generator reported failure: {message}")]
    Generator { message: String },
}

impl Error {
    /// Returns `true` if the generator itself reported the failure
    /// (as opposed to the call never completing).
    pub fn is_generator_failure(&self) -> bool {
        matches!(self, Self::Generator { .. })
    }

    /// Returns `true` if this is a transient error a manual resubmit
    /// might resolve.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::Timeout { .. } => true,
            _ => false,
        }
    }
}
