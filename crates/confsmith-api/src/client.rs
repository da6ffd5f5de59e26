// Generator service HTTP client.
//
// One POST per submission, plain-text response. The generator signals its
// own failures in-band with a leading marker rather than an HTTP status,
// so the response body is classified here before the caller sees it.

use tokio::sync::Mutex;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::request::ConfigRequest;
use crate::transport::TransportConfig;

/// Marker prefix the generator puts on failure responses.
pub const FAILURE_MARKER: &str = "\u{274c}";

/// Async client for the config generator service.
///
/// Submissions are serialized: a second `submit` awaits the first one's
/// completion instead of racing it. Callers that want to refuse concurrent
/// submissions outright can check [`Self::is_busy`] first.
pub struct GeneratorClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout_secs: u64,
    in_flight: Mutex<()>,
}

impl GeneratorClient {
    /// Create a client for the given generation endpoint.
    pub fn new(endpoint: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            endpoint,
            timeout_secs: transport.timeout.as_secs(),
            in_flight: Mutex::new(()),
        })
    }

    /// Wrap a pre-built `reqwest::Client` (used by tests).
    pub fn with_client(http: reqwest::Client, endpoint: Url) -> Self {
        Self {
            http,
            endpoint,
            timeout_secs: 30,
            in_flight: Mutex::new(()),
        }
    }

    /// The configured generation endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether a submission is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.try_lock().is_err()
    }

    /// Submit one assembled request and await the generated text.
    ///
    /// Returns the configuration text on success. A response body starting
    /// with [`FAILURE_MARKER`] becomes [`Error::Generator`]; transport-level
    /// failures become [`Error::Transport`] / [`Error::Timeout`]. No retry
    /// is attempted — resubmission is the caller's decision.
    pub async fn submit(&self, request: &ConfigRequest) -> Result<String, Error> {
        let _guard = self.in_flight.lock().await;

        debug!("POST {}", self.endpoint);

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| self.map_transport(e))?;

        let resp = resp.error_for_status().map_err(Error::Transport)?;
        let body = resp.text().await.map_err(|e| self.map_transport(e))?;

        if body.starts_with(FAILURE_MARKER) {
            return Err(Error::Generator { message: body });
        }

        Ok(body)
    }

    fn map_transport(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            Error::Transport(e)
        }
    }
}
