// Controller HTTP client
//
// Wraps `reqwest::Client` with base-URL joining and status/JSON handling.
// Endpoint groups (monitoring, topology, lists) are implemented as inherent
// methods in separate files to keep this module focused on transport
// mechanics.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// HTTP client for the Ryu DDoS-detection REST backend.
///
/// Construct it once at startup and pass `&RyuClient` to whatever needs
/// backend access. Every accessor issues exactly one request and resolves to
/// the response body parsed as JSON, untouched.
#[derive(Debug, Clone)]
pub struct RyuClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RyuClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the API root, including any path prefix
    /// (e.g. `http://127.0.0.1:8080/api`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        Ok(Self::with_client(transport.build_client()?, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// The caller is responsible for the JSON content-type default header;
    /// see [`crate::transport::json_headers`].
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The configured API root.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build `{base_url}{path}` by plain concatenation.
    ///
    /// `path` always starts with `/`; a trailing slash on the base is
    /// dropped so the seam carries exactly one.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a bodiless GET and parse the JSON response.
    pub(crate) async fn get(&self, path: &str) -> Result<Value, Error> {
        let url = self.endpoint_url(path)?;
        debug!(method = "GET", %url, "controller request");

        let resp = self.http.get(url).send().await?;
        Self::read_json(resp).await
    }

    /// Send a POST with a JSON body and parse the JSON response.
    pub(crate) async fn post(&self, path: &str, body: &impl Serialize) -> Result<Value, Error> {
        let url = self.endpoint_url(path)?;
        debug!(method = "POST", %url, "controller request");

        let resp = self.http.post(url).json(body).send().await?;
        Self::read_json(resp).await
    }

    /// Fail on non-2xx, otherwise parse the body as JSON.
    async fn read_json(resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();

        if !status.is_success() {
            debug!(status = status.as_u16(), "controller returned error status");
            return Err(Error::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}
