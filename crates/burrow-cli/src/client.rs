use crate::error::{ClientError, Result};
use crate::model::{ShortenRequest, ShortenResponse};
use std::time::Duration;
use tracing::debug;
use ureq::http::header::LOCATION;
use ureq::http::StatusCode;
use ureq::Agent;

/// Global timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const SHORTEN_PATH: &str = "/api/v1/shorten";

/// Talks to a gateway over HTTP.
///
/// Redirects are never followed so that `lookup` can read the `Location`
/// header of the gateway's own 301.
#[derive(Clone)]
pub struct Client {
    agent: Agent,
    addr: String,
}

impl Client {
    /// `addr` is the gateway base URL, e.g. `http://localhost:8080`.
    pub fn new(addr: impl Into<String>) -> Self {
        Self::with_timeout(addr, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(addr: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .max_redirects(0)
            .max_redirects_will_error(false)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            addr: addr.into().trim_end_matches('/').to_owned(),
        }
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Asks the gateway for a new short code for `original_url`.
    pub fn shorten(&self, original_url: &str) -> Result<ShortenResponse> {
        let url = format!("{}{}", self.addr, SHORTEN_PATH);
        debug!(%url, original_url, "sending shorten request");

        let mut response = self
            .agent
            .post(&url)
            .send_json(&ShortenRequest { original_url })?;

        if response.status() != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(response.status()));
        }

        Ok(response.body_mut().read_json::<ShortenResponse>()?)
    }

    /// Returns the URL that `hash` redirects to.
    pub fn lookup(&self, hash: &str) -> Result<String> {
        let url = format!("{}/{}", self.addr, hash);
        debug!(%url, "sending lookup request");

        let response = self.agent.get(&url).call()?;

        match response.status() {
            StatusCode::MOVED_PERMANENTLY => response
                .headers()
                .get(LOCATION)
                .and_then(|location| location.to_str().ok())
                .map(str::to_owned)
                .ok_or(ClientError::MissingLocation),
            StatusCode::NOT_FOUND => Err(ClientError::NotFound(hash.to_owned())),
            other => Err(ClientError::UnexpectedStatus(other)),
        }
    }
}
