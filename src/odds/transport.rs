use super::wire::{ErrorBody, OddsRequest, OddsResponse};
use super::OddsError;
use std::time::Duration;

/// Default odds endpoint of a locally running engine.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/api/calc";

/// Something that can answer an odds request, blocking until it does.
pub trait Transport {
    fn post(&self, request: &OddsRequest) -> Result<OddsResponse, OddsError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn post(&self, request: &OddsRequest) -> Result<OddsResponse, OddsError> {
        (**self).post(request)
    }
}

/// JSON over HTTP to the remote engine.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl HttpTransport {
    /// `timeout` of `None` waits for the engine indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, OddsError> {
        // The blocking client defaults to 30s, so `None` must be passed explicitly.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OddsError::Transport(e.to_string()))?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn post(&self, request: &OddsRequest) -> Result<OddsResponse, OddsError> {
        log::debug!("POST {} n_players={} trials={}", self.endpoint, request.n_players, request.trials);
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| OddsError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| OddsError::Transport(e.to_string()))?;
        decode_reply(status, &body)
    }
}

/// Interpret a status code and body from the engine.
pub fn decode_reply(status: u16, body: &str) -> Result<OddsResponse, OddsError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| OddsError::Decode(e.to_string()));
    }
    let parsed: ErrorBody = serde_json::from_str(body).map_err(|e| OddsError::Decode(e.to_string()))?;
    Err(OddsError::Server {
        status,
        message: parsed.error.unwrap_or_else(|| "Server error".to_string()),
    })
}
