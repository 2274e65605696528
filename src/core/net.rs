// src/core/net.rs

// One JSON POST per submission. No retries and no timeout: the call runs
// until the server answers or the connection fails.

use reqwest::{
    blocking::{Client, ClientBuilder},
    header::CONTENT_TYPE,
};

use crate::config::options::AppOptions;
use super::{RequestError, RequestPayload, ResultPayload};

/// Sends a payload to the parser and returns its decoded answer.
pub trait Transport: Send + Sync {
    fn post_keywords(&self, payload: &RequestPayload) -> Result<ResultPayload, RequestError>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(options: &AppOptions) -> Result<Self, RequestError> {
        let client = ClientBuilder::new()
            .user_agent(options.user_agent.as_str())
            .timeout(None)
            .build()?;
        Ok(Self::with_client(client, &options.endpoint))
    }

    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self { client, endpoint: s!(endpoint) }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Transport for HttpTransport {
    fn post_keywords(&self, payload: &RequestPayload) -> Result<ResultPayload, RequestError> {
        logd!("Net: POST {} keywords={}", self.endpoint, payload.keywords.len());

        let resp = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let body = resp.bytes()?;
        logd!("Net: {} answered {} ({} bytes)", self.endpoint, status, body.len());
        Ok(ResultPayload::from_slice(&body)?)
    }
}
