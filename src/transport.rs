//! The HTTP seam between the client and the network.

use crate::client_error::ClientError;
use crate::config::Config;
use std::time::Duration;

/// Idle connections kept open per host.
const MAX_IDLE_CONNECTIONS: usize = 2;

/// How long an idle pooled connection is kept, in seconds.
const IDLE_CONNECTION_TIMEOUT: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A request ready to be sent. `body` is already serialized JSON.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Vec<u8>>,
}

/// Status code and raw body of a completed request.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Anything that can carry one request to HubSpot and bring back the raw response.
///
/// Implementations only fail when no response was obtained; non-2xx statuses are returned as
/// regular responses.
pub trait HttpSender: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError>;
}

impl HttpSender for reqwest::blocking::Client {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .request(method, request.url.as_str())
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}

/// Build the default sender: a pooled blocking client that gives up on connecting after
/// `connect_timeout` and on the whole request after `timeout`.
pub fn default_sender(config: &Config) -> Result<reqwest::blocking::Client, ClientError> {
    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .timeout(Duration::from_secs(config.timeout))
        .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS)
        .pool_idle_timeout(Duration::from_secs(IDLE_CONNECTION_TIMEOUT))
        .build()?;

    Ok(client)
}
