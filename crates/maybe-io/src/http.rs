// crates/maybe-io/src/http.rs
// GET/POST helpers (async and blocking) returning the body text as an Outcome

use maybe_core::Outcome;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::error::{IoOutcome, MaybeError, Result};

const GET: &str = "GET";
const POST: &str = "POST";

/// Create an async client with the configured timeouts.
///
/// Create once and reuse; the client pools connections internally.
pub fn create_client(config: &HttpConfig) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default HTTP client");
            reqwest::Client::new()
        })
}

/// Create a blocking client with the configured timeouts.
///
/// Must not be called from inside an async runtime.
pub fn create_blocking_client(config: &HttpConfig) -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.clone())
        .build()
        .unwrap_or_else(|e| {
            warn!(error = %e, "Falling back to default blocking HTTP client");
            reqwest::blocking::Client::new()
        })
}

/// GET `url` and return the body of a 2xx response
pub async fn get(client: &reqwest::Client, url: &str) -> IoOutcome<String> {
    let result = fetch(GET, url, client.get(url)).await;
    finish(GET, url, result)
}

/// POST `body` to `url` and return the body of a 2xx response
pub async fn post(
    client: &reqwest::Client,
    url: &str,
    body: &str,
    content_type: &str,
) -> IoOutcome<String> {
    let request = client
        .post(url)
        .header(CONTENT_TYPE, with_charset(content_type))
        .body(body.to_string());
    let result = fetch(POST, url, request).await;
    finish(POST, url, result)
}

/// Blocking version of [`get`]
pub fn get_blocking(client: &reqwest::blocking::Client, url: &str) -> IoOutcome<String> {
    let result = fetch_blocking(GET, url, client.get(url));
    finish(GET, url, result)
}

/// Blocking version of [`post`]
pub fn post_blocking(
    client: &reqwest::blocking::Client,
    url: &str,
    body: &str,
    content_type: &str,
) -> IoOutcome<String> {
    let request = client
        .post(url)
        .header(CONTENT_TYPE, with_charset(content_type))
        .body(body.to_string());
    let result = fetch_blocking(POST, url, request);
    finish(POST, url, result)
}

async fn fetch(method: &'static str, url: &str, request: reqwest::RequestBuilder) -> Result<String> {
    let response = request.send().await.map_err(|e| classify(method, url, e))?;
    read_body(method, url, response).await
}

fn fetch_blocking(
    method: &'static str,
    url: &str,
    request: reqwest::blocking::RequestBuilder,
) -> Result<String> {
    let response = request.send().map_err(|e| classify(method, url, e))?;
    read_body_blocking(method, url, response)
}

async fn read_body(method: &'static str, url: &str, response: reqwest::Response) -> Result<String> {
    check_status(method, response.status())?;
    response.text().await.map_err(|e| classify(method, url, e))
}

fn read_body_blocking(
    method: &'static str,
    url: &str,
    response: reqwest::blocking::Response,
) -> Result<String> {
    check_status(method, response.status())?;
    response.text().map_err(|e| classify(method, url, e))
}

fn check_status(method: &'static str, status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(MaybeError::Status {
            method,
            status: status.as_u16(),
        })
    }
}

/// Timeouts get their own variant; everything else stays a transport error
fn classify(method: &'static str, url: &str, err: reqwest::Error) -> MaybeError {
    if err.is_timeout() {
        MaybeError::Timeout {
            method,
            url: url.to_string(),
        }
    } else {
        MaybeError::Http(err)
    }
}

fn finish(method: &'static str, url: &str, result: Result<String>) -> IoOutcome<String> {
    match &result {
        Ok(body) => debug!(method, url, bytes = body.len(), "HTTP request succeeded"),
        Err(e) => warn!(method, url, error = %e, "HTTP request failed"),
    }
    Outcome::from(result)
}

/// Request bodies are always sent as UTF-8
fn with_charset(content_type: &str) -> String {
    if content_type.to_ascii_lowercase().contains("charset=") {
        content_type.to_string()
    } else {
        format!("{content_type}; charset=utf-8")
    }
}
