use reqwest::blocking::{Client, Response};
use std::time::Duration;
use streetcache_core::gateways::{Error, Result};

pub fn new_client(timeout: Duration) -> anyhow::Result<Client> {
    let client = Client::builder().timeout(timeout).build()?;
    Ok(client)
}

// The request URL might contain an API key.
pub fn from_reqwest_err(err: reqwest::Error) -> Error {
    let err = err.without_url();
    if err.is_decode() {
        Error::Decode(err.to_string())
    } else {
        Error::Transport(err.to_string())
    }
}

#[derive(Debug, serde::Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    message: String,
}

pub fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = match response.json::<JsonError>() {
        Ok(json_error) => format!("{status}: {json_error}"),
        Err(_) => status.to_string(),
    };
    Err(Error::Status(message))
}
