use reqwest::{Client, Url};
use serde_json::Value;

use crate::configuration::ApiSettings;
use crate::domain::FetchedValue;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("invalid API url: {0}")]
    Config(String),

    #[error("request to the API failed")]
    Transport(#[from] reqwest::Error),

    #[error("API response body is not valid JSON")]
    Parse(#[from] serde_json::Error),

    #[error("API response has an unexpected shape: {0}")]
    Shape(String),
}

/// Fetch the remote value: validate the configured URL, issue one GET and
/// validate the response shape. No retry, no timeout.
#[tracing::instrument(name = "fetching remote value", skip(client))]
pub async fn fetch_value(client: &Client, api: &ApiSettings) -> Result<FetchedValue, FetchError> {
    let url = secure_url(&api.url)?;
    request_value(client, url).await
}

/// Parse the configured source into a URL and insist on https. Runs before any
/// network I/O so a misconfigured scheme never leaves the process.
pub fn secure_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::Config(format!("{}: {}", raw, e)))?;
    if url.scheme() != "https" {
        return Err(FetchError::Config(format!(
            "refusing insecure scheme '{}'",
            url.scheme()
        )));
    }
    Ok(url)
}

/// Issue the GET and turn the body into a validated `FetchedValue`. Split from
/// `fetch_value` so tests can drive it against a local HTTP double.
pub async fn request_value(client: &Client, url: Url) -> Result<FetchedValue, FetchError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let payload: Value = serde_json::from_str(&body)?;
    extract_value(payload)
}

/// The full response contract: either a bare JSON string, or an object whose
/// `value` field is a string. Anything else is a shape error.
pub fn extract_value(payload: Value) -> Result<FetchedValue, FetchError> {
    let raw = match payload {
        Value::String(s) => s,
        Value::Object(mut fields) => match fields.remove("value") {
            Some(Value::String(s)) => s,
            _ => {
                return Err(FetchError::Shape(
                    "object response is missing a string 'value' field".to_string(),
                ))
            }
        },
        other => {
            return Err(FetchError::Shape(format!(
                "expected a string or an object, got {}",
                shape_name(&other)
            )))
        }
    };

    FetchedValue::parse(raw).map_err(FetchError::Shape)
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
