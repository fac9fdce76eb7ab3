use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::adapter::AdapterError;

/// Appends path segments to a base URL, percent-encoding each segment.
///
/// A trailing empty segment on the base (`https://host/api/v2/`) is dropped first
/// so the result never contains `//`.
///
/// # Arguments
/// - `base` - Base URL of the remote API
/// - `segments` - Raw, unencoded path segments to append
///
/// # Returns
/// - `Ok(Url)` - Endpoint URL
/// - `Err(AdapterError::InvalidArgument)` - Base URL cannot carry a path
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, AdapterError> {
    let mut url = base.clone();

    url.path_segments_mut()
        .map_err(|_| AdapterError::InvalidArgument(format!("'{}' cannot be a base URL", base)))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Sends a prepared GET request and decodes a 2xx JSON body.
///
/// # Arguments
/// - `request` - Request with URL and headers already set
/// - `url` - The request URL, used for error context
///
/// # Returns
/// - `Ok(T)` - 2xx response decoded as `T`
/// - `Err(AdapterError::Transport)` - Connection, timeout or body read failure
/// - `Err(AdapterError::Remote)` - Non-2xx status
/// - `Err(AdapterError::MalformedResponse)` - Body is not the expected JSON shape
pub async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &Url,
) -> Result<T, AdapterError> {
    let response = request
        .send()
        .await
        .map_err(|e| transport_error(url, &e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AdapterError::Remote {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| transport_error(url, &e))?;

    serde_json::from_slice(&body).map_err(|e| AdapterError::MalformedResponse {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

fn transport_error(url: &Url, err: &reqwest::Error) -> AdapterError {
    let message = if err.is_timeout() {
        format!("timed out: {}", err)
    } else {
        err.to_string()
    };

    AdapterError::Transport {
        url: url.to_string(),
        message,
    }
}
