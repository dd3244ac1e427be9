//! One-shot client for the remote scoring service.
//!
//! Sends a base64-encoded JPEG as `{"image": "<...>"}` with
//! `Content-Type: application/json` and parses the label list embedded in
//! the response body. The service contract is consumed here, not owned.

mod parse;

pub use parse::parse_labels;

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::error::PrepError;
use crate::fetch::HttpOptions;

/// Scores one image and returns the predicted labels.
pub fn score_image(
    endpoint: &str,
    image_path: &Path,
    opts: &HttpOptions,
) -> Result<Vec<String>, PrepError> {
    let body = payload_for(image_path)?;
    tracing::info!(endpoint, image = %image_path.display(), "requesting prediction");
    let response = post_json(endpoint, &body, opts)?;
    tracing::debug!(bytes = response.len(), "prediction response received");
    Ok(parse_labels(&response))
}

/// Builds the JSON request body for `image_path`.
fn payload_for(image_path: &Path) -> Result<String, PrepError> {
    let bytes = fs::read(image_path).map_err(|e| PrepError::fs(image_path, e))?;
    Ok(serde_json::json!({ "image": BASE64.encode(bytes) }).to_string())
}

fn post_json(url: &str, body: &str, opts: &HttpOptions) -> Result<String, PrepError> {
    let transport = |e: curl::Error| PrepError::Transport {
        url: url.to_string(),
        source: e,
    };

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(transport)?;
    easy.post(true).map_err(transport)?;
    easy.post_fields_copy(body.as_bytes()).map_err(transport)?;
    easy.connect_timeout(opts.connect_timeout).map_err(transport)?;
    if let Some(timeout) = opts.transfer_timeout {
        easy.timeout(timeout).map_err(transport)?;
    }

    let mut headers = curl::easy::List::new();
    headers
        .append("Content-Type: application/json")
        .map_err(transport)?;
    easy.http_headers(headers).map_err(transport)?;

    let response: RefCell<Vec<u8>> = RefCell::new(Vec::new());
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                response.borrow_mut().extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transport)?;
        transfer.perform().map_err(transport)?;
    }

    let code = easy.response_code().map_err(transport)?;
    if !(200..300).contains(&code) {
        return Err(PrepError::HttpStatus {
            url: url.to_string(),
            code,
        });
    }

    Ok(String::from_utf8_lossy(&response.into_inner()).into_owned())
}
