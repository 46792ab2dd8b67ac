//! Catalog fetch errors.

use serde::Deserialize;

/// Anything that can go wrong between sending the listing request and holding descriptors.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed models response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Map a non-success response into `CatalogError::Api`.
/// Prefers the `error.message` of Google's error envelope; falls back to the raw body,
/// then to the status reason when the body is empty.
pub fn api_error(status: reqwest::StatusCode, body: &str) -> CatalogError {
    let message = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string(),
    };
    CatalogError::Api {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn api_error_uses_envelope_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let err = api_error(StatusCode::BAD_REQUEST, body);
        match &err {
            CatalogError::Api { status, message } => {
                assert_eq!(*status, 400);
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            _ => panic!("expected Api, got {:?}", err),
        }
        assert_eq!(
            err.to_string(),
            "API error (400): API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn api_error_falls_back_to_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, "upstream unavailable\n");
        assert_eq!(err.to_string(), "API error (502): upstream unavailable");
    }

    #[test]
    fn api_error_empty_body_uses_reason() {
        let err = api_error(StatusCode::FORBIDDEN, "");
        assert_eq!(err.to_string(), "API error (403): Forbidden");
    }
}
