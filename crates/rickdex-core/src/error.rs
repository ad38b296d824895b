//! API error type shared by every transport.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Transport failure from a non-reqwest transport (e.g. the browser's fetch).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API answers 404 when a query matches nothing.
    #[error("Nothing found at {url}")]
    NotFound { url: String },

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Http(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<serde_json::Value, ApiError> {
        Ok(serde_json::from_str(body)?)
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let err = decode("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!err.is_not_found());
    }
}
