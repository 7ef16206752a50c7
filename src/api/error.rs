use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Gateway rejected the request: {0}")]
    Rejected(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl GatewayError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            format!(
                "{}... (truncated, {} total bytes)",
                &body[..MAX_ERROR_BODY_LENGTH],
                body.len()
            )
        }
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            500..=599 => GatewayError::ServerError(truncated),
            _ => GatewayError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }

    /// Whether a failed write may still have reached the gateway. Apps Script
    /// endpoints routinely drop the connection after committing the row, so
    /// timeouts and transport errors on POST are treated as likely delivered.
    /// Only an explicit rejection or a bad response proves otherwise.
    pub fn is_likely_delivered(&self) -> bool {
        matches!(self, GatewayError::Timeout | GatewayError::Network(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout
        } else {
            GatewayError::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status() {
        let err = GatewayError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert!(matches!(err, GatewayError::ServerError(_)));

        let err = GatewayError::from_status(reqwest::StatusCode::NOT_FOUND, "missing");
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[test]
    fn test_truncate_body() {
        let long = "x".repeat(600);
        let err = GatewayError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, &long);
        let msg = err.to_string();
        assert!(msg.len() < 600);
        assert!(msg.contains("truncated"));
    }

    #[test]
    fn test_likely_delivered_classification() {
        assert!(GatewayError::Timeout.is_likely_delivered());
        assert!(!GatewayError::Rejected("bad data".to_string()).is_likely_delivered());
        assert!(!GatewayError::ServerError("500".to_string()).is_likely_delivered());
        assert!(!GatewayError::InvalidResponse("garbage".to_string()).is_likely_delivered());
    }
}
