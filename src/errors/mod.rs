use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single upstream fetch.
///
/// Never fatal for a crawl: the page or candidate that triggered it is skipped.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

impl FetchError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(code) => Some(*code),
            Self::Transport(e) => e.status(),
            Self::InvalidUrl { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.to_string(), "upstream returned status 404 Not Found");
    }

    #[test]
    fn test_invalid_url_has_no_status() {
        let err = FetchError::InvalidUrl {
            url: "::".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(err.status(), None);
    }
}
