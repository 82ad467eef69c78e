use http::StatusCode;
use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("parser error: {0}")]
    DeserializeError(#[from] serde_json::Error),
    #[error("unexpected status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("upstream response code {0}")]
    Upstream(ResponseCode),
    #[error("empty result set")]
    EmptyResult,
}

/// OpenTDB `response_code`. Zero is success, everything else means the result
/// must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCode(pub i64);

impl ResponseCode {
    pub const SUCCESS: ResponseCode = ResponseCode(0);

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    pub fn meaning(self) -> &'static str {
        match self.0 {
            0 => "success",
            1 => "no results",
            2 => "invalid parameter",
            3 => "token not found",
            4 => "token empty",
            5 => "rate limit",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.meaning())
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiError, ResponseCode};
    use pretty_assertions::assert_eq;

    #[test]
    fn upstream_display_includes_meaning() {
        let err = ApiError::Upstream(ResponseCode(1));
        assert_eq!(err.to_string(), "upstream response code 1 (no results)");
    }

    #[test]
    fn unknown_upstream_code() {
        let code = ResponseCode(42);
        assert!(!code.is_success());
        assert_eq!(code.meaning(), "unknown");
    }
}
