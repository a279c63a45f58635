//! Failure taxonomy for fetches against the upstream API.

use reqwest::StatusCode;

/// Why a single fetch did not produce the expected records.
#[derive(Debug)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    RequestFailed { status: StatusCode },
    /// Transport failure (DNS, connection refused, reset, timeout).
    Network(String),
    /// The body did not parse as the expected record shape.
    MalformedResponse(String),
}

impl FetchError {
    /// HTTP status carried by a `RequestFailed` error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            FetchError::RequestFailed { status } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::RequestFailed { status } => {
                write!(f, "HTTP error! status: {}", status.as_u16())
            }
            FetchError::Network(msg) => write!(f, "Network error: {}", msg),
            FetchError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Classifies a transport-level reqwest error.
pub(crate) fn classify_transport(error: reqwest::Error) -> FetchError {
    if let Some(status) = error.status() {
        return FetchError::RequestFailed { status };
    }
    if error.is_decode() {
        return FetchError::MalformedResponse(error.to_string());
    }
    FetchError::Network(error.to_string())
}

/// Human-readable reason for a failed fetch, suitable for a status line.
///
/// A `FetchError` anywhere in the chain wins over the outer context so that
/// "HTTP error! status: 403" reaches the user instead of a generic wrapper.
pub fn failure_reason(error: &anyhow::Error) -> String {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<FetchError>())
        .map(|fetch| fetch.to_string())
        .unwrap_or_else(|| error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_request_failed_display_carries_status() {
        let err = FetchError::RequestFailed {
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 403");
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn test_network_and_malformed_display() {
        let err = FetchError::Network("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
        assert_eq!(err.status(), None);

        let err = FetchError::MalformedResponse("expected a sequence".to_string());
        assert!(err.to_string().contains("Malformed response"));
    }

    #[test]
    fn test_failure_reason_finds_fetch_error_under_context() {
        let err: anyhow::Result<()> = Err(FetchError::RequestFailed {
            status: StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into());
        let err = err.context("Failed to load commits").unwrap_err();
        assert_eq!(failure_reason(&err), "HTTP error! status: 500");
    }

    #[test]
    fn test_failure_reason_falls_back_to_message() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(failure_reason(&err), "something else");
    }
}
