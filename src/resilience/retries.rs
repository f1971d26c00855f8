//! Failure classification and retry eligibility.
//!
//! | Source outcome            | FetchError | Retried |
//! |---------------------------|------------|---------|
//! | no response               | Network    | yes     |
//! | status >= 500             | Server     | yes     |
//! | status in [400, 500)      | Client     | no      |
//! | other status, bad payload | Unknown    | no      |

use crate::fetch::FetchError;
use crate::source::SourceError;

/// Map a transport outcome onto the caller-facing taxonomy.
pub fn classify(error: SourceError) -> FetchError {
    match error {
        SourceError::NoResponse(detail) => FetchError::Network {
            detail: Some(detail),
        },
        SourceError::Status(status) if status >= 500 => FetchError::Server {
            status,
            detail: None,
        },
        SourceError::Status(status) if status >= 400 => FetchError::Client {
            status,
            detail: None,
        },
        err @ SourceError::Status(_) => FetchError::Unknown {
            detail: Some(err.to_string()),
        },
        SourceError::Invalid(detail) => FetchError::Unknown {
            detail: Some(detail),
        },
    }
}

/// Only transient failures are worth another attempt.
pub fn is_retryable(error: &FetchError) -> bool {
    error.is_transient()
}
