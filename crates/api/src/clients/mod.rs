//! Resource clients for the cloud API.
//!
//! One stateless client per remote entity family, all funneling through a
//! shared [`ApiTransport`](crate::transport::ApiTransport). Clients hold
//! nothing besides a clone of the transport, so they can be constructed
//! freely and used concurrently.

pub mod account;
pub mod backtest;
pub mod compile;
pub mod file;
pub mod live;
pub mod node;
pub mod project;

pub use account::AccountClient;
pub use backtest::BacktestClient;
pub use compile::CompileClient;
pub use file::FileClient;
pub use live::LiveClient;
pub use node::NodeClient;
pub use project::{ProjectClient, ProjectUpdate};

use crate::error::ApiError;
use std::time::Duration;

/// Interval between status polls of an asynchronous remote job.
///
/// The polling loops are deliberately unbounded: the client layer imposes
/// no timeout so long-running jobs never hit a false-negative deadline.
/// Callers wanting one wrap `wait_for_completion` in
/// `tokio::time::timeout`.
pub const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Replaces the transport's generic not-found classification with the
/// entity family and id the calling client was operating on. Other error
/// kinds pass through unchanged.
pub(crate) fn retag_not_found(
    err: ApiError,
    kind: &'static str,
    id: impl Into<String>,
) -> ApiError {
    match err {
        ApiError::NotFound { .. } => ApiError::not_found(kind, id),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_interval_is_one_second() {
        assert_eq!(POLL_INTERVAL, Duration::from_secs(1));
    }

    #[test]
    fn test_retag_not_found_rewrites_entity_context() {
        let err = retag_not_found(
            ApiError::not_found("resource", "Project not found"),
            "project",
            "42",
        );
        match err {
            ApiError::NotFound { kind, id } => {
                assert_eq!(kind, "project");
                assert_eq!(id, "42");
            }
            other => panic!("expected not-found, got {other}"),
        }
    }

    #[test]
    fn test_retag_not_found_passes_other_kinds_through() {
        let err = retag_not_found(
            ApiError::Validation("duplicate name".to_string()),
            "project",
            "42",
        );
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
