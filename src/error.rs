use thiserror::Error;

/// Failure reported by a remote collaborator.
///
/// Every asynchronous operation in this crate fails with this one type. The
/// core only ever branches on success vs. failure, so the error carries a
/// reason for humans and nothing for code to inspect.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ApiError {
  reason: String,
}

impl ApiError {
  pub fn new(reason: impl Into<String>) -> Self { Self { reason: reason.into() } }

  pub fn reason(&self) -> &str { &self.reason }
}
