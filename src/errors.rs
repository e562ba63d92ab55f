//! Defines the error types returned by the feed writer.
//!
//! Every write either succeeds or returns one of these synchronously.
//! A failed write may leave a partially written element behind; the
//! caller is expected to discard the output in that case.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// A required field was missing or empty, or a relationship tag is not
    /// one RSS 2.0 knows about.
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    /// The underlying XML writer rejected an event, or a name is not a
    /// valid XML name.
    #[error("Format Error: {0}")]
    Format(String),
}

impl FeedError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        FeedError::InvalidArgument(msg.into())
    }
}
