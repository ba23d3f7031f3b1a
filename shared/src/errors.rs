//! Error types shared by the campus services

use thiserror::Error;

/// Rejection produced by the pure validation helpers
///
/// Services map every variant to a 400 response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Rating must be between {min} and {max}, got {actual}")]
    RatingOutOfRange { min: i32, max: i32, actual: i32 },

    #[error("Comment text cannot be empty")]
    EmptyComment,

    #[error("Comment text cannot exceed {max} characters")]
    CommentTooLong { max: usize },

    #[error("Invalid {what} id: {value}")]
    InvalidId { what: &'static str, value: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

/// Failure talking to a peer service
#[derive(Error, Debug)]
pub enum PeerError {
    #[error("{service} request failed: {message}")]
    Transport {
        service: &'static str,
        message: String,
    },

    #[error("{service} returned non-OK status code: {status}")]
    Status { service: &'static str, status: u16 },

    #[error("{service} returned an unreadable body: {message}")]
    Decode {
        service: &'static str,
        message: String,
    },
}
