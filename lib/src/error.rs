//! The errors thrown by the commands

use reqwest::StatusCode;

/// All the possible errors returned by the client and the API
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Server side error, returning the status code and the body of the response
    #[error("{operation} failed, got {status}: {message}")]
    Protocol {
        operation: &'static str,
        status: StatusCode,
        message: String,
    },
    /// The server answered with a success code the operation doesn't know about
    #[error("{operation} returned an unexpected status {status}")]
    UnexpectedStatus {
        operation: &'static str,
        status: StatusCode,
    },
    /// Error from the underlying http client
    #[error("http client error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Unable to parse a JSON response
    #[error("unable to parse response: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// The content of a file is not valid UTF-8
    #[error("unable to decode file content: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    /// The path is rejected before sending any request
    #[error("invalid path {0:?}")]
    InvalidPath(String),
}

impl Error {
    pub fn is_unexpected_status(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. })
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Protocol { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Reqwest(inner) => inner.status(),
            _ => None,
        }
    }
}
