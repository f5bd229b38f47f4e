//! Error types for the fragments client.
//!
//! Every failure a client call can produce is folded into the single
//! [`Error`] type, so a host has one pattern to match regardless of whether
//! the server answered with an error status, the network dropped the
//! request, or the body could not be understood.

use std::fmt;
use thiserror::Error;

/// The unified error type for fragments operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The identity integration could not be reached or is misconfigured.
    #[error("authentication unavailable: {0}")]
    Auth(#[from] AuthError),

    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Http(#[from] HttpError),

    /// No response was received at all.
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// A 2xx response whose body did not have the expected shape.
    #[error("malformed response (HTTP {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    /// Input validation errors (bad URL, bad fragment id).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Closed classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    AuthUnavailable,
    /// Non-2xx response that is neither 401/403 nor 404.
    Http,
    /// HTTP 401 or 403.
    Unauthorized,
    /// HTTP 404.
    NotFound,
    Network,
    MalformedResponse,
    InvalidInput,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Auth(_) => ErrorKind::AuthUnavailable,
            Error::Http(e) if e.is_not_found() => ErrorKind::NotFound,
            Error::Http(e) if e.is_auth_error() => ErrorKind::Unauthorized,
            Error::Http(_) => ErrorKind::Http,
            Error::Network(_) => ErrorKind::Network,
            Error::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
        }
    }

    /// The HTTP status received, if any response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http(e) => Some(e.status),
            Error::MalformedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server reported the fragment as missing.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Build a malformed-response error.
    pub fn malformed(status: u16, reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            status,
            reason: reason.into(),
        }
    }
}

/// Failures of the identity integration itself.
///
/// "Nobody is signed in" is not one of these; it is an ordinary `None`.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The session store location could not be determined.
    #[error("session store not configured: {reason}")]
    NotConfigured { reason: String },

    /// The session store exists but could not be read.
    #[error("session store unreadable at {path}: {message}")]
    Unreadable { path: String, message: String },

    /// The session store holds data that is not a session.
    #[error("session store corrupt at {path}: {message}")]
    Corrupt { path: String, message: String },

    /// The session could not be written or removed.
    #[error("session store write failed at {path}: {message}")]
    WriteFailed { path: String, message: String },
}

/// Transport-level failures where no response arrived.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection could not be established (refused, DNS, TLS).
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// The transport gave up waiting.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// The request could not be sent or its body not received.
    #[error("transport failure: {message}")]
    Transport { message: String },
}

/// A non-2xx response from the fragments service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// HTTP status code.
    pub status: u16,
    /// Canonical reason phrase of the status line, if known.
    pub status_text: Option<String>,
    /// Error message from the server body, if it sent one.
    pub message: Option<String>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref text) = self.status_text {
            write!(f, " {}", text)?;
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

impl HttpError {
    /// Create a new HTTP error.
    pub fn new(status: u16, status_text: Option<String>, message: Option<String>) -> Self {
        Self {
            status,
            status_text,
            message,
        }
    }

    /// Check if the credential was rejected.
    pub fn is_auth_error(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Check if the target fragment does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid fragment id.
    #[error("invalid fragment id '{value}': {reason}")]
    FragmentId { value: String, reason: String },

    /// A header value could not be encoded.
    #[error("invalid header value for {name}")]
    Header { name: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
