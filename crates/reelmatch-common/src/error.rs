//! Error types produced while resolving a filename against a provider.
//!
//! The variants map onto how a failure propagates: [`Error::NoFilename`] is
//! reported verbatim to the caller, [`Error::NoMatch`] is absorbed per search
//! direction, and [`Error::UnexpectedStatus`] / [`Error::Provider`] abort the
//! whole resolution.

/// Common error type for reelmatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No usable filename or search term, or both search directions came up
    /// empty.
    #[error("No filename for query")]
    NoFilename,

    /// The provider had nothing for this term and it cannot be reduced further.
    #[error("No match available")]
    NoMatch,

    /// The provider answered with a status that is neither success nor a
    /// rate-limit signal.
    #[error("Unexpected HTTP status code: {0}")]
    UnexpectedStatus(u16),

    /// The provider could not be reached or returned an unreadable body.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create a new Provider error.
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        Self::Provider(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether a single search direction may swallow this error and report
    /// "no decision" instead.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NoFilename | Self::NoMatch)
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
