//! Client error types.

/// Error for a textual field whose present value does not match the
/// encoding the endpoint documents for it.
///
/// Carries the logical field name and the raw value so callers can see
/// exactly what the server sent. A `FormatError` aborts decoding of the
/// whole response; no partially populated result is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse field {field}: {value:?}")]
pub struct FormatError {
    /// Logical name of the field that failed, e.g. "ScheduledArrival".
    pub field: &'static str,
    /// The raw string the server sent.
    pub value: String,
}

impl FormatError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Errors returned by [`RailClient`](crate::client::RailClient) methods.
#[derive(Debug, thiserror::Error)]
pub enum RailError {
    /// A required request parameter was missing; nothing was sent.
    #[error("invalid request: missing {missing:?}")]
    Validation { missing: Vec<&'static str> },

    /// HTTP transport failed (connect error, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("request to {url} returned {status}")]
    Api { status: u16, url: String },

    /// The response body was not valid JSON for the expected shape.
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Leading part of the offending body, for diagnostics.
        body: Option<String>,
    },

    /// A present textual field did not match its expected format.
    #[error(transparent)]
    Format(#[from] FormatError),
}
