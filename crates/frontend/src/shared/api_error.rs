use thiserror::Error;

/// Failure modes of a front-end API call.
///
/// The `Display` strings are exactly what the forms render in their error
/// line, so every call site can show `err.to_string()` without reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("Error: {status} - {detail}")]
    Server { status: u16, detail: String },

    /// The request went out but no response came back.
    #[error("Error: No response from server")]
    Network,

    /// A 2xx reply whose body did not match the expected schema.
    #[error("Error: Malformed response from server: {0}")]
    MalformedResponse(String),

    /// The request could not be built or serialized.
    #[error("Error: {0}")]
    Request(String),
}
