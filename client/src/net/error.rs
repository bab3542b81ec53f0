//! Request failure kinds surfaced to the views.

/// Fallback message when a rejected write carries no `detail`.
pub const UPDATE_USER_FAILED: &str = "Failed to update user";

/// Why a REST call failed. `Display` is the text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    Status(u16),
    /// The response body was not a shape we understand.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// A write was rejected; carries the backend's `detail` message.
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Build the error for a rejected write from its optional `detail`.
    pub fn rejected(detail: Option<String>) -> Self {
        Self::Rejected(detail.unwrap_or_else(|| UPDATE_USER_FAILED.to_owned()))
    }
}
