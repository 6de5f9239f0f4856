use thiserror::Error;

/// Failures of the remote sections API.
///
/// The mapped variants carry a fixed message and drop the underlying cause.
/// `Transport` is only produced by todo updates, which pass the raw error on.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch todos")]
    Fetch,
    #[error("Failed to create a new section")]
    Create,
    #[error("Failed to delete the section")]
    Delete,
    #[error("Failed to add the todo to the section")]
    AddTodo,
    /// The change was accepted but the follow-up list fetch failed.
    #[error("Changes saved, but failed to refresh the sections")]
    Refetch,
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
