use thiserror::Error;

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

#[derive(Debug, Error)]
/// Failure taxonomy for one add-comment run.
pub enum AddCommentError {
    /// A required input is missing or malformed. Raised before any network call.
    #[error("{0}")]
    Config(String),
    /// The GitHub API call failed (status, network, or decode failure).
    #[error("{0}")]
    Transport(String),
    #[error("Unknown error occurred")]
    Unknown,
}

impl AddCommentError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Message surfaced through the run's failure channel.
    pub fn failure_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl From<anyhow::Error> for AddCommentError {
    fn from(error: anyhow::Error) -> Self {
        Self::Transport(format!("{error:#}"))
    }
}
