use serde::{Deserialize, Serialize};

use crate::comment_truncation::truncate_comment_body;

pub const COMMENT_MARKER_PREFIX: &str = "<!-- add-comment:";
pub const COMMENT_MARKER_SUFFIX: &str = " -->";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
/// Issue comment as returned by the GitHub REST API.
pub struct GithubIssueComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: String,
}

impl GithubIssueComment {
    pub fn body_contains(&self, marker: &str) -> bool {
        self.body
            .as_deref()
            .is_some_and(|body| body.contains(marker))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates the write performed by an upsert.
pub enum UpsertOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one upsert: the authoritative remote comment plus the write kind.
pub struct UpsertResult {
    pub comment: GithubIssueComment,
    pub outcome: UpsertOutcome,
}

impl UpsertResult {
    pub fn created(&self) -> bool {
        self.outcome == UpsertOutcome::Created
    }

    pub fn updated(&self) -> bool {
        self.outcome == UpsertOutcome::Updated
    }

    /// Action outputs in their wire order.
    pub fn output_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("comment-id", self.comment.id.to_string()),
            ("comment-created", self.created().to_string()),
            ("comment-updated", self.updated().to_string()),
        ]
    }
}

/// Renders the hidden HTML marker that identifies comments for `message_id`.
pub fn render_comment_marker(message_id: &str) -> String {
    format!("{COMMENT_MARKER_PREFIX}{message_id}{COMMENT_MARKER_SUFFIX}")
}

pub fn compose_comment_body(message: &str, message_id: &str) -> String {
    if message_id.is_empty() {
        return message.to_string();
    }
    format!("{}\n\n{message}", render_comment_marker(message_id))
}

/// Composes the comment body and enforces the GitHub size ceiling.
pub fn build_comment_body(message: &str, message_id: &str) -> String {
    truncate_comment_body(&compose_comment_body(message, message_id))
}
