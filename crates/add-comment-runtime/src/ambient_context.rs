//! Loads the invoking workflow's context (repository and event payload).

use std::path::Path;

use add_comment_issues::issue_target::AmbientContext;
use add_comment_issues::AddCommentError;
use serde::Deserialize;
use tracing::warn;

pub const GITHUB_REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const GITHUB_EVENT_PATH_ENV: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<NumberedPayload>,
    #[serde(default)]
    issue: Option<NumberedPayload>,
}

#[derive(Debug, Deserialize)]
struct NumberedPayload {
    #[serde(default)]
    number: Option<u64>,
}

/// Reads `GITHUB_REPOSITORY` and the event payload named by `GITHUB_EVENT_PATH`.
pub async fn ambient_context_from_env() -> Result<AmbientContext, AddCommentError> {
    let repository = std::env::var(GITHUB_REPOSITORY_ENV).ok();
    let event_path = std::env::var_os(GITHUB_EVENT_PATH_ENV);
    load_ambient_context(repository, event_path.as_deref().map(Path::new)).await
}

pub async fn load_ambient_context(
    repository: Option<String>,
    event_path: Option<&Path>,
) -> Result<AmbientContext, AddCommentError> {
    let payload = match event_path {
        Some(path) if path.exists() => {
            let raw = tokio::fs::read_to_string(path).await.map_err(|error| {
                AddCommentError::config(format!(
                    "failed to read event payload {}: {error}",
                    path.display()
                ))
            })?;
            parse_event_payload(&raw).map_err(|error| {
                AddCommentError::config(format!(
                    "failed to parse event payload {}: {error}",
                    path.display()
                ))
            })?
        }
        Some(path) => {
            warn!(path = %path.display(), "event payload file does not exist");
            EventPayload::default()
        }
        None => EventPayload::default(),
    };

    Ok(AmbientContext {
        repository: repository.filter(|value| !value.trim().is_empty()),
        pull_request_number: payload.pull_request.and_then(|pr| pr.number),
        issue_number: payload.issue.and_then(|issue| issue.number),
    })
}

fn parse_event_payload(raw: &str) -> serde_json::Result<EventPayload> {
    serde_json::from_str(raw)
}
