//! Upsert orchestration for one add-comment run.

use add_comment_issues::issue_comment::{build_comment_body, UpsertOutcome, UpsertResult};
use add_comment_issues::issue_target::{
    resolve_action_inputs, ActionInputs, AmbientContext, IssueRef, ResolvedAction,
};
use add_comment_issues::AddCommentError;
use tracing::info;

use crate::comment_api::CommentApi;
use crate::comment_finder::find_existing_comment;
use crate::comment_writer::{create_comment, update_comment};
use crate::github_api_client::GithubApiClient;

pub const ACTION_NAME: &str = "add-comment";
pub const ACTION_VERSION: &str = env!("CARGO_PKG_VERSION");
const HEADER_RULE_WIDTH: usize = 90;

/// Creates the comment for `message_id`, or updates the first existing one.
pub async fn upsert_comment<A: CommentApi + ?Sized>(
    api: &A,
    target: &IssueRef,
    message: &str,
    message_id: &str,
) -> Result<UpsertResult, AddCommentError> {
    let body = build_comment_body(message, message_id);

    let existing = if message_id.is_empty() {
        None
    } else {
        info!("Searching for existing comment with message-id: {message_id}");
        find_existing_comment(api, target, message_id).await?
    };

    match existing {
        Some(existing) => {
            info!("Found existing comment (ID: {}), updating...", existing.id);
            let comment = update_comment(api, &target.repo, existing.id, &body).await?;
            info!("Comment updated successfully");
            Ok(UpsertResult {
                comment,
                outcome: UpsertOutcome::Updated,
            })
        }
        None => {
            info!("Creating new comment on issue/PR #{}...", target.number);
            let comment = create_comment(api, target, &body).await?;
            info!("Comment created successfully");
            Ok(UpsertResult {
                comment,
                outcome: UpsertOutcome::Created,
            })
        }
    }
}

/// Runs the whole action: resolve inputs, connect to GitHub, upsert.
pub async fn execute_add_comment(
    inputs: &ActionInputs,
    ambient: &AmbientContext,
    api_base: &str,
) -> Result<UpsertResult, AddCommentError> {
    let action = resolve_action_inputs(inputs, ambient)?;
    for line in render_run_header(&action).lines() {
        info!("{line}");
    }

    let client = GithubApiClient::new(api_base, &action.token)
        .map_err(|error| AddCommentError::config(format!("{error:#}")))?;
    let result = upsert_comment(
        &client,
        &action.target,
        &action.message,
        &action.message_id,
    )
    .await?;

    info!("Comment ID: {}", result.comment.id);
    info!("Comment URL: {}", result.comment.html_url);
    Ok(result)
}

fn render_run_header(action: &ResolvedAction) -> String {
    let rule = "-".repeat(HEADER_RULE_WIDTH);
    let mut lines = vec![
        rule.clone(),
        format!("Action       : {ACTION_NAME} v{ACTION_VERSION}"),
        format!("Repository   : {}", action.target.repo.as_slug()),
        format!("Issue/PR     : #{}", action.target.number),
    ];
    if !action.message_id.is_empty() {
        lines.push(format!("Message ID   : {}", action.message_id));
    }
    lines.push(rule);
    lines.join("\n")
}
