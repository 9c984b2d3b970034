//! Create/update writes. Both re-apply the size ceiling before sending.

use add_comment_issues::comment_truncation::truncate_comment_body;
use add_comment_issues::issue_comment::GithubIssueComment;
use add_comment_issues::issue_target::{IssueRef, RepoRef};
use add_comment_issues::AddCommentError;

use crate::comment_api::CommentApi;

pub async fn create_comment<A: CommentApi + ?Sized>(
    api: &A,
    issue: &IssueRef,
    body: &str,
) -> Result<GithubIssueComment, AddCommentError> {
    let body = truncate_comment_body(body);
    api.create_issue_comment(issue, &body).await
}

pub async fn update_comment<A: CommentApi + ?Sized>(
    api: &A,
    repo: &RepoRef,
    comment_id: u64,
    body: &str,
) -> Result<GithubIssueComment, AddCommentError> {
    let body = truncate_comment_body(body);
    api.update_issue_comment(repo, comment_id, &body).await
}
