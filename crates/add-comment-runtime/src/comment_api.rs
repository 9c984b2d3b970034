use add_comment_issues::issue_comment::GithubIssueComment;
use add_comment_issues::issue_target::{IssueRef, RepoRef};
use add_comment_issues::AddCommentError;
use async_trait::async_trait;

#[async_trait]
/// Remote issue-comment operations the upsert workflow depends on.
pub trait CommentApi: Send + Sync {
    /// Fetches one 1-based page of comments in the order GitHub returns them.
    async fn list_issue_comments_page(
        &self,
        issue: &IssueRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubIssueComment>, AddCommentError>;

    async fn create_issue_comment(
        &self,
        issue: &IssueRef,
        body: &str,
    ) -> Result<GithubIssueComment, AddCommentError>;

    async fn update_issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<GithubIssueComment, AddCommentError>;
}
