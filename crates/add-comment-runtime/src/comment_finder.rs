//! Marker lookup over the paginated issue comment listing.

use add_comment_issues::issue_comment::{render_comment_marker, GithubIssueComment};
use add_comment_issues::issue_target::IssueRef;
use add_comment_issues::AddCommentError;
use tracing::debug;

use crate::comment_api::CommentApi;

pub const COMMENTS_PER_PAGE: u32 = 100;

/// Lazy, forward-only cursor over the comment pages of one issue.
pub struct CommentPages<'a, A: CommentApi + ?Sized> {
    api: &'a A,
    issue: &'a IssueRef,
    next_page: Option<u32>,
}

impl<'a, A: CommentApi + ?Sized> CommentPages<'a, A> {
    pub fn new(api: &'a A, issue: &'a IssueRef) -> Self {
        Self {
            api,
            issue,
            next_page: Some(1),
        }
    }

    /// Fetches the next page, or `None` once a short page has been seen.
    pub async fn next_page(
        &mut self,
    ) -> Result<Option<Vec<GithubIssueComment>>, AddCommentError> {
        let Some(page) = self.next_page else {
            return Ok(None);
        };
        debug!(issue = self.issue.number, page, "fetching issue comment page");
        let chunk = self
            .api
            .list_issue_comments_page(self.issue, page, COMMENTS_PER_PAGE)
            .await?;
        self.next_page = if chunk.len() < COMMENTS_PER_PAGE as usize {
            None
        } else {
            Some(page.saturating_add(1))
        };
        Ok(Some(chunk))
    }
}

/// Returns the first comment, in listing order, whose body carries the marker
/// for `message_id`. An empty `message_id` performs no lookup.
pub async fn find_existing_comment<A: CommentApi + ?Sized>(
    api: &A,
    issue: &IssueRef,
    message_id: &str,
) -> Result<Option<GithubIssueComment>, AddCommentError> {
    if message_id.is_empty() {
        return Ok(None);
    }

    let marker = render_comment_marker(message_id);
    let mut pages = CommentPages::new(api, issue);
    while let Some(chunk) = pages.next_page().await? {
        if let Some(found) = chunk
            .into_iter()
            .find(|comment| comment.body_contains(&marker))
        {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
