//! In-memory `CommentApi` used by runtime unit tests.

use std::sync::Mutex;

use add_comment_issues::issue_comment::GithubIssueComment;
use add_comment_issues::issue_target::{IssueRef, RepoRef};
use add_comment_issues::AddCommentError;
use async_trait::async_trait;

use crate::comment_api::CommentApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RecordedCall {
    List { page: u32, per_page: u32 },
    Create { issue_number: u64, body: String },
    Update { comment_id: u64, body: String },
}

#[derive(Default)]
pub(crate) struct FakeCommentApi {
    comments: Mutex<Vec<GithubIssueComment>>,
    calls: Mutex<Vec<RecordedCall>>,
    fail_with: Option<String>,
    next_id: Mutex<u64>,
}

impl FakeCommentApi {
    pub(crate) fn with_comments(comments: Vec<GithubIssueComment>) -> Self {
        let next_id = comments.iter().map(|comment| comment.id).max().unwrap_or(0) + 1;
        Self {
            comments: Mutex::new(comments),
            next_id: Mutex::new(next_id.max(1000)),
            ..Self::default()
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn comments(&self) -> Vec<GithubIssueComment> {
        self.comments.lock().expect("comments lock").clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), AddCommentError> {
        self.calls.lock().expect("calls lock").push(call);
        match &self.fail_with {
            Some(message) => Err(AddCommentError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

pub(crate) fn comment(id: u64, body: &str) -> GithubIssueComment {
    GithubIssueComment {
        id,
        body: Some(body.to_string()),
        html_url: format!("https://github.com/owner/repo/issues/42#issuecomment-{id}"),
    }
}

#[async_trait]
impl CommentApi for FakeCommentApi {
    async fn list_issue_comments_page(
        &self,
        _issue: &IssueRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubIssueComment>, AddCommentError> {
        self.record(RecordedCall::List { page, per_page })?;
        let start = (page.saturating_sub(1) as usize) * per_page as usize;
        Ok(self
            .comments
            .lock()
            .expect("comments lock")
            .iter()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    async fn create_issue_comment(
        &self,
        issue: &IssueRef,
        body: &str,
    ) -> Result<GithubIssueComment, AddCommentError> {
        self.record(RecordedCall::Create {
            issue_number: issue.number,
            body: body.to_string(),
        })?;
        let mut next_id = self.next_id.lock().expect("id lock");
        let created = comment(*next_id, body);
        *next_id += 1;
        self.comments
            .lock()
            .expect("comments lock")
            .push(created.clone());
        Ok(created)
    }

    async fn update_issue_comment(
        &self,
        _repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<GithubIssueComment, AddCommentError> {
        self.record(RecordedCall::Update {
            comment_id,
            body: body.to_string(),
        })?;
        let mut comments = self.comments.lock().expect("comments lock");
        let existing = comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .ok_or_else(|| AddCommentError::Transport(format!("comment {comment_id} not found")))?;
        existing.body = Some(body.to_string());
        Ok(existing.clone())
    }
}
