use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use add_comment_issues::issue_comment::GithubIssueComment;
use add_comment_issues::issue_target::{IssueRef, RepoRef};
use add_comment_issues::AddCommentError;

use crate::comment_api::CommentApi;

pub const DEFAULT_GITHUB_API_BASE: &str = "https://api.github.com";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Clone)]
/// GitHub REST client for issue comments. Requests are sent once, without retry.
pub struct GithubApiClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubApiClient {
    pub fn new(api_base: &str, token: &str) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("add-comment-action"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let auth_header = format!("Bearer {}", token.trim());
        let mut auth_value = reqwest::header::HeaderValue::from_str(&auth_header)
            .context("invalid github authorization header")?;
        auth_value.set_sensitive(true);
        headers.insert(reqwest::header::AUTHORIZATION, auth_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http: client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn list_issue_comments_page(
        &self,
        issue: &IssueRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubIssueComment>> {
        let page_value = page.to_string();
        let per_page_value = per_page.to_string();
        self.request_json(
            "list issue comments",
            self.http
                .get(format!(
                    "{}/repos/{}/{}/issues/{}/comments",
                    self.api_base, issue.repo.owner, issue.repo.name, issue.number
                ))
                .query(&[
                    ("per_page", per_page_value.as_str()),
                    ("page", page_value.as_str()),
                ]),
        )
        .await
    }

    pub async fn create_issue_comment(
        &self,
        issue: &IssueRef,
        body: &str,
    ) -> Result<GithubIssueComment> {
        let payload = json!({ "body": body });
        self.request_json(
            "create issue comment",
            self.http
                .post(format!(
                    "{}/repos/{}/{}/issues/{}/comments",
                    self.api_base, issue.repo.owner, issue.repo.name, issue.number
                ))
                .json(&payload),
        )
        .await
    }

    pub async fn update_issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<GithubIssueComment> {
        let payload = json!({ "body": body });
        self.request_json(
            "update issue comment",
            self.http
                .patch(format!(
                    "{}/repos/{}/{}/issues/comments/{}",
                    self.api_base, repo.owner, repo.name, comment_id
                ))
                .json(&payload),
        )
        .await
    }

    async fn request_json<T>(&self, operation: &str, request: reqwest::RequestBuilder) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = request
            .send()
            .await
            .with_context(|| format!("github api {operation} request failed"))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "github api {operation} failed with status {}: {}",
                status.as_u16(),
                truncate_for_error(&body, ERROR_BODY_MAX_CHARS)
            );
        }
        response
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode github {operation}"))
    }
}

#[async_trait]
impl CommentApi for GithubApiClient {
    async fn list_issue_comments_page(
        &self,
        issue: &IssueRef,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<GithubIssueComment>, AddCommentError> {
        Ok(GithubApiClient::list_issue_comments_page(self, issue, page, per_page).await?)
    }

    async fn create_issue_comment(
        &self,
        issue: &IssueRef,
        body: &str,
    ) -> Result<GithubIssueComment, AddCommentError> {
        Ok(GithubApiClient::create_issue_comment(self, issue, body).await?)
    }

    async fn update_issue_comment(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        body: &str,
    ) -> Result<GithubIssueComment, AddCommentError> {
        Ok(GithubApiClient::update_issue_comment(self, repo, comment_id, body).await?)
    }
}

fn truncate_for_error(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated = text.chars().take(max_chars).collect::<String>();
    truncated.push_str("...");
    truncated
}
