//! GitHub runtime for the add-comment action.
//!
//! Wires the shared helpers from `add-comment-issues` to the GitHub REST API:
//! marker lookup over paginated issue comments, create/update writes, and the
//! end-to-end upsert run with its workflow outputs.

pub mod action_outputs;
mod add_comment_runtime;
pub mod ambient_context;
pub mod comment_api;
pub mod comment_finder;
pub mod comment_writer;
#[cfg(test)]
mod fake_comment_api;
pub mod github_api_client;

pub use add_comment_runtime::{execute_add_comment, upsert_comment};
pub use comment_api::CommentApi;
pub use github_api_client::{GithubApiClient, DEFAULT_GITHUB_API_BASE};
