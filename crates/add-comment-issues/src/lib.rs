//! Shared helpers for the add-comment action.
//! This crate provides the issue/comment data model, marker-aware body
//! rendering, size truncation, and input resolution consumed by the runtime.

pub mod comment_truncation;
pub mod error;
pub mod issue_comment;
pub mod issue_target;

pub use error::AddCommentError;
