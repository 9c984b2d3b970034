//! Target issue resolution from explicit action inputs and ambient workflow context.

use std::fmt;

use crate::error::AddCommentError;

const MISSING_ISSUE_NUMBER_MESSAGE: &str = "Could not determine issue/PR number. Please provide issue-number or pr-number input, or run this action in a pull_request or issue context.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn parse(raw: &str) -> Result<Self, AddCommentError> {
        let invalid = || {
            AddCommentError::config(format!(
                "Invalid repository format: {raw}. Expected owner/repo"
            ))
        };
        let (owner, name) = raw.trim().split_once('/').ok_or_else(invalid)?;
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn as_slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Issue or pull request thread that receives the comment.
pub struct IssueRef {
    pub repo: RepoRef,
    pub number: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Raw action inputs. Blank values count as absent.
pub struct ActionInputs {
    pub message: Option<String>,
    pub repository: Option<String>,
    pub token: Option<String>,
    pub message_id: Option<String>,
    pub issue_number: Option<String>,
    pub pr_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Workflow context of the invoking event, passed in explicitly.
pub struct AmbientContext {
    pub repository: Option<String>,
    pub pull_request_number: Option<u64>,
    pub issue_number: Option<u64>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ResolvedAction {
    pub target: IssueRef,
    pub message: String,
    pub message_id: String,
    pub token: String,
}

impl fmt::Debug for ResolvedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedAction")
            .field("target", &self.target)
            .field("message", &self.message)
            .field("message_id", &self.message_id)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Validates required inputs and resolves the target issue.
pub fn resolve_action_inputs(
    inputs: &ActionInputs,
    ambient: &AmbientContext,
) -> Result<ResolvedAction, AddCommentError> {
    let message = required_input("message", inputs.message.as_deref())?;
    let token = required_input("token", inputs.token.as_deref())?;
    let message_id = input_value(inputs.message_id.as_deref()).unwrap_or_default();

    let number = resolve_issue_number(inputs, ambient)?;
    let repository = input_value(inputs.repository.as_deref())
        .or_else(|| input_value(ambient.repository.as_deref()))
        .ok_or_else(|| {
            AddCommentError::config("Repository not specified and GITHUB_REPOSITORY not set")
        })?;
    let repo = RepoRef::parse(repository)?;

    Ok(ResolvedAction {
        target: IssueRef { repo, number },
        message: message.to_string(),
        message_id: message_id.to_string(),
        token: token.to_string(),
    })
}

/// First match wins: issue-number input, pr-number input, ambient pull
/// request, ambient issue.
pub fn resolve_issue_number(
    inputs: &ActionInputs,
    ambient: &AmbientContext,
) -> Result<u64, AddCommentError> {
    if let Some(raw) = input_value(inputs.issue_number.as_deref()) {
        return parse_issue_number_input("issue-number", raw);
    }
    if let Some(raw) = input_value(inputs.pr_number.as_deref()) {
        return parse_issue_number_input("pr-number", raw);
    }
    ambient
        .pull_request_number
        .filter(|number| *number > 0)
        .or(ambient.issue_number.filter(|number| *number > 0))
        .ok_or_else(|| AddCommentError::config(MISSING_ISSUE_NUMBER_MESSAGE))
}

fn parse_issue_number_input(name: &str, raw: &str) -> Result<u64, AddCommentError> {
    match raw.parse::<u64>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(AddCommentError::config(format!(
            "Invalid {name} input '{raw}': expected a positive integer"
        ))),
    }
}

fn required_input<'a>(name: &str, value: Option<&'a str>) -> Result<&'a str, AddCommentError> {
    input_value(value).ok_or_else(|| {
        AddCommentError::config(format!("Input required and not supplied: {name}"))
    })
}

fn input_value(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
