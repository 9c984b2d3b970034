use std::path::PathBuf;

use add_comment_issues::issue_target::ActionInputs;
use add_comment_runtime::DEFAULT_GITHUB_API_BASE;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "add-comment",
    version,
    about = "Create or update a GitHub issue/PR comment identified by a message id"
)]
/// Action inputs. Each flag falls back to the `INPUT_*` variable GitHub
/// Actions sets for the corresponding `with:` key.
pub(crate) struct Cli {
    #[arg(
        long = "message",
        env = "INPUT_MESSAGE",
        help = "Comment body (markdown). Required"
    )]
    pub(crate) message: Option<String>,

    #[arg(
        long = "repository",
        env = "INPUT_REPOSITORY",
        help = "Target repository in owner/repo format; defaults to GITHUB_REPOSITORY"
    )]
    pub(crate) repository: Option<String>,

    #[arg(
        long = "token",
        env = "INPUT_TOKEN",
        hide_env_values = true,
        help = "GitHub token used for API access. Required"
    )]
    pub(crate) token: Option<String>,

    #[arg(
        long = "message-id",
        env = "INPUT_MESSAGE-ID",
        help = "Stable identifier; an existing comment with the same id is updated instead of creating a new one"
    )]
    pub(crate) message_id: Option<String>,

    #[arg(
        long = "issue-number",
        env = "INPUT_ISSUE-NUMBER",
        help = "Issue number to comment on; overrides the event context"
    )]
    pub(crate) issue_number: Option<String>,

    #[arg(
        long = "pr-number",
        env = "INPUT_PR-NUMBER",
        help = "Pull request number to comment on; alias used when issue-number is not set"
    )]
    pub(crate) pr_number: Option<String>,

    #[arg(
        long = "github-api-base",
        env = "GITHUB_API_URL",
        default_value = DEFAULT_GITHUB_API_BASE,
        help = "GitHub REST API base URL"
    )]
    pub(crate) github_api_base: String,

    #[arg(
        long = "github-output",
        env = "GITHUB_OUTPUT",
        help = "File that receives name=value action outputs; printed to stdout when unset"
    )]
    pub(crate) github_output: Option<PathBuf>,
}

impl Cli {
    pub(crate) fn action_inputs(&self) -> ActionInputs {
        ActionInputs {
            message: self.message.clone(),
            repository: self.repository.clone(),
            token: self.token.clone(),
            message_id: self.message_id.clone(),
            issue_number: self.issue_number.clone(),
            pr_number: self.pr_number.clone(),
        }
    }

    pub(crate) fn api_base(&self) -> String {
        let trimmed = self.github_api_base.trim();
        if trimmed.is_empty() {
            DEFAULT_GITHUB_API_BASE.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
