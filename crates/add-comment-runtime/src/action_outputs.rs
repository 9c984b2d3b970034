//! GitHub Actions workflow-command output for a finished run.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use add_comment_issues::issue_comment::UpsertResult;
use anyhow::{Context, Result};

pub const GITHUB_OUTPUT_ENV: &str = "GITHUB_OUTPUT";

/// Renders all outputs as `name=value` lines.
pub fn render_action_outputs(result: &UpsertResult) -> String {
    result
        .output_pairs()
        .iter()
        .map(|(name, value)| format!("{name}={value}\n"))
        .collect()
}

/// Appends the outputs to the `GITHUB_OUTPUT` file in one write, or prints
/// them to stdout when no output file is configured.
pub fn write_action_outputs(result: &UpsertResult, output_path: Option<&Path>) -> Result<()> {
    let rendered = render_action_outputs(result);
    let Some(path) = output_path else {
        print!("{rendered}");
        return Ok(());
    };
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open action output file {}", path.display()))?;
    file.write_all(rendered.as_bytes())
        .with_context(|| format!("failed to write action output file {}", path.display()))
}

/// `::error::` workflow command that marks the run as failed.
pub fn render_failure_command(message: &str) -> String {
    format!("::error::{}", escape_command_data(message))
}

fn escape_command_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
