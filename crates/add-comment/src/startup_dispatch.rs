use std::process::ExitCode;

use add_comment_issues::AddCommentError;
use add_comment_runtime::action_outputs::{render_failure_command, write_action_outputs};
use add_comment_runtime::ambient_context::ambient_context_from_env;
use add_comment_runtime::execute_add_comment;
use tracing::error;

use crate::cli_args::Cli;

/// Runs the action and converts any failure into the `::error::` command.
pub(crate) async fn run_cli(cli: Cli) -> ExitCode {
    match run_action(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("{}", render_failure_command(&error.failure_message()));
            ExitCode::FAILURE
        }
    }
}

async fn run_action(cli: Cli) -> Result<(), AddCommentError> {
    let ambient = ambient_context_from_env().await?;
    let inputs = cli.action_inputs();
    let api_base = cli.api_base();

    let run =
        tokio::spawn(async move { execute_add_comment(&inputs, &ambient, &api_base).await });
    let result = match run.await {
        Ok(result) => result?,
        Err(join_error) => {
            error!("add-comment run aborted: {join_error}");
            return Err(AddCommentError::Unknown);
        }
    };

    write_action_outputs(&result, cli.github_output.as_deref())?;
    Ok(())
}
