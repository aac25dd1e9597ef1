mod click;
mod eval;
mod fill;
mod navigate;
mod screenshot;
mod scroll;
mod search;
mod summarize;
mod text;
mod title;
mod wait;

use bp::Session;
use bp_cdp::CdpEngine;
use bp_engine::Engine;
use tracing::warn;

use crate::cli::{Cli, Commands};
use crate::context::{self, EnvOverrides};
use crate::error::{CliError, Result};
use crate::output::{EmptyResult, OutputFormat, ResultBuilder, print_result};

/// Runs one CLI invocation end to end: build config, launch, execute,
/// close. On failure the failure envelope is printed here, so the caller
/// only turns the error into an exit code.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.into();
    let env = EnvOverrides::from_env();
    let config = context::session_config(&cli, &env);
    let command = cli.command;

    let mut session = Session::new(CdpEngine, config);
    let outcome = run(&mut session, &command, format).await;
    if let Err(err) = session.close().await {
        warn!(target = "bp", error = %err, "session close failed");
    }

    match outcome {
        Ok(()) => Ok(()),
        Err(err) => {
            let cmd_err = err.to_command_error();
            let result: EmptyResult = ResultBuilder::new(command.name())
                .error(cmd_err.code, cmd_err.message)
                .build();
            print_result(&result, format);
            Err(CliError::OutputAlreadyPrinted)
        }
    }
}

/// Launches the session and executes `command` against it. Generic over
/// the engine so tests drive it with a mock.
pub async fn run<E: Engine>(
    session: &mut Session<E>,
    command: &Commands,
    format: OutputFormat,
) -> Result<()> {
    session.launch().await?;

    match command {
        Commands::Navigate { url } => navigate::execute(session, url, format).await,
        Commands::Fill {
            url,
            selector,
            value,
        } => fill::execute(session, url, selector, value, format).await,
        Commands::Click { url, selector } => click::execute(session, url, selector, format).await,
        Commands::Text { url, selector } => text::execute(session, url, selector, format).await,
        Commands::Title { url } => title::execute(session, url, format).await,
        Commands::Wait {
            url,
            selector,
            timeout_ms,
        } => wait::execute(session, url, selector, *timeout_ms, format).await,
        Commands::Eval { url, expression } => {
            eval::execute(session, url, expression, format).await
        }
        Commands::Screenshot { url, label } => {
            screenshot::execute(session, url, label, format).await
        }
        Commands::Scroll { url } => scroll::execute(session, url, format).await,
        Commands::Search {
            url,
            query,
            selector,
        } => search::execute(session, url, query, selector.as_deref(), format).await,
        Commands::Summarize { url } => summarize::execute(session, url, format).await,
    }
}
