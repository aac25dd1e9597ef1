use clap::Parser;

use bp_cli::{cli::Cli, commands, logging};
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        if !err.is_output_already_printed() {
            error!(target = "bp", error = %err, "command failed");
        }
        std::process::exit(1);
    }
}
