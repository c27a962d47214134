//! clipmon CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use clipmon::cli::{
    app::{cli_config, load_default_config, resolve_monitor_options, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    history_cmd::{handle_copy_command, handle_history_command, handle_status_command},
    ipc::create_ipc_client,
    monitor_app::run_monitor,
    presenter::Presenter,
};
use clipmon::infrastructure::XdgConfigStore;

const LOG_ENV: &str = "CLIPMON_LOG";

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    if let Err(e) = cli.check_subcommand_flags() {
        e.exit();
    }
    init_tracing(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(command) = cli.command.take() {
        let result = match command {
            Commands::Config { action } => {
                let store = XdgConfigStore::new();
                handle_config_command(action, &store, &presenter)
                    .await
                    .map_err(|e| e.to_string())
            }
            Commands::History { action } => {
                let client = create_ipc_client();
                handle_history_command(action, client.as_ref(), &presenter)
                    .await
                    .map_err(|e| e.to_string())
            }
            Commands::Copy { text } => {
                let client = create_ipc_client();
                handle_copy_command(text, client.as_ref(), &presenter)
                    .await
                    .map_err(|e| e.to_string())
            }
            Commands::Status => {
                let client = create_ipc_client();
                handle_status_command(client.as_ref(), &presenter)
                    .await
                    .map_err(|e| e.to_string())
            }
        };

        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                presenter.error(&e);
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    // Merge config: defaults < file < cli
    let config = load_default_config(cli_config(&cli)).await;

    let options = match resolve_monitor_options(&config, cli.quiet) {
        Ok(options) => options,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_monitor(options).await
}
