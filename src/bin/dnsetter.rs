use anyhow::Result;
use clap::Parser;
use dnsetter::app::AppState;
use dnsetter::cli::{execute, Args, Command};
use dnsetter::config::Config;
use dnsetter::network::setup::SystemNetworkSetup;
use dnsetter::store::DnsStore;
use dnsetter::utils::tracing::enable_tracing;
use std::io;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args: Args = Args::parse();

    let config = match Config::from_path(&args.config_path, &args.env_prefix) {
        Ok(config) => config,
        Err(e) => {
            if enable_tracing(&Config::default().log.level).is_ok() {
                error!("A critical error occurred: {e:#}");
            }
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = enable_tracing(&config.log.level) {
        eprintln!("Failed to enable logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(args.command.unwrap_or(Command::Shell), &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("A critical error occurred: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> Result<bool> {
    let setup = SystemNetworkSetup::new(&config.commands);
    let store = DnsStore::open(&config.list_file)?;
    let mut state = AppState::start(&setup, store);

    execute(
        command,
        &mut state,
        &setup,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}
