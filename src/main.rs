//! homelab CLI - declarative Podman Quadlet deployment
//!
//! Usage: homelab <COMMAND>
//!
//! Commands:
//!   sync      Reconcile a machine (or --all) with machines.yaml
//!   status    Show supervisor state of deployed services
//!   undeploy  Remove deployed services
//!   list      List configured machines

use std::process::ExitCode;

use clap::Parser;
use homelab::presentation::Cli;

mod commands;
mod ui;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ui = ui::context::UiContext::new(cli.json, cli.verbose, cli.color);

    match commands::dispatch(&cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            ui::error::print_error(&e, &ui);
            ExitCode::FAILURE
        }
    }
}
