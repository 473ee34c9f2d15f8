pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use clap::Parser;
use cli::Cli;
use std::process::ExitCode;

pub fn run() -> ExitCode {
    let _log_guard = utils::logging::init();

    match commands::dispatch(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
