use std::process::ExitCode;

use crate::cli::run;

pub mod catalog;
pub mod cli;
mod config;
pub mod domain;
pub mod emit;
pub mod grouping;
pub mod pipeline;
mod playback;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
