use std::process::ExitCode;

use clap::Parser;
use sortkeys::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    match sortkeys::cli::run_cli(Arguments::parse()) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
