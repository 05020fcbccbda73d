use std::process::ExitCode;

use annopin::cli::{Arguments, ExitStatus, init_logging};
use clap::Parser;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match annopin::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitStatus::Error.into()
        }
    }
}
