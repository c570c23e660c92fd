use clap::Parser;
use latest::args::Args;
use latest::config::{OutputOptions, Request};
use latest::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&OutputOptions::from(&args));

    let result = Request::try_from(args).and_then(|request| latest::run(&request));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            e.exit_code()
        }
    }
}
