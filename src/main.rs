use clap::Parser;
use multicalc::cli::{self, args::Options};
use std::process::ExitCode;

fn main() -> std::result::Result<ExitCode, Box<dyn std::error::Error>> {
    let options = Options::parse();
    cli::init_logger(options.verbose);

    cli::run(&options)
}
