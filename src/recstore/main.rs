use clap::Parser;
use colored::*;
use recstore::api::perform;
use recstore::error::{RecStoreError, Result};
use std::io::{self, Write};

mod args;
mod logging;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_from(args::normalize(std::env::args_os()));
    logging::init(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    perform(&cli.params(), &mut out)?;
    out.flush().map_err(RecStoreError::Output)
}
