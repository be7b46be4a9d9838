use imgconv::convert;
use std::{path::PathBuf, process::ExitCode};
use tracing::Level;

use clap::Parser;

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    /// The image to convert
    input: PathBuf,

    /// The output file name, with the extension selecting the output format
    output: PathBuf,
}

fn main() -> ExitCode {
    // clap exits with 2 on bad usage by default; this tool reserves 2 for
    // unrecognized input formats and reports usage errors as 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let is_usage_error = e.use_stderr();
            let _ = e.print();
            return if is_usage_error {
                ExitCode::from(1)
            } else {
                // --help and --version land here
                ExitCode::SUCCESS
            };
        }
    };
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match convert(&cli.input, &cli.output) {
        Ok(()) => {
            println!("Successfully converted");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
