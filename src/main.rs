//! keyescape CLI.
//!
//! Rewrites the keys of a JSON file in place and writes the replacement map.
//! Exits with 1 when the input cannot be read, 0 otherwise.

use clap::Parser;
use keyescape::{run, Error, ReportFormat, RunOptions, RunOutcome, DEFAULT_MAP_FILE};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const INPUT_UNREADABLE: u8 = 1;

#[derive(Parser)]
#[command(name = "keyescape")]
#[command(about = "Replace JSON keys with \\uXXXX escape sequences", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON file to rewrite in place (asked for on stdin when omitted)
    file: Option<PathBuf>,

    /// Where to write the replacement map
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MAP_FILE)]
    map_file: PathBuf,

    /// Report format: text or json
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    report_format: ReportFormat,

    /// Print the original and rewritten document
    #[arg(long)]
    print: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let input = match cli.file {
        Some(path) => path,
        None => match prompt_for_path() {
            Ok(path) => path,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::from(INPUT_UNREADABLE);
            }
        },
    };

    let options = RunOptions::new(input)
        .with_map_path(cli.map_file)
        .with_report_format(cli.report_format);

    match run(&options) {
        Ok(outcome) => {
            print_outcome(&options, &outcome, cli.print);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(INPUT_UNREADABLE)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Reads the first whitespace-delimited token from stdin.
fn prompt_for_path() -> Result<PathBuf, Error> {
    print!("Enter the name of the JSON file: ");
    io::stdout()
        .flush()
        .map_err(|e| Error::io(&e.to_string()))?;

    for line in io::stdin().lock().lines() {
        let line = line.map_err(|e| Error::io(&e.to_string()))?;
        if let Some(token) = line.split_whitespace().next() {
            return Ok(PathBuf::from(token));
        }
    }
    Err(Error::io("no file name given on stdin"))
}

fn print_outcome(options: &RunOptions, outcome: &RunOutcome, echo: bool) {
    if echo {
        println!("Read JSON from file:\n{}", outcome.original);
    }

    match &outcome.report_error {
        Some(err) => eprintln!("Error: Unable to write replacement map. {err}"),
        None => println!("Replacement map written to {}", options.map_path.display()),
    }

    if echo {
        println!(
            "Unicode representation:\n{}",
            String::from_utf8_lossy(outcome.escaped.document())
        );
    }

    match &outcome.document_error {
        Some(err) => eprintln!("Error: Unable to write modified JSON to file. {err}"),
        None => println!(
            "Modified JSON written back to file: {}",
            options.input.display()
        ),
    }
}
