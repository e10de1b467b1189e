//! ansiprint CLI - Print through a terminal's attached printer
//!
//! Wraps standard input, or the files named after `-f`, in the ANSI media
//! copy sequences `ESC [ 5 i` / `ESC [ 4 i` so a terminal emulator that
//! supports printer pass-through sends the text to its printer.

use ansiprint_format::constants::DEFAULT_BUFFER_SIZE;
use ansiprint_io::{execute_print, InputSelection, OutputDevice, PrintConfig, PrintError};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const USAGE_NOTES: &str = "\
DEFAULT BEHAVIOR:
Unless '-f' is given, files on the command line are ignored and stdin is
printed. With '-f', stdin is ignored and the listed files are printed.

When several files are given, a form-feed is printed after each file except
the last. '-S' turns this off; files are then separated by a line feed.

A form-feed is NOT printed after the last file unless '-n' is given. (This is
mostly useful for tractor-fed printers.)

Several files piped into stdin are printed as one lump.

Set RUST_LOG to override the log filter chosen by '-v'.";

#[derive(Parser, Debug)]
#[command(name = "ansiprint")]
#[command(about = "Print stdin or files through the terminal's attached printer")]
#[command(version)]
#[command(after_long_help = USAGE_NOTES)]
struct Cli {
    /// Print a form-feed character after everything else
    #[arg(short = 'n', long = "form-feed")]
    form_feed: bool,
    /// Do NOT print a form-feed between files; separate them with a line feed
    #[arg(short = 'S', long = "no-separate")]
    no_separate: bool,
    /// Write output to /dev/tty instead of stdout (in case something is trapping stdout)
    #[arg(short = 't', long)]
    tty: bool,
    /// Print the files named on the command line instead of stdin
    #[arg(short = 'f', long = "files")]
    use_files: bool,
    /// Read/write buffer size in bytes
    #[arg(short = 'b', long = "buffer-size", value_name = "BYTES", default_value_t = DEFAULT_BUFFER_SIZE)]
    buffer_size: usize,
    /// Convert each LF to LF/CR (for terminals that need a CR after every LF)
    #[arg(short = 'm', long = "crlf")]
    crlf: bool,
    /// Suppress all printer control sequences and separators
    #[arg(long)]
    plain: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Files to print (read only with -f)
    #[arg(value_name = "FILE")]
    paths: Vec<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("ansiprint: {err}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), PrintError> {
    let config = resolve_config(cli)?;
    let summary = execute_print(&config)?;
    debug!(?summary, "done");
    Ok(())
}

fn resolve_config(cli: Cli) -> Result<PrintConfig, PrintError> {
    let input = if cli.use_files {
        if cli.paths.is_empty() {
            return Err(PrintError::Usage("-f given but no files named".to_string()));
        }
        InputSelection::Files(cli.paths)
    } else {
        if !cli.paths.is_empty() {
            warn!(
                count = cli.paths.len(),
                "ignoring file arguments without -f; reading stdin"
            );
        }
        InputSelection::Stdin
    };

    let output = if cli.tty {
        OutputDevice::Tty
    } else {
        OutputDevice::Stdout
    };

    Ok(PrintConfig::new(cli.buffer_size)?
        .with_trailing_marker(cli.form_feed)
        .with_separate_files(!cli.no_separate)
        .with_translate_line_endings(cli.crlf)
        .with_control_sequences(!cli.plain)
        .with_output(output)
        .with_input(input))
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
