#![forbid(unsafe_code)]

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use launch_config::{
    ConfigParser, MAXIMUM_CONFIG_FILE_VERSION, MINIMUM_CONFIG_FILE_VERSION, MultiPartConfiguration,
    VersionWindow, parse_options,
};
use tracing_subscriber::EnvFilter;

/// Validate a launch configuration file and print the parts it contains.
///
/// Exit codes: 0 valid, 1 usage error, 2 input cannot be read, 3 invalid configuration.
#[derive(Debug, Parser)]
#[command(name = "launch-config", version, about)]
struct Cli {
    /// Configuration file to validate, `-` reads standard input.
    file: PathBuf,

    /// Oldest configuration file version to accept.
    #[arg(long, default_value_t = MINIMUM_CONFIG_FILE_VERSION.to_string())]
    min_version: String,

    /// Newest configuration file version to accept.
    #[arg(long, default_value_t = MAXIMUM_CONFIG_FILE_VERSION.to_string())]
    max_version: String,

    /// Only validate, do not print the parsed parts.
    #[arg(short, long)]
    quiet: bool,
}

fn read_input(path: &Path) -> std::io::Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut content = Vec::new();
        std::io::stdin().read_to_end(&mut content)?;
        Ok(content)
    } else {
        std::fs::read(path)
    }
}

fn print_parts(multi: &MultiPartConfiguration) -> Result<(), String> {
    for (index, part) in multi.iter().enumerate() {
        if index > 0 {
            println!("---");
        }
        let serialized = serde_saphyr::to_string(part)
            .map_err(|err| format!("Failed to serialize part {index}: {err}"))?;
        print!("{serialized}");
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("launch_config=warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let window = match VersionWindow::parse(&cli.min_version, &cli.max_version) {
        Ok(window) => window,
        Err(err) => {
            eprintln!("Invalid version range: {err}");
            return ExitCode::from(1);
        }
    };

    let content = match read_input(&cli.file) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("Failed to read {}: {err}", cli.file.display());
            return ExitCode::from(2);
        }
    };

    let parser = ConfigParser::with_options(parse_options! { version_window: window });
    let multi = match parser.parse_multi_part(&content) {
        Ok(multi) => multi,
        Err(err) => {
            eprintln!("{} invalid:\n{err}", cli.file.display());
            return ExitCode::from(3);
        }
    };

    if multi.is_empty() {
        eprintln!("{}: no configuration parts found", cli.file.display());
    }

    if !cli.quiet {
        if let Err(err) = print_parts(&multi) {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
