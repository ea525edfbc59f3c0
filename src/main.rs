//! mdu - recursive disk usage.
//!
//! Usage:
//!   mdu [-b] [-L] [-c] [PATH]...
//!
//! Prints `<size>\t<path>` for every sub-directory and every PATH, sizes in
//! 512-byte blocks unless `-b` asks for bytes.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use mdu_core::{UsageConfig, UsageError};
use mdu_scan::{StreamReporter, UsageWalker};

const USAGE: &str = "usage: mdu [-b] [-L] [-c] [FILE]...";

#[derive(Parser, Debug)]
#[command(
    name = "mdu",
    about = "Summarize disk usage of each PATH, recursively for directories",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print apparent sizes in bytes rather than allocated blocks
    #[arg(short = 'b')]
    apparent_size: bool,

    /// Follow symbolic links
    #[arg(short = 'L')]
    dereference: bool,

    /// Print a grand total after all paths
    #[arg(short = 'c')]
    total: bool,

    /// Paths to measure (defaults to the current directory)
    paths: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> Result<UsageConfig, UsageError> {
        UsageConfig::builder()
            .apparent_size(self.apparent_size)
            .follow_symlinks(self.dereference)
            .print_total(self.total)
            .build()
    }
}

/// Print the one-line usage. A closed stdout leaves nothing to report to.
fn print_usage(out: &mut impl Write) {
    let _ = writeln!(out, "{USAGE}");
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            tracing::debug!(error = %err, "invalid arguments");
            print_usage(&mut io::stdout());
            return Ok(ExitCode::FAILURE);
        }
    };

    let config = cli.config()?;
    let mut walker = UsageWalker::new(config, StreamReporter::stdio());

    match walker.run(&cli.paths) {
        Ok(_) => {}
        // Reader went away, nothing left to say
        Err(err) if err.is_broken_pipe() => return Ok(ExitCode::FAILURE),
        Err(err) => return Err(err).context("Disk usage run failed"),
    }

    match walker.reporter_mut().flush() {
        Err(err) if err.is_broken_pipe() => Ok(ExitCode::FAILURE),
        result => {
            result.context("Failed to flush output")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_flags() {
        let cli = Cli::try_parse_from(["mdu", "-bLc", "a", "b"]).unwrap();
        let config = cli.config().unwrap();

        assert!(config.apparent_size);
        assert!(config.follow_symlinks);
        assert!(config.print_total);
        assert_eq!(cli.paths, vec![PathBuf::from("a"), PathBuf::from("b")]);
    }

    #[test]
    fn test_no_paths() {
        let cli = Cli::try_parse_from(["mdu"]).unwrap();
        assert!(cli.paths.is_empty());
        assert_eq!(cli.config().unwrap(), UsageConfig::new());
    }

    #[test]
    fn test_only_short_option_letters() {
        for flag in ["-x", "-h", "-V", "--help", "--version", "--total", "--apparent-size"] {
            assert!(Cli::try_parse_from(["mdu", flag]).is_err(), "{flag} accepted");
        }
    }

    #[test]
    fn test_usage_line() {
        let mut out = Vec::new();
        print_usage(&mut out);
        assert_eq!(String::from_utf8(out).unwrap(), format!("{USAGE}\n"));
    }

    #[test]
    fn test_usage_ignores_closed_output() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        print_usage(&mut Closed);
    }
}
