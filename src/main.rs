//! Main entry point for the zipnames CLI application.
//!
//! Lists the entry names of one or more ZIP archives, one name per line.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use zipnames::{Cli, ZipReader};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let failed = run(&cli, &mut std::io::stdout().lock());
    if failed > 0 {
        bail!("{} of {} archives could not be listed", failed, cli.files.len());
    }

    Ok(())
}

/// Install a stderr subscriber so listings on stdout stay clean.
///
/// `RUST_LOG` wins over the CLI's default filter unless `--debug` is given.
fn init_tracing(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new(cli.log_filter())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// List every archive on the command line, reporting failures on stderr.
///
/// Returns how many archives could not be listed.
fn run(cli: &Cli, out: &mut impl Write) -> usize {
    let mut reader = ZipReader::with_config(cli.reader_config());
    let mut failed = 0;
    for path in &cli.files {
        if let Err(err) = list_archive(&mut reader, path, cli, out) {
            eprintln!("zipnames: {:#}", err);
            failed += 1;
        }
    }
    failed
}

/// Bind one archive and print its entries.
fn list_archive(
    reader: &mut ZipReader,
    path: &Path,
    cli: &Cli,
    out: &mut impl Write,
) -> Result<()> {
    reader
        .set_input(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let entries = reader
        .get_entries()
        .with_context(|| format!("cannot list {}", path.display()))?;

    if cli.count {
        if cli.show_headers() {
            writeln!(out, "{}: {}", path.display(), entries.len())?;
        } else {
            writeln!(out, "{}", entries.len())?;
        }
        return Ok(());
    }

    if cli.show_headers() {
        writeln!(out, "Archive:  {}", path.display())?;
    }
    for name in &entries {
        writeln!(out, "{}", name)?;
    }

    Ok(())
}
