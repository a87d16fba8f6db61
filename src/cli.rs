use clap::Parser;
use std::path::PathBuf;

use crate::config::{ExtensionMatch, NameLength, ReaderConfig};

#[derive(Parser, Debug)]
#[command(name = "zipnames")]
#[command(version)]
#[command(about = "List the entry names of ZIP archives", long_about = None)]
#[command(after_help = "Examples:\n  \
  zipnames data1.zip               list the names stored in data1.zip\n  \
  zipnames -c a.zip b.zip          print how many entries each archive holds\n  \
  zipnames --declared odd.zip      use the name lengths stored in the headers")]
pub struct Cli {
    /// ZIP file paths
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Accept the .zip extension in any letter case
    #[arg(short = 'i', long = "ignore-case")]
    pub ignore_case: bool,

    /// Trust the name, extra field and comment lengths stored in each header
    #[arg(long)]
    pub declared: bool,

    /// Print only the number of entries
    #[arg(short = 'c', long)]
    pub count: bool,

    /// Quiet mode (no archive headers)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Log the central directory walk to stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Whether each archive's output is introduced by its path.
    pub fn show_headers(&self) -> bool {
        self.files.len() > 1 && !self.is_quiet()
    }

    pub fn reader_config(&self) -> ReaderConfig {
        let extension_match = if self.ignore_case {
            ExtensionMatch::IgnoreAsciiCase
        } else {
            ExtensionMatch::Exact
        };
        let name_length = if self.declared {
            NameLength::Declared
        } else {
            NameLength::Scan
        };

        ReaderConfig::default()
            .with_extension_match(extension_match)
            .with_name_length(name_length)
    }

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug { "zipnames=trace" } else { "warn" }
    }
}
