//! # zipnames
//!
//! List the entry names stored in a ZIP archive's central directory.
//!
//! Nothing is decompressed. The archive is read from the end: the End of
//! Central Directory Record is found by a backward signature scan, its
//! offset leads to the central directory, and each Central Directory File
//! Header yields one name.
//!
//! ## Features
//!
//! - Bind a `.zip` file on disk and enumerate it with [`ZipReader`]
//! - Enumerate in-memory or custom sources with [`CentralDirectoryParser`]
//! - Infer name lengths by signature scan, or trust the declared lengths
//! - Typed errors for truncated and corrupt archives
//!
//! ## Example
//!
//! ```no_run
//! use zipnames::ZipReader;
//!
//! fn main() -> zipnames::Result<()> {
//!     let mut reader = ZipReader::new();
//!     reader.set_input("archive.zip")?;
//!
//!     for name in reader.get_entries()? {
//!         println!("{}", name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod zip;

pub use cli::Cli;
pub use config::{ExtensionMatch, NameLength, ReaderConfig};
pub use error::{Error, ErrorKind, Result};
pub use io::{ArchiveCursor, LocalFileReader, ReadAt};
pub use zip::{CentralDirectoryParser, ZipReader};
