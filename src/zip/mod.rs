//! ZIP central directory parsing.
//!
//! This module lists the entries of a ZIP archive without touching any
//! compressed data.
//!
//! ## Architecture
//!
//! - [`structures`]: Signatures and fixed offsets of the records involved
//! - [`parser`]: The backward EOCDR scan and the central directory walk
//! - [`reader`]: Binding an archive on disk and enumerating it
//!
//! ## ZIP Format Overview
//!
//! A ZIP file consists of:
//! 1. Local file headers and compressed data for each file
//! 2. Central Directory with one header per file
//! 3. End of Central Directory Record (EOCDR) at the end
//!
//! Only the last two are read here.
//!
//! ## Limitations
//!
//! - No ZIP64 support
//! - No multi-disk archive support
//! - No CRC or content validation

mod parser;
mod reader;
mod structures;

pub use parser::{
    CentralDirectoryParser, end_of_filename, find_next_record, locate_eocdr, position_at_cd_start,
    read_declared_lengths, read_entry,
};
pub use reader::ZipReader;
pub use structures::*;
