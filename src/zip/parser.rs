//! Low-level central directory walker.
//!
//! This module finds entry names by working purely on the archive's
//! trailing metadata, reading from any source that implements the
//! [`ReadAt`] trait.
//!
//! ## Parsing Strategy
//!
//! 1. Scan backwards from the end of the source for the End of Central
//!    Directory Record (EOCDR) signature
//! 2. Follow the central directory offset stored 16 bytes into the EOCDR
//! 3. For each Central Directory File Header (CDFH), skip the 46 byte fixed
//!    header and read the file name
//! 4. Stop at the EOCDR signature, or when no further CDFH signature exists
//!
//! With [`NameLength::Scan`] the end of a file name is wherever the next
//! CDFH or EOCDR signature begins. That only holds for headers with an empty
//! extra field and an empty comment. [`NameLength::Declared`] reads the
//! lengths stored in the header instead.

use tracing::{debug, trace};

use crate::config::NameLength;
use crate::error::{Error, Result};
use crate::io::{ArchiveCursor, ReadAt};

use super::structures::*;

/// Central directory parser.
///
/// Owns its source. Every call to [`list_names`](Self::list_names) walks the
/// archive from scratch with a fresh cursor, so repeated calls agree.
///
/// ## Example
///
/// ```
/// use zipnames::CentralDirectoryParser;
///
/// // An archive with no entries: just the 22 byte EOCDR
/// let mut data = b"PK\x05\x06".to_vec();
/// data.resize(22, 0);
///
/// let parser = CentralDirectoryParser::new(data);
/// assert!(parser.list_names().unwrap().is_empty());
/// ```
pub struct CentralDirectoryParser<R: ReadAt> {
    /// The underlying data source
    reader: R,
    name_length: NameLength,
}

impl<R: ReadAt> CentralDirectoryParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            name_length: NameLength::default(),
        }
    }

    pub fn with_name_length(mut self, name_length: NameLength) -> Self {
        self.name_length = name_length;
        self
    }

    /// List entry names in central directory order.
    ///
    /// Names that are not valid UTF-8 have the offending bytes replaced
    /// with U+FFFD; use [`list_raw_names`](Self::list_raw_names) for the
    /// exact bytes.
    pub fn list_names(&self) -> Result<Vec<String>> {
        let names = self.list_raw_names()?;
        Ok(names
            .iter()
            .map(|name| String::from_utf8_lossy(name).into_owned())
            .collect())
    }

    /// List entry names as stored, without any decoding.
    ///
    /// # Errors
    ///
    /// Fails as a whole: no partial list is returned when any record is
    /// malformed.
    pub fn list_raw_names(&self) -> Result<Vec<Vec<u8>>> {
        let mut cursor = ArchiveCursor::new(&self.reader);

        let eocdr = locate_eocdr(&mut cursor)?;
        let cd_start = position_at_cd_start(&mut cursor, eocdr)?;
        debug!(eocdr, cd_start, size = cursor.len(), "located central directory");

        if cd_start == eocdr {
            debug!("central directory is empty");
            return Ok(Vec::new());
        }

        let names = match self.name_length {
            NameLength::Scan => walk_scanned(&mut cursor)?,
            NameLength::Declared => walk_declared(&mut cursor)?,
        };
        debug!(entries = names.len(), "central directory walk finished");
        Ok(names)
    }

}

/// Find the End of Central Directory Record.
///
/// Candidate offsets are tried one byte at a time from `len - 4` down to 0
/// and the first (highest) match wins. A signature that happens to appear in
/// bytes after the real record is not told apart from it.
///
/// On success the cursor is left on the signature and its offset is
/// returned.
pub fn locate_eocdr<R: ReadAt + ?Sized>(cursor: &mut ArchiveCursor<'_, R>) -> Result<u64> {
    let Some(mut pos) = cursor.len().checked_sub(SIGNATURE_SIZE) else {
        return Err(Error::EocdrNotFound);
    };

    loop {
        if cursor.u32_at(pos)? == CD_END {
            cursor.seek_to(pos)?;
            return Ok(pos);
        }
        if pos == 0 {
            return Err(Error::EocdrNotFound);
        }
        pos -= 1;
    }
}

/// Move from the EOCDR signature at `eocdr` to the start of the central
/// directory.
///
/// Returns the new position. An offset at or past the end of the source, or
/// one that lands inside the EOCDR itself, fails with
/// [`Error::CorruptArchive`]. An offset equal to `eocdr` is an empty
/// directory.
pub fn position_at_cd_start<R: ReadAt + ?Sized>(
    cursor: &mut ArchiveCursor<'_, R>,
    eocdr: u64,
) -> Result<u64> {
    cursor.skip(EndOfCentralDirectory::CD_OFFSET_FIELD)?;
    let cd_start = cursor.read_u32()? as u64;

    let inside_eocdr = cd_start > eocdr && cd_start < eocdr + EndOfCentralDirectory::SIZE;
    if cd_start >= cursor.len() || inside_eocdr {
        return Err(Error::CorruptArchive {
            offset: cd_start,
            len: cursor.len(),
        });
    }

    cursor.seek_to(cd_start)?;
    Ok(cd_start)
}

/// Find where the file name starting at the cursor ends.
///
/// Looks ahead one byte at a time for either signature and returns its
/// offset together with which one it was. The cursor does not move.
pub fn end_of_filename<R: ReadAt + ?Sized>(
    cursor: &mut ArchiveCursor<'_, R>,
) -> Result<(u64, Signature)> {
    let start = cursor.position();
    let mut pos = start;
    while pos + SIGNATURE_SIZE <= cursor.len() {
        if let Some(signature) = Signature::from_u32(cursor.u32_at(pos)?) {
            return Ok((pos, signature));
        }
        pos += 1;
    }

    Err(Error::UnexpectedEof { offset: start })
}

/// Move the cursor to the next CDFH signature at or after it.
///
/// Returns `false`, leaving the cursor where it was, if there is none.
pub fn find_next_record<R: ReadAt + ?Sized>(cursor: &mut ArchiveCursor<'_, R>) -> Result<bool> {
    let mut pos = cursor.position();
    while pos + SIGNATURE_SIZE <= cursor.len() {
        if cursor.u32_at(pos)? == CD_START {
            cursor.seek_to(pos)?;
            return Ok(true);
        }
        pos += 1;
    }

    Ok(false)
}

/// Read the file name of the record under the cursor, inferring its
/// length from the next signature.
///
/// Returns the name and the signature that ended it, leaving the cursor on
/// that signature.
pub fn read_entry<R: ReadAt + ?Sized>(
    cursor: &mut ArchiveCursor<'_, R>,
) -> Result<(Vec<u8>, Signature)> {
    let record_start = cursor.position();
    cursor.skip(CentralDirectoryHeader::FILE_NAME)?;

    let name_start = cursor.position();
    let (boundary, signature) = end_of_filename(cursor)?;
    let name = cursor.read_bytes((boundary - name_start) as usize)?;

    trace!(record_start, name_len = name.len(), ?signature, "read central directory entry");
    Ok((name, signature))
}

fn walk_scanned<R: ReadAt + ?Sized>(cursor: &mut ArchiveCursor<'_, R>) -> Result<Vec<Vec<u8>>> {
    let mut names = Vec::new();
    loop {
        let (name, signature) = read_entry(cursor)?;
        names.push(name);

        if signature == Signature::EndOfCentralDirectory || !find_next_record(cursor)? {
            break;
        }
    }
    Ok(names)
}

/// Read the name, extra field and comment lengths of the record under the
/// cursor. The cursor does not move.
pub fn read_declared_lengths<R: ReadAt + ?Sized>(
    cursor: &mut ArchiveCursor<'_, R>,
) -> Result<DeclaredLengths> {
    let record_start = cursor.position();
    cursor.skip(CentralDirectoryHeader::NAME_LENGTH_FIELD)?;
    let lengths = DeclaredLengths {
        file_name: cursor.read_u16()?,
        extra_field: cursor.read_u16()?,
        file_comment: cursor.read_u16()?,
    };
    cursor.seek_to(record_start)?;
    Ok(lengths)
}

fn walk_declared<R: ReadAt + ?Sized>(cursor: &mut ArchiveCursor<'_, R>) -> Result<Vec<Vec<u8>>> {
    let mut names = Vec::new();
    loop {
        let record_start = cursor.position();
        match Signature::from_u32(cursor.peek_u32()?) {
            Some(Signature::EndOfCentralDirectory) => break,
            Some(Signature::CentralDirectoryHeader) => {}
            None => {
                return Err(Error::CorruptArchive {
                    offset: record_start,
                    len: cursor.len(),
                });
            }
        }

        let lengths = read_declared_lengths(cursor)?;
        cursor.skip(CentralDirectoryHeader::FILE_NAME)?;
        let name = cursor.read_bytes(lengths.file_name as usize)?;
        trace!(record_start, ?lengths, "read central directory entry");
        names.push(name);

        let next_record = cursor.position() + lengths.trailing();
        cursor.seek_to(next_record)?;
    }
    Ok(names)
}
