//! Bounds-checked cursor over a [`ReadAt`] source.
//!
//! Every stream access made while walking the central directory goes
//! through [`ArchiveCursor`], so a position derived from corrupt header data
//! turns into a typed [`Error`] instead of a garbage read.
//!
//! The signature scans read a `u32` at every byte offset. To keep that from
//! turning into one positional read per byte, small reads are served from a
//! window of the source that is refilled around the requested offset.

use byteorder::{ByteOrder, LittleEndian};

use super::ReadAt;
use crate::error::{Error, Result};

/// Size of the read-ahead window used for small fixed-width reads.
const WINDOW_SIZE: usize = 8 * 1024;

pub struct ArchiveCursor<'a, R: ReadAt + ?Sized> {
    source: &'a R,
    len: u64,
    pos: u64,
    window: Vec<u8>,
    window_start: u64,
}

impl<'a, R: ReadAt + ?Sized> ArchiveCursor<'a, R> {
    /// Create a cursor at offset 0 spanning the whole source.
    pub fn new(source: &'a R) -> Self {
        Self {
            len: source.size(),
            source,
            pos: 0,
            window: Vec::new(),
            window_start: 0,
        }
    }

    /// Current absolute position.
    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Total length of the source in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to an absolute offset. Seeking to exactly `len` is allowed.
    pub fn seek_to(&mut self, offset: u64) -> Result<()> {
        if offset > self.len {
            return Err(Error::CorruptArchive {
                offset,
                len: self.len,
            });
        }
        self.pos = offset;
        Ok(())
    }

    /// Move forward by `n` bytes. Running off the end means the stream was
    /// cut short, so this fails with [`Error::UnexpectedEof`].
    pub fn skip(&mut self, n: u64) -> Result<()> {
        match self.pos.checked_add(n) {
            Some(target) if target <= self.len => {
                self.pos = target;
                Ok(())
            }
            _ => Err(Error::UnexpectedEof { offset: self.pos }),
        }
    }

    /// Read a little-endian `u32` at `offset` without moving the cursor.
    pub fn u32_at(&mut self, offset: u64) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.window_at(offset, 4)?))
    }

    /// Read a little-endian `u32` at the cursor without moving it.
    pub fn peek_u32(&mut self) -> Result<u32> {
        self.u32_at(self.pos)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let value = self.u32_at(self.pos)?;
        self.pos += 4;
        Ok(value)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let value = LittleEndian::read_u16(self.window_at(self.pos, 2)?);
        self.pos += 2;
        Ok(value)
    }

    /// Read exactly `n` bytes into an owned buffer and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let start = self.pos;
        self.check_span(start, n)?;
        let mut buf = vec![0u8; n];
        read_exact_at(self.source, start, &mut buf)?;
        self.pos += n as u64;
        Ok(buf)
    }

    fn check_span(&self, offset: u64, n: usize) -> Result<u64> {
        offset
            .checked_add(n as u64)
            .filter(|&end| end <= self.len)
            .ok_or(Error::UnexpectedEof { offset })
    }

    fn window_at(&mut self, offset: u64, n: usize) -> Result<&[u8]> {
        debug_assert!(n <= WINDOW_SIZE / 2);
        let end = self.check_span(offset, n)?;

        let cached_end = self.window_start + self.window.len() as u64;
        if offset < self.window_start || end > cached_end {
            // centre the window so backward and forward scans both hit it
            let start = offset.saturating_sub((WINDOW_SIZE / 2) as u64);
            let size = (self.len - start).min(WINDOW_SIZE as u64) as usize;
            self.window.resize(size, 0);
            read_exact_at(self.source, start, &mut self.window)?;
            self.window_start = start;
        }

        let rel = (offset - self.window_start) as usize;
        Ok(&self.window[rel..rel + n])
    }
}

fn read_exact_at<R: ReadAt + ?Sized>(source: &R, offset: u64, buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = source.read_at(offset + filled as u64, &mut buf[filled..])?;
        if n == 0 {
            return Err(Error::UnexpectedEof {
                offset: offset + filled as u64,
            });
        }
        filled += n;
    }
    Ok(())
}
