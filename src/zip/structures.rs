/// Central Directory File Header signature (`PK\x01\x02`)
pub const CD_START: u32 = 0x02014b50;

/// End of Central Directory Record signature (`PK\x05\x06`)
pub const CD_END: u32 = 0x06054b50;

/// Size of a record signature in bytes
pub const SIGNATURE_SIZE: u64 = 4;

/// End of Central Directory Record - 22 bytes without comment
pub struct EndOfCentralDirectory;

impl EndOfCentralDirectory {
    pub const SIZE: u64 = 22;
    /// Offset of the central directory start field, relative to the signature
    pub const CD_OFFSET_FIELD: u64 = 16;
}

/// Central Directory File Header - 46 bytes before the variable fields
pub struct CentralDirectoryHeader;

impl CentralDirectoryHeader {
    pub const MIN_SIZE: u64 = 46;
    /// Offset of the file name length field, followed by the extra field
    /// length and the file comment length
    pub const NAME_LENGTH_FIELD: u64 = 28;
    /// Offset of the file name, relative to the signature
    pub const FILE_NAME: u64 = 46;
}

/// The record kinds the central directory walk cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    CentralDirectoryHeader,
    EndOfCentralDirectory,
}

impl Signature {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            CD_START => Some(Signature::CentralDirectoryHeader),
            CD_END => Some(Signature::EndOfCentralDirectory),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> u32 {
        match self {
            Signature::CentralDirectoryHeader => CD_START,
            Signature::EndOfCentralDirectory => CD_END,
        }
    }
}

/// Variable-length sizes declared in a Central Directory File Header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredLengths {
    pub file_name: u16,
    pub extra_field: u16,
    pub file_comment: u16,
}

impl DeclaredLengths {
    /// Bytes between the end of the file name and the next record
    pub fn trailing(&self) -> u64 {
        self.extra_field as u64 + self.file_comment as u64
    }
}
