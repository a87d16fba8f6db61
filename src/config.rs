//! Reader configuration.

use std::path::Path;

use crate::error::{Error, Result};

/// Extension every bound archive must carry unless configured otherwise.
pub const ZIP_EXTENSION: &str = "zip";

/// How the path extension is compared against [`ReaderConfig::extension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionMatch {
    /// Byte-for-byte, so `ARCHIVE.ZIP` is rejected.
    #[default]
    Exact,
    IgnoreAsciiCase,
}

impl ExtensionMatch {
    pub fn matches(&self, actual: &str, expected: &str) -> bool {
        match self {
            ExtensionMatch::Exact => actual == expected,
            ExtensionMatch::IgnoreAsciiCase => actual.eq_ignore_ascii_case(expected),
        }
    }
}

/// How the extent of each central directory file name is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameLength {
    /// Scan forward from the name for the next record signature.
    ///
    /// Only correct for archives whose headers carry no extra field and no
    /// file comment. A name that itself contains a record signature is cut
    /// short at that signature without any error, and if the signature is
    /// the EOCDR one the walk stops there, dropping every later entry. Use
    /// [`NameLength::Declared`] for such archives.
    #[default]
    Scan,
    /// Trust the name, extra field and comment lengths stored in each header.
    Declared,
}

/// Options for [`ZipReader`](crate::ZipReader).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    pub extension: String,
    pub extension_match: ExtensionMatch,
    pub name_length: NameLength,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            extension: ZIP_EXTENSION.to_string(),
            extension_match: ExtensionMatch::default(),
            name_length: NameLength::default(),
        }
    }
}

impl ReaderConfig {
    pub fn with_extension_match(mut self, extension_match: ExtensionMatch) -> Self {
        self.extension_match = extension_match;
        self
    }

    pub fn with_name_length(mut self, name_length: NameLength) -> Self {
        self.name_length = name_length;
        self
    }

    /// Check that `path` ends in the configured archive extension.
    pub fn validate_path(&self, path: &Path) -> Result<()> {
        let Some(extension) = path.extension() else {
            return Err(Error::InvalidInput {
                path: path.to_path_buf(),
                reason: "file extension not found".to_string(),
            });
        };

        let matches = extension
            .to_str()
            .is_some_and(|ext| self.extension_match.matches(ext, &self.extension));
        if !matches {
            return Err(Error::InvalidInput {
                path: path.to_path_buf(),
                reason: format!("file is not in .{} format", self.extension),
            });
        }

        Ok(())
    }
}
