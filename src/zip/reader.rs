use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ReaderConfig;
use crate::error::{Error, Result};
use crate::io::{LocalFileReader, ReadAt};

use super::parser::CentralDirectoryParser;

/// Lists the entry names of a ZIP archive on disk.
///
/// Bind an archive with [`set_input`](Self::set_input), then call
/// [`get_entries`](Self::get_entries) as often as needed.
pub struct ZipReader {
    config: ReaderConfig,
    archive: Option<BoundArchive>,
}

struct BoundArchive {
    path: PathBuf,
    parser: CentralDirectoryParser<LocalFileReader>,
}

impl Default for ZipReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipReader {
    pub fn new() -> Self {
        Self::with_config(ReaderConfig::default())
    }

    pub fn with_config(config: ReaderConfig) -> Self {
        Self {
            config,
            archive: None,
        }
    }

    /// Bind the archive at `path`, replacing any archive bound before.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] if the extension is missing or wrong, and
    /// [`Error::OpenFailed`] if the file cannot be opened. A previously bound
    /// archive stays bound when this fails.
    pub fn set_input(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.config.validate_path(path)?;

        let file = LocalFileReader::new(path).map_err(|source| Error::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), size = file.size(), "bound archive");

        self.archive = Some(BoundArchive {
            path: path.to_path_buf(),
            parser: CentralDirectoryParser::new(file).with_name_length(self.config.name_length),
        });
        Ok(())
    }

    /// Path of the bound archive, if any.
    pub fn input(&self) -> Option<&Path> {
        self.archive.as_ref().map(|archive| archive.path.as_path())
    }

    /// List the entry names of the bound archive in central directory order.
    pub fn get_entries(&self) -> Result<Vec<String>> {
        self.parser()?.list_names()
    }

    /// Like [`get_entries`](Self::get_entries), without decoding the names.
    pub fn get_raw_entries(&self) -> Result<Vec<Vec<u8>>> {
        self.parser()?.list_raw_names()
    }

    fn parser(&self) -> Result<&CentralDirectoryParser<LocalFileReader>> {
        self.archive
            .as_ref()
            .map(|archive| &archive.parser)
            .ok_or(Error::NotInitialized)
    }
}
