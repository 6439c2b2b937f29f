//! Configuration for reading and writing save files.

/// How node trees are laid out in `MessagePack`.
///
/// Both layouts decode the same way; the choice only affects what is written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Encoding {
    /// Variant and field names are written out.
    #[default]
    Named,
    /// Positional layout, smaller on disk.
    Compact,
}

/// Settings for the save layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveConfig {
    /// Layout used when writing.
    pub encoding: Encoding,

    /// Files larger than this many bytes are refused before decoding.
    pub max_file_size: u64,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            encoding: Encoding::Named,
            max_file_size: 16 * 1024 * 1024,
        }
    }
}

impl SaveConfig {
    /// Creates a configuration that writes the compact layout.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            encoding: Encoding::Compact,
            ..Self::default()
        }
    }

    /// Creates a configuration for saves from untrusted sources.
    ///
    /// A save holding a few hundred chambers stays well under the limit.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            encoding: Encoding::Named,
            max_file_size: 1024 * 1024,
        }
    }

    /// Builder method to set the encoding.
    #[must_use]
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Builder method to set the file size limit.
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }
}
