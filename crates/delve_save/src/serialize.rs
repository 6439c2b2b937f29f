//! Node tree serialization using `MessagePack`.
//!
//! Entities never touch bytes directly: they are dumped to a [`Node`] and the
//! node tree is what gets encoded. Loading decodes the tree first and then
//! hands it to [`Storable::load`], so a malformed save fails with the same
//! error it would give in memory.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use delve_foundation::{Error, Node, Result};
use delve_storable::Storable;
use log::{debug, warn};

use crate::config::{Encoding, SaveConfig};

/// Serializes a node tree to `MessagePack` bytes.
///
/// # Errors
///
/// Returns a serialization error if encoding fails.
pub fn to_bytes(node: &Node, config: &SaveConfig) -> Result<Vec<u8>> {
    let encoded = match config.encoding {
        Encoding::Named => rmp_serde::to_vec_named(node),
        Encoding::Compact => rmp_serde::to_vec(node),
    };
    encoded.map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a node tree from `MessagePack` bytes.
///
/// Either encoding is accepted.
///
/// # Errors
///
/// Returns a serialization error if the bytes are not a node tree.
pub fn from_bytes(bytes: &[u8]) -> Result<Node> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Saves a node tree to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(node: &Node, path: P, config: &SaveConfig) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(node, config)
        .map_err(|err| err.within(format!("saving '{}'", path.display())))?;

    let file = File::create(path).map_err(|e| {
        Error::io(format!("failed to create file '{}': {e}", path.display()))
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| {
        Error::io(format!("failed to write to file '{}': {e}", path.display()))
    })?;
    writer.flush().map_err(|e| {
        Error::io(format!("failed to flush file '{}': {e}", path.display()))
    })?;

    debug!("saved {} bytes to '{}'", bytes.len(), path.display());
    Ok(())
}

/// Loads a node tree from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is larger than
/// `config.max_file_size`, or does not decode.
pub fn load_from_file<P: AsRef<Path>>(path: P, config: &SaveConfig) -> Result<Node> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::io(format!("failed to open file '{}': {e}", path.display()))
    })?;

    let size = file
        .metadata()
        .map_err(|e| Error::io(format!("failed to inspect file '{}': {e}", path.display())))?
        .len();
    if size > config.max_file_size {
        warn!(
            "refusing '{}': {size} bytes exceeds the {} byte limit",
            path.display(),
            config.max_file_size
        );
        return Err(Error::io(format!(
            "file '{}' is {size} bytes, larger than the {} byte limit",
            path.display(),
            config.max_file_size
        )));
    }

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::io(format!("failed to read file '{}': {e}", path.display()))
    })?;

    debug!("read {} bytes from '{}'", bytes.len(), path.display());
    from_bytes(&bytes).map_err(|err| {
        warn!("'{}' is not a node tree", path.display());
        err.within(format!("loading '{}'", path.display()))
    })
}

/// Dumps an entity and saves it to a file.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_entity<T: Storable, P: AsRef<Path>>(
    entity: &T,
    path: P,
    config: &SaveConfig,
) -> Result<()> {
    debug!("saving {}", T::NAME);
    save_to_file(&entity.dump(), path, config)
}

/// Loads a node tree from a file and builds an entity from it.
///
/// # Errors
///
/// Returns the file or decoding error, or the entity's own loading error
/// unchanged.
pub fn load_entity<T: Storable, P: AsRef<Path>>(path: P, config: &SaveConfig) -> Result<T> {
    let node = load_from_file(path, config)?;
    T::load(&node)
}
