use std::fs;
use std::io::Read as _;
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;

/// Gzip stream magic.
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Read a file, gunzipping it when it carries the gzip magic.
///
/// Serialized records exported from gateway databases are normally
/// gzip-wrapped BLOBs; sniffing the magic means the same command works
/// on wrapped and bare streams alike.
pub fn read_stream(path: &Path) -> Result<Vec<u8>> {
    let bytes = fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;

    if bytes.starts_with(&GZIP_MAGIC) {
        let mut decoder = GzDecoder::new(bytes.as_slice());
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .with_context(|| format!("cannot gunzip {}", path.display()))?;
        return Ok(decompressed);
    }

    Ok(bytes)
}

/// Read a file without gzip sniffing.
pub fn read_raw(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("cannot read {}", path.display()))
}
