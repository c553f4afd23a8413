//! `.mse-set` packaging
//!
//! The layout tool opens a zip container holding the set document under a
//! fixed entry name. Entries are stored uncompressed.

use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;

/// Internal name of the set document inside the archive.
pub const SET_ENTRY_NAME: &str = "set";

/// Pack the rendered set document into an `.mse-set` zip at `dest`.
///
/// The writer is finished explicitly so the archive directory lands on
/// disk before this returns.
pub fn write_set_archive<P: AsRef<Path>>(dest: P, document: &str) -> Result<()> {
    let file = File::create(dest.as_ref())?;
    let mut archive = ZipWriter::new(file);

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    archive.start_file(SET_ENTRY_NAME, options)?;
    archive.write_all(document.as_bytes())?;
    archive.finish()?;

    tracing::info!("Wrote set archive: {:?}", dest.as_ref());
    Ok(())
}
