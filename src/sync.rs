//! Version file synchronization.

use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Result of synchronizing a version file against a fetched version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Contents of the file before the rewrite
    pub previous: String,
    /// Whether the fetched version differs from the previous contents
    pub changed: bool,
}

/// Rewrites `path` so its contents are exactly `latest`, returning the
/// previous contents and whether they differed.
///
/// The file must already exist. The write happens even when the value is
/// unchanged, and the file is truncated to the new length so no bytes of a
/// longer previous value remain. Contents are compared byte for byte with no
/// trailing-newline normalization.
pub fn write_version_file(path: &Path, latest: &str) -> std::io::Result<SyncOutcome> {
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;

    let mut previous = String::new();
    file.read_to_string(&mut previous)?;

    file.seek(SeekFrom::Start(0))?;
    file.write_all(latest.as_bytes())?;
    file.set_len(latest.len() as u64)?;

    Ok(SyncOutcome {
        changed: previous != latest,
        previous,
    })
}
