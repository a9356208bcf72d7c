use std::io;
use std::path::Path;

/// File-existence capability supplied to the resolver at construction.
///
/// This is the resolver's sole I/O primitive: every candidate path produced
/// by the lookup pipeline is checked through it. The contract is strictly
/// "boolean answer or propagated failure" — distinguishing "file absent"
/// from "error while checking" is the implementation's responsibility, and
/// the resolver never conflates the two.
pub trait FileSystem: Send + Sync {
    /// Returns whether `path` names an existing regular file.
    fn exists(&self, path: &Path) -> io::Result<bool>;
}

/// Stock [`FileSystem`] backed by the operating system.
///
/// Directories answer `false`: a directory is never itself a resolvable
/// module file. `NotFound` maps to `Ok(false)`; any other I/O failure
/// (e.g. a permission error) surfaces as `Err`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match std::fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
