use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::ResolveError;
use crate::fs::FileSystem;

/// Parsed entry-point fields of a `package.json`-style manifest.
///
/// Only the three entry-point declarations matter to resolution; every other
/// field is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    pub types: Option<String>,
    pub module: Option<String>,
    pub main: Option<String>,
}

impl PackageManifest {
    /// Select the declared entry point: `types` first, else `module`, else
    /// `main`, else none. The priority is fixed.
    pub fn entry_point(&self) -> Option<&str> {
        if let Some(types) = &self.types {
            return Some(types);
        }
        if let Some(module) = &self.module {
            return Some(module);
        }
        if let Some(main) = &self.main {
            return Some(main);
        }
        None
    }
}

/// Collaborator that loads a directory's manifest file.
///
/// `Ok(None)` means the manifest is absent — never an error. The stock
/// [`JsonManifestLoader`] also answers `Ok(None)` for unparseable content;
/// a strict loader may instead surface malformed content through
/// [`ResolveError::Manifest`], which the resolver propagates unmodified.
pub trait ManifestLoader: Send + Sync {
    fn load(
        &self,
        manifest_path: &Path,
        fs: &dyn FileSystem,
    ) -> Result<Option<PackageManifest>, ResolveError>;
}

/// Stock [`ManifestLoader`]: probes absence through the supplied
/// [`FileSystem`] capability, then reads and parses the file as JSON.
///
/// A manifest that exists but fails to parse is treated as absent, with a
/// single warning logged.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonManifestLoader;

impl ManifestLoader for JsonManifestLoader {
    fn load(
        &self,
        manifest_path: &Path,
        fs: &dyn FileSystem,
    ) -> Result<Option<PackageManifest>, ResolveError> {
        if !fs
            .exists(manifest_path)
            .map_err(|e| ResolveError::io(manifest_path, e))?
        {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(manifest_path) {
            Ok(c) => c,
            // The file vanished between the existence probe and the read.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ResolveError::io(manifest_path, e)),
        };

        match serde_json::from_str(&content) {
            Ok(manifest) => Ok(Some(manifest)),
            Err(e) => {
                log::warn!("failed to parse {}: {e}", manifest_path.display());
                Ok(None)
            }
        }
    }
}
