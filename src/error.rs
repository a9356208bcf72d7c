/// Errors surfaced while resolving a module specifier.
///
/// "Not found" is never an error — `resolve` reports it as `Ok(None)`. These
/// variants cover infrastructure failures only, which propagate to the caller
/// unmodified: no retry, no suppression, no fallback-on-error.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The [`FileSystem`](crate::FileSystem) capability failed while checking
    /// a candidate path, or a manifest loader failed reading its file.
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// A manifest file existed but held malformed content.
    ///
    /// The stock [`JsonManifestLoader`](crate::JsonManifestLoader) treats
    /// unparseable manifests as absent and never produces this; a strict
    /// host-supplied loader may surface parse failures through it.
    #[error("{path}: invalid manifest: {source}")]
    Manifest {
        path: String,
        source: serde_json::Error,
    },
}

impl ResolveError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        ResolveError::Io {
            path: path.to_string_lossy().into_owned(),
            source,
        }
    }
}
