use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::fs::FileSystem;
use crate::manifest::{JsonManifestLoader, ManifestLoader};

/// Extensions tried, in order, when none is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".ts", ".tsx", ".d.ts"];

/// Manifest file looked up by convention inside a candidate directory.
const MANIFEST_FILE: &str = "package.json";

/// Behaviour toggles for [`Resolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolverFlags {
    /// Check a specifier that already ends in a configured extension as a
    /// literal path before any extension search. Off by default.
    pub verify_module_extension: bool,
}

/// Configuration consumed once by [`Resolver::new`].
pub struct ResolverConfig {
    /// Absolute root for unaliased bare-specifier resolution and for
    /// anchoring alias target patterns.
    pub base_url: PathBuf,

    /// Alias mapping: prefix pattern to target-directory patterns, both of
    /// which may end in a trailing `*`. Declaration order is the tie-break
    /// priority, so this is an ordered list rather than a map.
    pub paths: Vec<(String, Vec<String>)>,

    /// Extensions tried, in order, during extension search. List order is
    /// the sole determinant of extension-match priority.
    pub extensions: Vec<String>,

    pub flags: ResolverFlags,

    /// Existence-check capability; the resolver's only I/O primitive.
    pub file_system: Box<dyn FileSystem>,
}

impl ResolverConfig {
    /// Configuration with no aliases, the default extension list, and
    /// default flags.
    pub fn new(base_url: impl Into<PathBuf>, file_system: Box<dyn FileSystem>) -> Self {
        ResolverConfig {
            base_url: base_url.into(),
            paths: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            flags: ResolverFlags::default(),
            file_system,
        }
    }
}

/// One alias-table entry: literal prefix (wildcard stripped) and the
/// absolute candidate directories derived from its target patterns.
struct PathAlias {
    prefix: String,
    targets: Vec<PathBuf>,
}

/// Resolves module import specifiers to concrete file paths, statically.
///
/// Built once from an immutable [`ResolverConfig`]; every method takes
/// `&self` and no per-call state is kept, so one instance may be shared and
/// called concurrently.
///
/// A specifier starting with `./` or `../` is resolved against its
/// importer's directory. Anything else is matched against the alias table
/// in declaration order, falling back to the base url. Either way the
/// candidate path runs through the same lookup pipeline: extension search,
/// then a `package.json` entry point (`types` > `module` > `main`, trusted
/// as declared), then an `index` file.
///
/// Alias prefixes are matched as raw string prefixes, not path segments:
/// a prefix `@app` also matches the specifier `@application/x`. This
/// mirrors the behaviour of tsconfig-style path mappings as consumed here
/// and is intentional; align prefixes on a trailing separator to avoid it.
pub struct Resolver {
    base_url: PathBuf,
    aliases: Vec<PathAlias>,
    extensions: Vec<String>,
    flags: ResolverFlags,
    fs: Box<dyn FileSystem>,
    loader: Box<dyn ManifestLoader>,
}

impl Resolver {
    /// Build a resolver using the stock [`JsonManifestLoader`].
    pub fn new(config: ResolverConfig) -> Self {
        Self::with_manifest_loader(config, Box::new(JsonManifestLoader))
    }

    /// Build a resolver with a host-supplied manifest loader.
    ///
    /// The alias table is derived here, once: each mapping key loses one
    /// trailing `*`, and each target pattern (also minus its trailing `*`)
    /// is joined onto the base url. Declaration order is preserved exactly.
    pub fn with_manifest_loader(
        config: ResolverConfig,
        loader: Box<dyn ManifestLoader>,
    ) -> Self {
        let mut aliases = Vec::with_capacity(config.paths.len());
        for (pattern, targets) in &config.paths {
            let prefix = pattern.strip_suffix('*').unwrap_or(pattern).to_string();
            let targets = targets
                .iter()
                .map(|t| join_fragment(&config.base_url, t.strip_suffix('*').unwrap_or(t)))
                .collect();
            aliases.push(PathAlias { prefix, targets });
        }

        Resolver {
            base_url: config.base_url,
            aliases,
            extensions: config.extensions,
            flags: config.flags,
            fs: config.file_system,
            loader,
        }
    }

    /// Resolve `specifier` to a file path on disk.
    ///
    /// Returns `Ok(None)` when nothing matches — including for a relative
    /// specifier with no `importer` to anchor it. Failures raised by the
    /// file-system capability or the manifest loader propagate as `Err`.
    pub fn resolve(
        &self,
        specifier: &str,
        importer: Option<&Path>,
    ) -> Result<Option<PathBuf>, ResolveError> {
        if is_relative(specifier) {
            let Some(importer) = importer else {
                return Ok(None);
            };
            let Some(parent) = importer.parent() else {
                return Ok(None);
            };
            return self.resolve_lookups(&join_fragment(parent, specifier));
        }

        self.resolve_absolute(specifier)
    }

    /// Bare/absolute dispatch: alias table first, base url second.
    fn resolve_absolute(&self, specifier: &str) -> Result<Option<PathBuf>, ResolveError> {
        for alias in &self.aliases {
            // Raw prefix test, no segment awareness.
            let Some(rest) = specifier.strip_prefix(alias.prefix.as_str()) else {
                continue;
            };
            for target in &alias.targets {
                let module = join_fragment(target, rest);
                if let Some(found) = self.resolve_lookups(&module)? {
                    return Ok(Some(found));
                }
            }
        }

        self.resolve_lookups(&join_fragment(&self.base_url, specifier))
    }

    /// Shared lookup pipeline, strict order, first success wins:
    /// extensions on the path itself, then a manifest entry point, then
    /// extensions on `<path>/index`.
    fn resolve_lookups(&self, module: &Path) -> Result<Option<PathBuf>, ResolveError> {
        if let Some(found) = self.verify_extensions(module)? {
            return Ok(Some(found));
        }

        let manifest_path = module.join(MANIFEST_FILE);
        if let Some(manifest) = self.loader.load(&manifest_path, self.fs.as_ref())? {
            if let Some(entry) = manifest.entry_point() {
                // The manifest's declaration is trusted; existence of the
                // entry file is deliberately not verified.
                return Ok(Some(join_fragment(module, entry)));
            }
        }

        self.verify_extensions(&module.join("index"))
    }

    /// Try the configured extensions against `module`, in list order.
    ///
    /// With `verify_module_extension` set, a path already ending in a
    /// configured extension is first checked literally and returned
    /// unmodified if it exists.
    fn verify_extensions(&self, module: &Path) -> Result<Option<PathBuf>, ResolveError> {
        if self.flags.verify_module_extension
            && self.has_configured_extension(module)
            && self.exists(module)?
        {
            return Ok(Some(module.to_path_buf()));
        }

        for ext in &self.extensions {
            let candidate = append_extension(module, ext);
            if self.exists(&candidate)? {
                return Ok(Some(candidate));
            }
        }

        Ok(None)
    }

    fn has_configured_extension(&self, module: &Path) -> bool {
        let text = module.to_string_lossy();
        self.extensions.iter().any(|ext| text.ends_with(ext.as_str()))
    }

    fn exists(&self, path: &Path) -> Result<bool, ResolveError> {
        self.fs.exists(path).map_err(|e| ResolveError::io(path, e))
    }
}

fn is_relative(specifier: &str) -> bool {
    specifier.starts_with("./") || specifier.starts_with("../")
}

/// Append an extension to a path by string concatenation.
///
/// `Path::with_extension` would truncate at the last dot and mangle
/// multi-dot extensions like `.d.ts`; plain concatenation matches how the
/// candidates are actually spelled.
fn append_extension(module: &Path, ext: &str) -> PathBuf {
    let mut s = OsString::from(module.as_os_str());
    s.push(ext);
    PathBuf::from(s)
}

/// Join a `/`-separated specifier fragment onto a base path, resolving `.`
/// and `..` segments against it. A leading separator in the fragment does
/// not reset to the filesystem root; the fragment is always appended.
fn join_fragment(base: &Path, fragment: &str) -> PathBuf {
    let mut out = base.to_path_buf();
    for part in fragment.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                out.pop();
            }
            part => out.push(part),
        }
    }
    out
}
