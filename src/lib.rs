//! `tsresolve` — Static TypeScript-style module path resolution.
//!
//! Maps an import specifier (relative or bare/aliased) to a concrete file
//! path on disk without loading or executing the module, for consumption by
//! build tools, transpilers, and static analyzers.
//!
//! A [`Resolver`] is built once from an immutable [`ResolverConfig`] and
//! then invoked independently per specifier. Relative specifiers resolve
//! against the importing file; bare specifiers go through tsconfig-style
//! path aliases first, then the base url. Every candidate runs the same
//! lookup pipeline: extension search in configured order, `package.json`
//! entry-point fields (`types` > `module` > `main`), and an `index` file
//! fallback.
//!
//! All I/O goes through the [`FileSystem`] capability supplied at
//! construction; manifests are read by a pluggable [`ManifestLoader`].
//! Ancestor-directory (`node_modules`) walking is not implemented.
//!
//! ```no_run
//! use tsresolve::{OsFileSystem, Resolver, ResolverConfig};
//!
//! let mut config = ResolverConfig::new("/proj", Box::new(OsFileSystem));
//! config.paths = vec![("@app/*".to_string(), vec!["src/app/*".to_string()])];
//! let resolver = Resolver::new(config);
//!
//! let _found = resolver.resolve("@app/utils", None)?;
//! # Ok::<(), tsresolve::ResolveError>(())
//! ```

mod error;
mod fs;
mod manifest;
mod resolver;

pub use error::ResolveError;
pub use fs::{FileSystem, OsFileSystem};
pub use manifest::{JsonManifestLoader, ManifestLoader, PackageManifest};
pub use resolver::{Resolver, ResolverConfig, ResolverFlags, DEFAULT_EXTENSIONS};
