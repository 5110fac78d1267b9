//! Resource namespaces configuration can be read from.
//!
//! # Invariants
//! - Paths are namespace-relative; a leading `/` is accepted and ignored.
//! - `.` segments and repeated separators resolve the same in every source.
//! - Paths that are empty or contain `..` never reach the backing store.

use super::{ConfigError, ConfigResult};
use std::io;
use std::path::{Component, Path, PathBuf};

/// A namespace of named text resources.
pub trait ResourceSource {
    /// Loads the resource at a normalized namespace path.
    ///
    /// Returns `Ok(None)` when no resource exists at `path`.
    fn load(&self, path: &str) -> io::Result<Option<String>>;
}

/// Resources compiled into the binary, typically with `include_str!`.
///
/// ```
/// use fulcrum_core::{ConfigReader, EmbeddedResources};
///
/// static RESOURCES: &[(&str, &str)] = &[("conf/app.properties", "db.mongo.url=mongodb://localhost")];
///
/// let reader = ConfigReader::new(EmbeddedResources::new(RESOURCES));
/// let config = reader.read("/conf/app.properties").unwrap();
/// assert_eq!(config.get("db.mongo.url"), Some("mongodb://localhost"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedResources {
    entries: &'static [(&'static str, &'static str)],
}

impl EmbeddedResources {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }
}

impl ResourceSource for EmbeddedResources {
    fn load(&self, path: &str) -> io::Result<Option<String>> {
        Ok(self
            .entries
            .iter()
            .find(|(name, _)| {
                normalize_resource_path(name).is_ok_and(|normalized| normalized == path)
            })
            .map(|(_, contents)| (*contents).to_string()))
    }
}

/// Resources stored beneath a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceSource for DirectoryResources {
    fn load(&self, path: &str) -> io::Result<Option<String>> {
        let full_path = self.root.join(path);
        match std::fs::read_to_string(&full_path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Normalizes a caller path into a `/`-separated namespace path.
///
/// `.` segments and repeated separators are dropped, so every source sees the
/// same key for equivalent spellings.
pub(crate) fn normalize_resource_path(path: &str) -> ConfigResult<String> {
    let invalid = || ConfigError::InvalidPath {
        path: path.to_string(),
    };

    let mut segments = Vec::new();
    for component in Path::new(path.trim()).components() {
        match component {
            Component::Normal(segment) => {
                segments.push(segment.to_str().ok_or_else(invalid)?);
            }
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir | Component::Prefix(_) => return Err(invalid()),
        }
    }
    if segments.is_empty() {
        return Err(invalid());
    }

    Ok(segments.join("/"))
}
