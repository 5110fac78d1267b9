//! Key/value configuration loaded from properties resources.
//!
//! # Responsibility
//! - Resolve resource paths inside a resource namespace, never the raw filesystem.
//! - Parse `.properties` text into an immutable string-keyed mapping.
//!
//! # Invariants
//! - A failed read never yields a partially populated [`Configuration`].
//! - Every failure surfaces as a single [`ConfigError`] type.

mod properties;
mod reader;
mod resources;

pub use properties::parse_properties;
pub use reader::ConfigReader;
pub use resources::{DirectoryResources, EmbeddedResources, ResourceSource};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading and lookup error.
#[derive(Debug)]
pub enum ConfigError {
    /// No resource exists at the requested path.
    NotFound { path: String },
    /// The path is empty or escapes the resource namespace.
    InvalidPath { path: String },
    /// The resource exists but could not be read.
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The resource content is not valid properties text.
    Parse {
        path: String,
        line: usize,
        message: String,
    },
    /// A required key is absent from a loaded configuration.
    MissingKey { key: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "configuration file not found - {path}"),
            Self::InvalidPath { path } => {
                write!(f, "invalid configuration resource path `{path}`")
            }
            Self::Io { path, source } => {
                write!(f, "failed to read configuration from {path}: {source}")
            }
            Self::Parse {
                path,
                line,
                message,
            } => write!(f, "malformed configuration in {path} at line {line}: {message}"),
            Self::MissingKey { key } => write!(f, "missing configuration key `{key}`"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::NotFound { .. }
            | Self::InvalidPath { .. }
            | Self::Parse { .. }
            | Self::MissingKey { .. } => None,
        }
    }
}

/// Flat, immutable string-keyed configuration.
///
/// Iteration order is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    entries: BTreeMap<String, String>,
}

impl Configuration {
    pub(crate) fn from_entries(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the value for `key`, or [`ConfigError::MissingKey`].
    pub fn require(&self, key: &str) -> ConfigResult<&str> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey {
            key: key.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Configuration
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
