//! Properties reader over a resource namespace.

use super::properties::parse_properties;
use super::resources::{normalize_resource_path, DirectoryResources, ResourceSource};
use super::{ConfigError, ConfigResult, Configuration};
use crate::logging::FulcrumLogger;

static LOGGER: FulcrumLogger = FulcrumLogger::new(module_path!());

/// Reads [`Configuration`] from `.properties` resources.
pub struct ConfigReader<S: ResourceSource> {
    source: S,
}

impl ConfigReader<DirectoryResources> {
    /// Creates a reader resolving paths beneath `root`.
    pub fn from_dir(root: impl Into<std::path::PathBuf>) -> Self {
        Self::new(DirectoryResources::new(root))
    }
}

impl<S: ResourceSource> ConfigReader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Reads configuration properties from a namespace path.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidPath`] when `path` is empty or leaves the namespace.
    /// - [`ConfigError::NotFound`] when no resource exists at `path`.
    /// - [`ConfigError::Io`] when the resource cannot be read.
    /// - [`ConfigError::Parse`] when the content is malformed.
    pub fn read(&self, path: &str) -> ConfigResult<Configuration> {
        LOGGER.trace(format_args!(
            "event=config_read module=config status=start path={path}"
        ));

        let result = self.read_resource(path);
        match &result {
            Ok(config) => LOGGER.debug(format_args!(
                "event=config_read module=config status=ok path={path} keys={}",
                config.len()
            )),
            Err(err) => LOGGER.error(format_args!(
                "event=config_read module=config status=error path={path} error={err}"
            )),
        }
        result
    }

    fn read_resource(&self, path: &str) -> ConfigResult<Configuration> {
        let normalized = normalize_resource_path(path)?;
        let text = self
            .source
            .load(&normalized)
            .map_err(|source| ConfigError::Io {
                path: path.to_string(),
                source,
            })?
            .ok_or_else(|| ConfigError::NotFound {
                path: path.to_string(),
            })?;
        parse_properties(path, &text)
    }
}
