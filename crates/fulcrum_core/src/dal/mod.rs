//! Data access layer over MongoDB.
//!
//! # Responsibility
//! - Hold one process-wide database client, created lazily from configuration.
//! - Forward find/insert/update calls to the driver and translate the results.
//!
//! # Invariants
//! - At most one client is ever constructed per process.
//! - A failed initialization leaves no instance behind, so callers may retry.
//! - Filter, projection, sort and update documents are forwarded unchanged.
//! - `find` never returns an empty list; zero matches is [`DalError::NoResultFound`].

mod connection;
mod mongo;
mod store;

pub use connection::{ConnectionType, DATABASE_KEY_ROOT, KEY_SEPARATOR, URL_SETTING};
pub use mongo::{FindOutcome, MongoDal};
pub use store::{DocumentStore, FindQuery, MongoStore, UpdateSummary};

use crate::config::ConfigError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type DalResult<T> = Result<T, DalError>;

/// Data access error.
#[derive(Debug)]
pub enum DalError {
    /// The connection string could not be resolved from configuration.
    ConfigurationResolution(ConfigError),
    /// The driver rejected the connection string or failed to build a client.
    ClientConstruction(mongodb::error::Error),
    /// A find query matched zero documents.
    NoResultFound,
    /// The driver failed to run a query, insert or update.
    Driver(mongodb::error::Error),
    /// A call rejected before reaching the driver.
    DataAccess(String),
}

impl DalError {
    /// Returns whether this error only reports an empty result.
    pub fn is_no_result(&self) -> bool {
        matches!(self, Self::NoResultFound)
    }
}

impl Display for DalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigurationResolution(err) => {
                write!(f, "failed to resolve database configuration: {err}")
            }
            Self::ClientConstruction(err) => {
                write!(f, "failed to construct database client: {err}")
            }
            Self::NoResultFound => write!(f, "the query returned no results"),
            Self::Driver(err) => write!(f, "{err}"),
            Self::DataAccess(message) => write!(f, "{message}"),
        }
    }
}

impl Error for DalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ConfigurationResolution(err) => Some(err),
            Self::ClientConstruction(err) | Self::Driver(err) => Some(err),
            Self::NoResultFound | Self::DataAccess(_) => None,
        }
    }
}

impl From<ConfigError> for DalError {
    fn from(value: ConfigError) -> Self {
        Self::ConfigurationResolution(value)
    }
}

impl From<mongodb::error::Error> for DalError {
    fn from(value: mongodb::error::Error) -> Self {
        Self::Driver(value)
    }
}
