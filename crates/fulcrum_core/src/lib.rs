//! Fulcrum core: configuration, logging and MongoDB data access.
//! Callers read a [`Configuration`], hand it to [`MongoDal::get_instance`],
//! and issue find/insert/update calls against the shared client.

pub mod config;
pub mod dal;
pub mod logging;

pub use config::{
    parse_properties, ConfigError, ConfigReader, ConfigResult, Configuration,
    DirectoryResources, EmbeddedResources, ResourceSource,
};
pub use dal::{
    ConnectionType, DalError, DalResult, DocumentStore, FindOutcome, FindQuery, MongoDal,
    MongoStore, UpdateSummary,
};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, install as install_logging,
    logging_status, FulcrumLogger, LogSettings,
};

/// Re-exported document type used for filters, projections and results.
pub use mongodb::bson::{doc, Document};
