//! Connection kinds and the configuration keys derived from them.

use serde::{Deserialize, Serialize};

/// Root segment of every database configuration key.
pub const DATABASE_KEY_ROOT: &str = "db";
/// Setting segment holding the connection URI.
pub const URL_SETTING: &str = "url";
/// Separator between configuration key segments.
pub const KEY_SEPARATOR: &str = ".";

/// Database backend a connection string is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Mongo,
    /// Reserved; no data access layer exists for it yet.
    Postgres,
}

impl ConnectionType {
    /// Lowercase name used inside configuration keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Postgres => "postgres",
        }
    }

    /// Returns the `db.<name>.url` key for this connection type.
    pub fn connection_string_key(self) -> String {
        [DATABASE_KEY_ROOT, self.name(), URL_SETTING].join(KEY_SEPARATOR)
    }
}
