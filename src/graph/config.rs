//! Graph engine connection settings
//!
//! Three required values: endpoint URI, principal, credential. All are read
//! from the process environment (`.env` files are loaded by the binary before
//! this runs). A missing or empty value is a fatal configuration error,
//! raised before any connection attempt.

use crate::error::IngestError;

pub const URI_VAR: &str = "NEO4J_URI";
pub const USER_VAR: &str = "NEO4J_USERNAME";
pub const PASSWORD_VAR: &str = "NEO4J_PASSWORD";

/// Bolt connection settings for the graph store.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl GraphConfig {
    /// Read connection settings from the process environment.
    pub fn from_env() -> Result<Self, IngestError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read connection settings through an injected lookup function.
    ///
    /// Empty values count as missing, matching the behavior of an unset
    /// variable in a `.env` file.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, IngestError> {
        let require = |variable: &'static str| {
            lookup(variable)
                .filter(|value| !value.is_empty())
                .ok_or(IngestError::Config { variable })
        };

        Ok(Self {
            uri: require(URI_VAR)?,
            user: require(USER_VAR)?,
            password: require(PASSWORD_VAR)?,
        })
    }
}
