//! Connection options.
//!
//! Options are handed to the external connector by [`Surreal::connect`](crate::Surreal::connect).
//! They can be built in code or loaded from a TOML file:
//!
//! ```toml
//! url = "ws://localhost:8000"
//! namespace = "app"
//! database = "main"
//! websocket = true
//!
//! [auth]
//! username = "root"
//! password = "root"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use surql_core::error::SurqlError;
use surql_types::Strategy;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("url is required")]
    MissingUrl,
    #[error("failed to read {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl From<ConfigError> for SurqlError {
    fn from(err: ConfigError) -> Self {
        SurqlError::Config(err.to_string())
    }
}

/// Sign-in credentials
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    /// Scope the sign-in to a namespace instead of root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            namespace: None,
            database: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOptions {
    #[serde(default)]
    pub url: String,
    #[serde(default, alias = "ns", skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, alias = "db", skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Credentials>,
    /// Absent or `true` selects WebSocket, `false` selects HTTP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub websocket: Option<bool>,
}

impl ConnectionOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    pub fn auth(mut self, credentials: Credentials) -> Self {
        self.auth = Some(credentials);
        self
    }

    pub fn websocket(mut self, websocket: bool) -> Self {
        self.websocket = Some(websocket);
        self
    }

    pub fn strategy(&self) -> Strategy {
        match self.websocket {
            Some(false) => Strategy::Http,
            _ => Strategy::WebSocket,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        Ok(())
    }

    /// Parse and validate options from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let options: Self = toml::from_str(s)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.into(), e))?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_from_flag() {
        assert_eq!(ConnectionOptions::new("ws://db").strategy(), Strategy::WebSocket);
        assert_eq!(
            ConnectionOptions::new("ws://db").websocket(true).strategy(),
            Strategy::WebSocket
        );
        assert_eq!(
            ConnectionOptions::new("http://db").websocket(false).strategy(),
            Strategy::Http
        );
    }

    #[test]
    fn parse_toml() {
        let options = ConnectionOptions::from_toml_str(
            r#"
            url = "http://localhost:8000"
            ns = "app"
            db = "main"
            websocket = false

            [auth]
            username = "root"
            password = "secret"
            "#,
        )
        .unwrap();
        assert_eq!(options.namespace.as_deref(), Some("app"));
        assert_eq!(options.database.as_deref(), Some("main"));
        assert_eq!(options.auth, Some(Credentials::new("root", "secret")));
        assert_eq!(options.strategy(), Strategy::Http);
    }

    #[test]
    fn url_is_required() {
        assert!(matches!(
            ConnectionOptions::from_toml_str(r#"namespace = "app""#),
            Err(ConfigError::MissingUrl)
        ));
        assert!(matches!(
            ConnectionOptions::from_toml_str("url = "),
            Err(ConfigError::Parse(_))
        ));
        let err: SurqlError = ConfigError::MissingUrl.into();
        assert_eq!(err.to_string(), "Configuration error: url is required");
    }
}
