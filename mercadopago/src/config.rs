//! SDK configuration.
//!
//! Configuration comes from a TOML document or from the environment:
//!
//! ```toml
//! access_token = "APP_USR-..."
//! base_url = "https://api.mercadopago.com"
//! integrator_id = "dev_123"
//!
//! [http]
//! timeout_secs = 20
//! ```

use std::{fmt, path::Path};

use serde::Deserialize;
use url::Url;

use crate::{
    error::{MpError, Result},
    transport::HttpConfig,
};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.mercadopago.com";

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "MERCADOPAGO_ACCESS_TOKEN";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "MERCADOPAGO_BASE_URL";

/// Root SDK configuration.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct MercadoPagoConfig {
    /// OAuth access token sent as `Authorization: Bearer`.
    ///
    /// May be left empty when every call passes its own token through
    /// [`crate::client::RequestOptions`].
    #[serde(default)]
    pub access_token: String,

    /// Base URL that request paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Sent as `X-Corporation-Id`.
    #[serde(default)]
    pub corporation_id: Option<String>,

    /// Sent as `X-Integrator-Id`.
    #[serde(default)]
    pub integrator_id: Option<String>,

    /// Sent as `X-Platform-Id`.
    #[serde(default)]
    pub platform_id: Option<String>,

    /// Transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for MercadoPagoConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            base_url: default_base_url(),
            corporation_id: None,
            integrator_id: None,
            platform_id: None,
            http: HttpConfig::default(),
        }
    }
}

impl fmt::Debug for MercadoPagoConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.access_token.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("MercadoPagoConfig")
            .field("access_token", &token)
            .field("base_url", &self.base_url)
            .field("corporation_id", &self.corporation_id)
            .field("integrator_id", &self.integrator_id)
            .field("platform_id", &self.platform_id)
            .field("http", &self.http)
            .finish()
    }
}

impl MercadoPagoConfig {
    /// Creates a configuration with the given access token and defaults elsewhere.
    ///
    /// # Examples
    ///
    /// ```
    /// use mercadopago::config::{DEFAULT_BASE_URL, MercadoPagoConfig};
    ///
    /// let config = MercadoPagoConfig::new("APP_USR-token");
    /// assert_eq!(config.base_url, DEFAULT_BASE_URL);
    /// assert!(!format!("{config:?}").contains("APP_USR-token"));
    /// ```
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), ..Self::default() }
    }

    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MpError::Config`] if the TOML is malformed or validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| MpError::Config(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`MpError::Config`] if the file cannot be read or is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            MpError::Config(format!("cannot read config file '{}': {e}", path.as_ref().display()))
        })?;
        Self::from_toml(&content)
    }

    /// Builds a configuration from `MERCADOPAGO_ACCESS_TOKEN` and the optional
    /// `MERCADOPAGO_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`MpError::Config`] if the token is missing or validation fails.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let access_token = lookup(ACCESS_TOKEN_ENV)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| MpError::Config(format!("{ACCESS_TOKEN_ENV} is not set")))?;

        let mut config = Self::new(access_token);
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks that the base URL parses and uses HTTPS, and that the transport
    /// timeouts are in range. An empty access token is accepted here and rejected
    /// when a request is sent without a per-call token.
    ///
    /// # Errors
    ///
    /// Returns [`MpError::Config`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            MpError::Config(format!("invalid base_url '{}': {e}", self.base_url))
        })?;

        if url.scheme() != "https" {
            return Err(MpError::Config(format!(
                "base_url must use HTTPS, got: {}",
                url.scheme()
            )));
        }

        for (name, value) in [
            ("corporation_id", &self.corporation_id),
            ("integrator_id", &self.integrator_id),
            ("platform_id", &self.platform_id),
        ] {
            if let Some(value) = value
                && value.contains(['\r', '\n', '\0'])
            {
                return Err(MpError::Config(format!("{name} contains control characters")));
            }
        }

        self.http.validate()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}
