use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{GatewayError, Result};

/// Remote gateway environments, in the capitalization the remote expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Sandbox,
    Qa,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Sandbox => "Sandbox",
            Self::Qa => "Qa",
            Self::Production => "Production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "sandbox" => Ok(Self::Sandbox),
            "qa" => Ok(Self::Qa),
            "production" => Ok(Self::Production),
            _ => Err(GatewayError::UnknownEnvironment(s.to_string())),
        }
    }
}

/// Credentials and environment for one remote gateway account.
///
/// All four fields are required; construction fails before any operation can
/// be issued against an incomplete config. The private key stays wrapped in
/// a [`SecretString`] so it cannot leak through `Debug` output or logs.
#[derive(Clone)]
pub struct GatewayConfig {
    environment: Environment,
    merchant_id: String,
    public_key: String,
    private_key: SecretString,
}

impl GatewayConfig {
    /// Validates the configuration record eagerly.
    ///
    /// The environment name is matched case-insensitively and normalized to
    /// the remote's expected capitalization.
    pub fn new(
        environment: &str,
        merchant_id: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
    ) -> Result<Self> {
        let merchant_id = merchant_id.into();
        let public_key = public_key.into();
        let private_key = private_key.into();

        if environment.is_empty() {
            return Err(GatewayError::MissingConfig("environment"));
        }
        if merchant_id.is_empty() {
            return Err(GatewayError::MissingConfig("merchant id"));
        }
        if public_key.is_empty() {
            return Err(GatewayError::MissingConfig("public key"));
        }
        if private_key.is_empty() {
            return Err(GatewayError::MissingConfig("private key"));
        }

        Ok(Self {
            environment: environment.parse()?,
            merchant_id,
            public_key,
            private_key: SecretString::new(private_key),
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Exposes the private key for client implementations that authenticate
    /// against the remote gateway.
    pub fn private_key(&self) -> &str {
        self.private_key.expose_secret()
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("environment", &self.environment)
            .field("merchant_id", &self.merchant_id)
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
