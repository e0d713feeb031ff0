//! Program service configuration.

use common::{process_env, CaoConfig, ConfigError};

pub const HOST_VAR: &str = "PROGRAM_SERVICE_HOST";
pub const PORT_VAR: &str = "PROGRAM_SERVICE_PORT";

/// Default server host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_PORT: u16 = 50053;

/// Program service configuration.
#[derive(Debug, Clone)]
pub struct ProgramServiceConfig {
    /// Database and queen settings shared with the rest of Cao-lo
    pub cao: CaoConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl ProgramServiceConfig {
    /// Load configuration from `.env` and the process environment.
    ///
    /// Fails when `CAO_QUEEN_TAG` is missing.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(&process_env)
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            cao: CaoConfig::from_lookup(lookup)?,
            host: lookup(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup(PORT_VAR)
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_settings_default() {
        let config = ProgramServiceConfig::from_lookup(&|key: &str| {
            (key == common::QUEEN_TAG_VAR).then(|| "drone".to_string())
        })
        .unwrap();

        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.cao.queen.tag, "drone");
    }

    #[test]
    fn missing_queen_tag_aborts_service_config() {
        let result = ProgramServiceConfig::from_lookup(&|key: &str| {
            (key == PORT_VAR).then(|| "6000".to_string())
        });

        assert!(matches!(result, Err(ConfigError::MissingVar(_))));
    }
}
