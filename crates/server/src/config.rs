use models::grade::Grade;
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value {value:?} for {name}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings, read from the environment (and a `.env` file if present)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// When set, every route requires a bearer token from this issuer
    pub oidc_issuer_url: Option<String>,
    pub run_migrations: bool,
    pub passing_grade: Grade,
}

impl Config {
    const DEFAULT_BIND_ADDRESS: &'static str = "0.0.0.0:3000";

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| Self::DEFAULT_BIND_ADDRESS.to_string());
        let bind_address: SocketAddr = bind_address
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDRESS",
                value: bind_address.clone(),
            })?;

        let oidc_issuer_url = lookup("OIDC_ISSUER_URL").filter(|url| !url.trim().is_empty());

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "RUN_MIGRATIONS",
                        value,
                    });
                }
            },
        };

        let passing_grade = match lookup("PASSING_GRADE") {
            None => Grade::DEFAULT_PASSING,
            Some(value) => {
                let grade = value
                    .trim()
                    .parse::<i16>()
                    .ok()
                    .and_then(|grade| Grade::new(grade).ok());
                grade.ok_or(ConfigError::Invalid {
                    name: "PASSING_GRADE",
                    value,
                })?
            }
        };

        Ok(Self {
            database_url,
            bind_address,
            oidc_issuer_url,
            run_migrations,
            passing_grade,
        })
    }
}
