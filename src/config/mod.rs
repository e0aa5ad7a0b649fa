//! Runtime configuration read from the environment (and `.env` via `dotenv`).

use crate::errors::StartupError;
use std::env;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(StartupError::MissingVar("DATABASE_URL"))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(0) => {
                    return Err(StartupError::InvalidVar {
                        key: "DATABASE_MAX_CONNECTIONS",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(value) => value,
                Err(err) => {
                    return Err(StartupError::InvalidVar {
                        key: "DATABASE_MAX_CONNECTIONS",
                        reason: err.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Config {
            database_url,
            bind_address,
            database_max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/civichero")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/civichero");
        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup(&[("BIND_ADDRESS", "0.0.0.0:8000")])).unwrap_err();
        assert!(matches!(err, StartupError::MissingVar("DATABASE_URL")));

        let err = Config::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap_err();
        assert!(matches!(err, StartupError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn overrides_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/civichero"),
            ("BIND_ADDRESS", "0.0.0.0:8000"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.database_max_connections, 12);
    }

    #[test]
    fn invalid_pool_size_is_rejected() {
        for raw in ["0", "-1", "many"] {
            let err = Config::from_lookup(lookup(&[
                ("DATABASE_URL", "postgres://db/civichero"),
                ("DATABASE_MAX_CONNECTIONS", raw),
            ]))
            .unwrap_err();
            assert!(matches!(
                err,
                StartupError::InvalidVar { key: "DATABASE_MAX_CONNECTIONS", .. }
            ));
        }
    }
}
