use std::env;

use anyhow::{Context, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => bail!("unknown STORE_BACKEND {other:?}, expected postgres or memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    /// HMAC-SHA256 key for service-to-service tokens. `None` runs the
    /// service without the access gate.
    pub service_token_secret: Option<String>,
    pub require_token_for_reads: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = lookup("APP_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let store_backend = match lookup("STORE_BACKEND") {
            Some(raw) => StoreBackend::parse(&raw)?,
            None => StoreBackend::Postgres,
        };
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        if store_backend == StoreBackend::Postgres && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE_BACKEND is postgres");
        }

        let service_token_secret =
            lookup("SERVICE_TOKEN_SECRET").filter(|secret| !secret.is_empty());
        let require_token_for_reads = match lookup("REQUIRE_TOKEN_FOR_READS") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .with_context(|| format!("REQUIRE_TOKEN_FOR_READS must be true or false, got {raw:?}"))?,
            None => true,
        };

        Ok(Self {
            host,
            port,
            store_backend,
            database_url,
            service_token_secret,
            require_token_for_reads,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_require_database_url_for_postgres() {
        assert!(load(&[]).is_err());

        let config = load(&[("DATABASE_URL", "postgres://localhost/favorites")]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Postgres);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert!(config.service_token_secret.is_none());
        assert!(config.require_token_for_reads);
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let config = load(&[
            ("STORE_BACKEND", "memory"),
            ("APP_PORT", "8080"),
            ("SERVICE_TOKEN_SECRET", "s3cret"),
            ("REQUIRE_TOKEN_FOR_READS", "false"),
        ])
        .unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.port, 8080);
        assert_eq!(config.service_token_secret.as_deref(), Some("s3cret"));
        assert!(!config.require_token_for_reads);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(load(&[("STORE_BACKEND", "redis")]).is_err());
        assert!(load(&[("STORE_BACKEND", "memory"), ("REQUIRE_TOKEN_FOR_READS", "maybe")]).is_err());
    }
}
