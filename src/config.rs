use std::env;
use anyhow::{Context, Result, bail};

/// Which repository implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Spanner,
    Memory,
}

/// Connection settings for the Spanner backend
#[derive(Debug, Clone, PartialEq)]
pub struct SpannerConfig {
    pub emulator_host: Option<String>,
    pub project: String,
    pub instance: String,
    pub database: String,
}

impl SpannerConfig {
    pub fn database_path(&self) -> String {
        format!(
            "projects/{}/instances/{}/databases/{}",
            self.project, self.instance, self.database
        )
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    /// Present only when `store_backend` is `Spanner`
    pub spanner: Option<SpannerConfig>,
    pub service_port: u16,
    pub service_host: String,
    pub serve_api_docs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = match var("STORE_BACKEND").as_deref() {
            None | Some("spanner") => StoreBackend::Spanner,
            Some("memory") => StoreBackend::Memory,
            Some(other) => bail!(
                "STORE_BACKEND must be one of: spanner, memory, got '{}'",
                other
            ),
        };

        let spanner = match store_backend {
            StoreBackend::Spanner => Some(SpannerConfig {
                emulator_host: var("SPANNER_EMULATOR_HOST"),
                project: var("SPANNER_PROJECT")
                    .context("SPANNER_PROJECT environment variable is required")?,
                instance: var("SPANNER_INSTANCE")
                    .context("SPANNER_INSTANCE environment variable is required")?,
                database: var("SPANNER_DATABASE")
                    .context("SPANNER_DATABASE environment variable is required")?,
            }),
            StoreBackend::Memory => None,
        };

        let service_port = var("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = var("SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let serve_api_docs = var("SERVE_API_DOCS")
            .unwrap_or_else(|| "false".to_string())
            .parse::<bool>()
            .context("SERVE_API_DOCS must be 'true' or 'false'")?;

        Ok(Config {
            store_backend,
            spanner,
            service_port,
            service_host,
            serve_api_docs,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Store backend: {:?}", self.store_backend);
        if let Some(spanner) = &self.spanner {
            tracing::info!("  Spanner emulator: {}",
                spanner.emulator_host.as_deref().unwrap_or("disabled (using production)"));
            tracing::info!("  Spanner database: {}", spanner.database_path());
        }
        tracing::info!("  API docs: {}", if self.serve_api_docs { "enabled" } else { "disabled" });
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
