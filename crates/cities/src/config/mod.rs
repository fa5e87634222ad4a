use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Version reported outside production when `CITIES_VERSION` is unset.
pub const DEV_VERSION: &str = "dev mode";

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub version: String,
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let is_prod = env::var("CITIES_ISPROD")
            .map(|value| value.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let environment = if is_prod {
            AppEnvironment::Production
        } else {
            AppEnvironment::from_str(
                &env::var("CITIES_ENV").unwrap_or_else(|_| "development".to_string()),
            )
        };

        let version = match env::var("CITIES_VERSION") {
            Ok(version) if !version.trim().is_empty() => version,
            _ if environment == AppEnvironment::Production => {
                return Err(ConfigError::MissingVersion)
            }
            _ => DEV_VERSION.to_string(),
        };

        let host = env::var("CITIES_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("CITIES_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let seed_path = env::var_os("CITIES_CATALOG")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let log_level = env::var("CITIES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            version,
            server: ServerConfig { host, port },
            catalog: CatalogConfig { seed_path },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Where the catalog is seeded from. `None` means the built-in list.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub seed_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingVersion,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "CITIES_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "CITIES_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingVersion => {
                write!(f, "CITIES_VERSION must be set in production")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::MissingVersion => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
