mod rules;

pub use rules::{BundleBox, BusinessRules, PropertyTypeRules};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub rules: RulesConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let rules_path = env::var("APP_BUSINESS_RULES")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            rules: RulesConfig { path: rules_path },
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

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where the business rules come from.
#[derive(Debug, Clone, Default)]
pub struct RulesConfig {
    pub path: Option<PathBuf>,
}

impl RulesConfig {
    /// Reads and validates the configured rules file, falling back to the reference rules.
    pub fn load(&self) -> Result<BusinessRules, ConfigError> {
        match &self.path {
            Some(path) => BusinessRules::from_path(path),
            None => Ok(BusinessRules::reference()),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    RulesRead {
        path: PathBuf,
        source: std::io::Error,
    },
    RulesParse {
        source: serde_yaml::Error,
    },
    UnorderedRange {
        section: &'static str,
        field: &'static str,
        range: String,
    },
    NegativeParkingMinimum {
        property_type: &'static str,
        value: i64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::RulesRead { path, .. } => {
                write!(f, "unable to read business rules from {}", path.display())
            }
            ConfigError::RulesParse { source } => {
                write!(f, "business rules are not valid YAML: {source}")
            }
            ConfigError::UnorderedRange {
                section,
                field,
                range,
            } => write!(
                f,
                "{section}.{field} range {range} has a lower bound above its upper bound"
            ),
            ConfigError::NegativeParkingMinimum {
                property_type,
                value,
            } => write!(
                f,
                "{property_type}.min_parking_spots must not be negative (found {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::RulesRead { source, .. } => Some(source),
            ConfigError::RulesParse { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::UnorderedRange { .. }
            | ConfigError::NegativeParkingMinimum { .. } => None,
        }
    }
}
