//! Runtime configuration.
//!
//! Every setting can come from a CLI flag or its environment variable
//! (`.env` is honoured by the binary). Unset values fall back to the
//! defaults below.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Args as ClapArgs;

pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Origins allowed to make cross-origin requests unless overridden.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "http://localhost:8080",
    "http://localhost:1234",
    "http://127.0.0.1:5500",
    "http://movies.com",
];

#[derive(ClapArgs, Debug, Clone)]
pub struct ServeArgs {
    /// Server port
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// JSON file to seed the catalogue from instead of the bundled data set
    #[arg(long = "seed", env = "MOVIES_SEED_PATH")]
    pub seed_path: Option<PathBuf>,

    /// Comma-separated origin allow-list. Replaces the default list.
    #[arg(long, env = "CORS_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            seed_path: None,
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid host address `{0}`")]
    InvalidHost(String),

    #[error("invalid CORS origin `{0}`")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub seed_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    pub fn is_allowed(&self, origin: &HeaderValue) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }
}

impl Config {
    pub fn from_args(args: &ServeArgs) -> Result<Self, ConfigError> {
        let host = args
            .host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(args.host.clone()))?;

        let cors = if args.allowed_origins.is_empty() {
            CorsConfig::default()
        } else {
            let allowed_origins = args
                .allowed_origins
                .iter()
                .map(|origin| origin.trim())
                .filter(|origin| !origin.is_empty())
                .map(|origin| {
                    // A wildcard would defeat the allow-list.
                    if origin == "*" {
                        return Err(ConfigError::InvalidOrigin(origin.to_string()));
                    }
                    HeaderValue::from_str(origin)
                        .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            CorsConfig { allowed_origins }
        };

        Ok(Config {
            server: ServerConfig {
                host,
                port: args.port,
            },
            cors,
            seed_path: args.seed_path.clone(),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: IpAddr::from([0, 0, 0, 0]),
                port: DEFAULT_PORT,
            },
            cors: CorsConfig::default(),
            seed_path: None,
        }
    }
}
