use std::net::SocketAddr;

pub const DEFAULT_LOG_FILTER: &str = "health_orio=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to load Leptos configuration: {0}")]
    Config(String),
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Process settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub log_filter: String,
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("RUST_LOG").ok(), std::env::var("PRODUCTION").ok())
    }

    fn from_vars(log_filter: Option<String>, production: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            production: production.is_some(),
        }
    }

    pub fn init_tracing(&self) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(&self.log_filter))
            .with(tracing_subscriber::fmt::layer().with_ansi(!self.production))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_environment() {
        let config = ServerConfig::from_vars(None, None);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.production);
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        let config = ServerConfig::from_vars(Some("  ".into()), Some(String::new()));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(config.production);
    }

    #[test]
    fn explicit_filter_is_kept() {
        let config = ServerConfig::from_vars(Some("debug".into()), None);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn bind_error_names_the_address() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().expect("address");
        let err = ServerError::Bind {
            addr,
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert!(err.to_string().contains("127.0.0.1:3000"));
    }
}
