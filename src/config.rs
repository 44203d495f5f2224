use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub pages_path: PathBuf,
    pub static_path: PathBuf,
    pub listen_port: u16,
    pub listen_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pages_path = lookup("GOWIKI_PAGES_PATH")
            .unwrap_or_else(|| "./pages".to_string())
            .into();

        let static_path = lookup("GOWIKI_STATIC_PATH")
            .unwrap_or_else(|| ".".to_string())
            .into();

        let listen_port = lookup("GOWIKI_LISTEN_PORT")
            .unwrap_or_else(|| "8888".to_string())
            .parse::<u16>()
            .context("GOWIKI_LISTEN_PORT must be a valid port number (0-65535)")?;

        let listen_host = lookup("GOWIKI_LISTEN_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            pages_path,
            static_path,
            listen_port,
            listen_host,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.listen_host, self.listen_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Pages directory: {}", self.pages_path.display());
        tracing::info!("  Static assets root: {}", self.static_path.display());
        tracing::info!("  Service listening on: {}", self.listen_addr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = config_from(&[
            ("GOWIKI_PAGES_PATH", "/srv/wiki/pages"),
            ("GOWIKI_STATIC_PATH", "/srv/wiki"),
            ("GOWIKI_LISTEN_PORT", "8080"),
            ("GOWIKI_LISTEN_HOST", "127.0.0.1"),
        ])
        .unwrap();

        assert_eq!(config.pages_path, PathBuf::from("/srv/wiki/pages"));
        assert_eq!(config.static_path, PathBuf::from("/srv/wiki"));
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.listen_host, "127.0.0.1");
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_config_with_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.pages_path, PathBuf::from("./pages"));
        assert_eq!(config.static_path, PathBuf::from("."));
        assert_eq!(config.listen_port, 8888);
        assert_eq!(config.listen_host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[("GOWIKI_LISTEN_PORT", "not-a-number")]);
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("GOWIKI_LISTEN_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let result = config_from(&[("GOWIKI_LISTEN_PORT", "99999")]);
        assert!(result.is_err());
    }
}
