use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    /// Parse `LOG_FORMAT`-style values; unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config used when no file is present: defaults overridden by
    /// `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS` and `LOG_FORMAT`.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        if let Some(w) = std::env::var("TOKIO_WORKER_THREADS").ok().and_then(|v| v.parse::<usize>().ok()) {
            cfg.server.worker_threads = Some(w);
        }
        if let Some(f) = std::env::var("LOG_FORMAT").ok().as_deref().and_then(LogFormat::parse) {
            cfg.logging.format = f;
        }
        cfg
    }

    /// Config from `CONFIG_PATH` (or `config.toml`); see [`AppConfig::load_or_env_from`].
    pub fn load_or_env() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_or_env_from(&path)
    }

    /// File config if the file exists, otherwise the environment fallback.
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        match load_from_file(path) {
            Ok(mut cfg) => {
                cfg.normalize_and_validate()
                    .map_err(|e| anyhow!("invalid config {}: {}", path, e))?;
                Ok(cfg)
            }
            Err(e) if is_missing_file(&e) => {
                let mut cfg = Self::from_env();
                // env values can still carry a blank host or zero workers
                if cfg.normalize_and_validate().is_err() {
                    cfg.server = ServerConfig::default();
                }
                Ok(cfg)
            }
            Err(e) => Err(anyhow!("cannot load config {}: {}", path, e)),
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000
            worker_threads = 2

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn normalize_fills_host_and_workers() {
        let mut cfg = parse(
            r#"
            [server]
            host = "  "
            port = 8081
            worker_threads = 0
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut cfg = parse("[server]\nhost = \"localhost\"\nport = 0\n").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("posts_cfg_{}_{}.toml", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_env() {
        let path = std::env::temp_dir().join(format!("posts_cfg_{}_absent.toml", std::process::id()));
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap()).unwrap();
        assert!(cfg.server.worker_threads.is_some());
    }

    #[test]
    fn existing_file_with_zero_port_is_an_error() {
        let path = write_temp("zero_port", "[server]\nhost = \"127.0.0.1\"\nport = 0\n");
        let res = AppConfig::load_or_env_from(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        let err = res.unwrap_err().to_string();
        assert!(err.contains("invalid config"), "{err}");
    }

    #[test]
    fn existing_file_with_bad_toml_is_an_error() {
        let path = write_temp("bad_toml", "[server\nport = ");
        let res = AppConfig::load_or_env_from(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        assert!(res.unwrap_err().to_string().contains("cannot load config"));
    }

    #[test]
    fn existing_valid_file_is_used() {
        let path = write_temp("valid", "[server]\nhost = \"0.0.0.0\"\nport = 9000\n");
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        let cfg = cfg.unwrap();
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn unknown_log_format_is_a_parse_error() {
        assert!(parse("[logging]\nformat = \"xml\"\n").is_err());
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), None);
    }
}
