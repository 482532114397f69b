use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Parser;

use crate::error::{Result, ServerError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_STATIC_DIR: &str = "./dist";
const DEFAULT_ALLOWED_ORIGINS: &str = "*";

/// Command line overrides. Unset flags fall back to the environment.
#[derive(Parser, Debug, Default)]
#[command(name = "music4you-server")]
#[command(about = "Music 4 You - page and static asset server", long_about = None)]
pub struct Cli {
    /// Interface to bind [env: HOST]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on [env: PORT]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding the logo, stylesheet and wasm bundle [env: STATIC_DIR]
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// `*` or a comma-separated list of origins [env: ALLOWED_ORIGINS]
    #[arg(long)]
    pub allowed_origins: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Blank input behaves like an unset variable and allows any origin.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" {
            return Ok(Self::Any);
        }

        let origins = raw
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| match o {
                // A wildcard cannot be mixed with explicit origins
                "*" => Err(ServerError::InvalidOrigin(raw.to_string())),
                _ => HeaderValue::from_str(o).map_err(|_| ServerError::InvalidOrigin(o.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::List(origins))
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub allowed_origins: AllowedOrigins,
}

impl ServerConfig {
    pub fn from_env(cli: Cli) -> Result<Self> {
        Self::resolve(cli, |key| std::env::var(key).ok())
    }

    /// Flags win over `env`, which wins over the defaults.
    pub fn resolve(cli: Cli, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = cli
            .host
            .or_else(|| env("HOST"))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match (cli.port, env("PORT")) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw
                .trim()
                .parse()
                .map_err(|_| ServerError::Config(format!("invalid PORT: {raw:?}")))?,
            (None, None) => DEFAULT_PORT,
        };

        let static_dir = cli
            .static_dir
            .or_else(|| env("STATIC_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let allowed_origins = cli
            .allowed_origins
            .or_else(|| env("ALLOWED_ORIGINS"))
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());

        Ok(Self {
            host,
            port,
            static_dir,
            allowed_origins: AllowedOrigins::parse(&allowed_origins)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::resolve(Cli::default(), env_of(&[])).unwrap();
        assert_eq!(config.addr(), "0.0.0.0:3001");
        assert_eq!(config.static_dir, PathBuf::from("./dist"));
        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env_of(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("STATIC_DIR", "/srv/m4u"),
            ("ALLOWED_ORIGINS", "http://localhost:5173"),
        ]);
        let config = ServerConfig::resolve(Cli::default(), env).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.static_dir, PathBuf::from("/srv/m4u"));
        assert_eq!(
            config.allowed_origins,
            AllowedOrigins::List(vec![HeaderValue::from_static("http://localhost:5173")])
        );
    }

    #[test]
    fn test_flags_override_env() {
        let cli = Cli {
            host: Some("localhost".to_string()),
            port: Some(9000),
            static_dir: Some(PathBuf::from("public")),
            allowed_origins: Some("*".to_string()),
        };
        let env = env_of(&[("HOST", "127.0.0.1"), ("PORT", "not-a-port")]);
        let config = ServerConfig::resolve(cli, env).unwrap();
        assert_eq!(config.addr(), "localhost:9000");
        assert_eq!(config.static_dir, PathBuf::from("public"));
        assert_eq!(config.allowed_origins, AllowedOrigins::Any);
    }

    #[test]
    fn test_invalid_port() {
        for raw in ["abc", "70000", "-1"] {
            let err = ServerConfig::resolve(Cli::default(), env_of(&[("PORT", raw)])).unwrap_err();
            assert!(matches!(err, ServerError::Config(_)), "{raw}");
        }
    }

    #[test]
    fn test_origin_list() {
        let origins = AllowedOrigins::parse(" https://a.example , https://b.example ,").unwrap();
        assert_eq!(
            origins,
            AllowedOrigins::List(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
        assert_eq!(AllowedOrigins::parse("").unwrap(), AllowedOrigins::Any);
    }

    #[test]
    fn test_invalid_origin() {
        let err = AllowedOrigins::parse("https://ok.example,bad\norigin").unwrap_err();
        assert!(matches!(err, ServerError::InvalidOrigin(o) if o == "bad\norigin"));

        let err = AllowedOrigins::parse("https://ok.example, *").unwrap_err();
        assert!(matches!(err, ServerError::InvalidOrigin(_)));
    }
}
