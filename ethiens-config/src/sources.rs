use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw configuration as defined in a TOML file.
///
/// ```toml
/// [server]
/// port = 8080
///
/// [tmdb]
/// api_key = "..."
/// timeout = "5s"
///
/// [imdb]
/// timeout = "10s"
/// ```
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    #[serde(default)]
    pub imdb: FileImdbConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Humantime duration, e.g. `"5s"` or `"750ms"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileImdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
}

/// Environment-derived configuration values. Blank variables count as unset.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_language: Option<String>,
    pub tmdb_base_url: Option<String>,
    pub tmdb_timeout: Option<String>,
    pub imdb_base_url: Option<String>,
    pub imdb_timeout: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the environment layer from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var =
            |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Self {
            server_host: var("SERVER_HOST"),
            server_port: var("SERVER_PORT").and_then(|s| s.trim().parse().ok()),
            tmdb_api_key: var("TMDB_API_KEY"),
            tmdb_language: var("TMDB_LANG"),
            tmdb_base_url: var("TMDB_BASE_URL"),
            tmdb_timeout: var("TMDB_TIMEOUT"),
            imdb_base_url: var("IMDB_BASE_URL"),
            imdb_timeout: var("IMDB_TIMEOUT"),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|raw| split_csv(&raw)),
            config_path: var("ETHIENS_CONFIG_PATH").map(PathBuf::from),
        }
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn blank_variables_are_unset() {
        let env = env(&[("TMDB_API_KEY", "   "), ("SERVER_HOST", "")]);
        assert!(env.tmdb_api_key.is_none());
        assert!(env.server_host.is_none());
    }

    #[test]
    fn unparseable_port_is_ignored() {
        assert!(env(&[("SERVER_PORT", "http")]).server_port.is_none());
        assert_eq!(env(&[("SERVER_PORT", " 8080 ")]).server_port, Some(8080));
    }

    #[test]
    fn cors_origins_are_comma_separated() {
        let env = env(&[(
            "CORS_ALLOWED_ORIGINS",
            "https://ethiens.fr, ,http://localhost:5173",
        )]);
        assert_eq!(
            env.cors_allowed_origins.unwrap(),
            ["https://ethiens.fr", "http://localhost:5173"]
        );
    }

    #[test]
    fn file_sections_are_optional() {
        let file: FileConfig = toml::from_str("[tmdb]\nlanguage = \"en-US\"\n").unwrap();
        assert_eq!(file.tmdb.language.as_deref(), Some("en-US"));
        assert!(file.server.port.is_none());
        assert!(file.cors.allowed_origins.is_none());
    }
}
