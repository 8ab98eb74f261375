use super::models::Config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.items.iter().any(|item| item.message.contains(needle))
    }
}

/// Conditions that still leave a usable configuration but deserve a log line.
pub fn collect_warnings(config: &Config) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();

    if config.metadata.config_path.is_none() {
        warnings.push_with_hint(
            "No ethiens.toml detected; using environment variables and defaults",
            "Create ethiens.toml or set ETHIENS_CONFIG_PATH",
        );
    }

    if !config.providers.tmdb.is_configured() {
        warnings.push_with_hint(
            "TMDB_API_KEY is not set; every lookup goes to the IMDb mirror",
            "Set TMDB_API_KEY to enable TMDB as the primary provider",
        );
    }

    if config.cors.is_wildcard_included() {
        warnings.push("CORS allows any origin ('*' in allowed origins)");
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ConfigMetadata, CorsConfig, ServerConfig};
    use ethiens_core::{ApiKey, ResolverSettings};
    use std::path::PathBuf;

    fn config() -> Config {
        let mut providers = ResolverSettings::default();
        providers.tmdb.api_key = ApiKey::new("key");
        Config {
            server: ServerConfig::default(),
            providers,
            cors: CorsConfig::default(),
            metadata: ConfigMetadata {
                config_path: Some(PathBuf::from("ethiens.toml")),
                env_file_loaded: false,
            },
        }
    }

    #[test]
    fn complete_config_has_no_warnings() {
        assert!(collect_warnings(&config()).is_empty());
    }

    #[test]
    fn missing_key_and_file_are_warnings() {
        let mut config = config();
        config.providers.tmdb.api_key = None;
        config.metadata.config_path = None;

        let warnings = collect_warnings(&config);
        assert_eq!(warnings.items.len(), 2);
        assert!(warnings.contains("TMDB_API_KEY"));
        assert!(warnings.contains("ethiens.toml"));
    }

    #[test]
    fn wildcard_origin_is_flagged() {
        let mut config = config();
        config.cors.allowed_origins = vec!["*".into()];
        assert!(collect_warnings(&config).contains("any origin"));
    }
}
