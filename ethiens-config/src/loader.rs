use once_cell::sync::Lazy;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::debug;
use url::Url;

use ethiens_core::{ApiKey, FallbackSettings, ResolverSettings, TmdbSettings};

use super::{
    error::ConfigLoadError,
    models::{
        Config, ConfigMetadata, CorsConfig, DEFAULT_HOST, DEFAULT_PORT,
        ServerConfig,
    },
    sources::{EnvConfig, FileConfig},
    validation::{self, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("ethiens.toml"),
        PathBuf::from("config/ethiens.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Applies `.env` to the process environment, then composes the
    /// configuration from it. Variables already set are not overwritten.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = self.load_env_file()?;
        self.load_from_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Composes the configuration from an already gathered environment layer.
    pub fn load_from_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let config = compose_config(
            file_config.unwrap_or_default(),
            env,
            ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        )?;
        let warnings = validation::collect_warnings(&config);

        Ok(ConfigLoad { config, warnings })
    }

    fn load_env_file(&self) -> Result<bool, ConfigLoadError> {
        let loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true),
            None => dotenvy::dotenv().map(|_| true),
        };
        match loaded {
            Ok(loaded) => Ok(loaded),
            Err(dotenvy::Error::Io(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // An explicitly requested file must exist; default locations are
        // used only when present.
        let path = match (&self.options.config_path, &env.config_path) {
            (Some(explicit), _) | (None, Some(explicit)) => {
                if !explicit.exists() {
                    return Err(ConfigLoadError::MissingConfig {
                        path: explicit.clone(),
                    });
                }
                explicit.clone()
            }
            (None, None) => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .find(|candidate| candidate.exists())
            {
                Some(found) => found.clone(),
                None => return Ok((None, None)),
            },
        };

        let file_config = read_file_config(&path)?;
        debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    metadata: ConfigMetadata,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        server: file_server,
        tmdb: file_tmdb,
        imdb: file_imdb,
        cors: file_cors,
    } = file;

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let tmdb_defaults = TmdbSettings::default();
    let tmdb = TmdbSettings {
        api_key: env.tmdb_api_key.or(file_tmdb.api_key).and_then(ApiKey::new),
        language: env
            .tmdb_language
            .or(file_tmdb.language)
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty())
            .unwrap_or(tmdb_defaults.language),
        base_url: layered_url(
            ("TMDB_BASE_URL", env.tmdb_base_url),
            ("tmdb.base_url", file_tmdb.base_url),
            tmdb_defaults.base_url,
        )?,
        timeout: layered_timeout(
            ("TMDB_TIMEOUT", env.tmdb_timeout),
            ("tmdb.timeout", file_tmdb.timeout),
            tmdb_defaults.timeout,
        )?,
    };

    let fallback_defaults = FallbackSettings::default();
    let fallback = FallbackSettings {
        base_url: layered_url(
            ("IMDB_BASE_URL", env.imdb_base_url),
            ("imdb.base_url", file_imdb.base_url),
            fallback_defaults.base_url,
        )?,
        timeout: layered_timeout(
            ("IMDB_TIMEOUT", env.imdb_timeout),
            ("imdb.timeout", file_imdb.timeout),
            fallback_defaults.timeout,
        )?,
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_default(),
    };

    Ok(Config {
        server,
        providers: ResolverSettings { tmdb, fallback },
        cors,
        metadata,
    })
}

type Layer = (&'static str, Option<String>);

/// First layer that carries a value, with the key it came from.
fn pick(env: Layer, file: Layer) -> Option<(&'static str, String)> {
    let (env_key, env_value) = env;
    let (file_key, file_value) = file;
    env_value
        .map(|value| (env_key, value))
        .or_else(|| file_value.map(|value| (file_key, value)))
}

fn layered_url(
    env: Layer,
    file: Layer,
    default: Url,
) -> Result<Url, ConfigLoadError> {
    let Some((key, raw)) = pick(env, file) else {
        return Ok(default);
    };
    let value = raw.trim().to_string();
    let url = Url::parse(&value).map_err(|source| ConfigLoadError::InvalidUrl {
        key,
        value: value.clone(),
        source,
    })?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigLoadError::UnsupportedUrl { key, value });
    }
    Ok(url)
}

fn layered_timeout(
    env: Layer,
    file: Layer,
    default: Duration,
) -> Result<Duration, ConfigLoadError> {
    let Some((key, raw)) = pick(env, file) else {
        return Ok(default);
    };
    let value = raw.trim();
    let timeout = humantime::parse_duration(value).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            key,
            value: value.to_string(),
            source,
        }
    })?;
    if timeout.is_zero() {
        return Err(ConfigLoadError::ZeroTimeout { key });
    }
    Ok(timeout)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(file: FileConfig, env: EnvConfig) -> Config {
        compose_config(file, env, ConfigMetadata::default()).unwrap()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = compose(FileConfig::default(), EnvConfig::default());

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(!config.providers.tmdb.is_configured());
        assert_eq!(config.providers.tmdb.language, "fr-FR");
        assert_eq!(config.providers.tmdb.timeout, Duration::from_secs(5));
        assert_eq!(config.providers.fallback.timeout, Duration::from_secs(10));
        assert_eq!(
            config.providers.fallback.base_url.as_str(),
            "https://imdb.iamidiotareyoutoo.com/"
        );
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn environment_overrides_file() {
        let mut file = FileConfig::default();
        file.server.port = Some(8080);
        file.tmdb.api_key = Some("from-file".into());
        file.tmdb.timeout = Some("2s".into());

        let env = EnvConfig {
            server_port: Some(9090),
            tmdb_api_key: Some("from-env".into()),
            ..EnvConfig::default()
        };

        let config = compose(file, env);
        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.providers.tmdb.api_key.as_ref().map(ApiKey::expose),
            Some("from-env")
        );
        assert_eq!(config.providers.tmdb.timeout, Duration::from_secs(2));
    }

    #[test]
    fn humantime_durations_are_accepted() {
        let env = EnvConfig {
            tmdb_timeout: Some("750ms".into()),
            imdb_timeout: Some("1m 30s".into()),
            ..EnvConfig::default()
        };
        let config = compose(FileConfig::default(), env);
        assert_eq!(config.providers.tmdb.timeout, Duration::from_millis(750));
        assert_eq!(config.providers.fallback.timeout, Duration::from_secs(90));
    }

    #[test]
    fn invalid_duration_names_its_source() {
        let mut file = FileConfig::default();
        file.imdb.timeout = Some("soon".into());

        let err = compose_config(file, EnvConfig::default(), ConfigMetadata::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::InvalidDuration { key: "imdb.timeout", .. }
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let env = EnvConfig {
            tmdb_timeout: Some("0s".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(FileConfig::default(), env, ConfigMetadata::default())
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::ZeroTimeout { key: "TMDB_TIMEOUT" }));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let env = EnvConfig {
            imdb_base_url: Some("ftp://mirror.example".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(FileConfig::default(), env, ConfigMetadata::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigLoadError::UnsupportedUrl { key: "IMDB_BASE_URL", .. }
        ));

        let env = EnvConfig {
            tmdb_base_url: Some("not a url".into()),
            ..EnvConfig::default()
        };
        let err = compose_config(FileConfig::default(), env, ConfigMetadata::default())
            .unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidUrl { .. }));
    }

    #[test]
    fn blank_file_api_key_disables_primary() {
        let mut file = FileConfig::default();
        file.tmdb.api_key = Some("  ".into());
        assert!(!compose(file, EnvConfig::default()).providers.tmdb.is_configured());
    }
}
