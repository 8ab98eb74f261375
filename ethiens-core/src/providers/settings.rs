use std::fmt;
use std::time::Duration;

use url::Url;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_LANGUAGE: &str = "fr-FR";
pub const DEFAULT_TMDB_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_IMDB_BASE_URL: &str = "https://imdb.iamidiotareyoutoo.com";
/// The mirror is slower and only ever used as a last resort.
pub const DEFAULT_IMDB_TIMEOUT: Duration = Duration::from_secs(10);

/// TMDB v3 API key. Redacted from `Debug` output and wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(<{} chars>)", self.0.len())
    }
}

fn builtin_url(raw: &'static str) -> Url {
    Url::parse(raw).expect("built-in provider URL is valid")
}

/// Primary provider settings.
#[derive(Debug, Clone)]
pub struct TmdbSettings {
    /// `None` disables the primary provider entirely.
    pub api_key: Option<ApiKey>,
    pub base_url: Url,
    pub language: String,
    pub timeout: Duration,
}

impl Default for TmdbSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: builtin_url(DEFAULT_TMDB_BASE_URL),
            language: DEFAULT_TMDB_LANGUAGE.to_string(),
            timeout: DEFAULT_TMDB_TIMEOUT,
        }
    }
}

impl TmdbSettings {
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Fallback provider settings.
#[derive(Debug, Clone)]
pub struct FallbackSettings {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for FallbackSettings {
    fn default() -> Self {
        Self {
            base_url: builtin_url(DEFAULT_IMDB_BASE_URL),
            timeout: DEFAULT_IMDB_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ResolverSettings {
    pub tmdb: TmdbSettings,
    pub fallback: FallbackSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_not_configured() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("   \n").is_none());
        assert_eq!(ApiKey::new(" abc ").unwrap().expose(), "abc");
    }

    #[test]
    fn api_key_is_redacted_in_debug_output() {
        let key = ApiKey::new("super-secret").unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn defaults_use_asymmetric_timeouts() {
        let settings = ResolverSettings::default();
        assert!(!settings.tmdb.is_configured());
        assert_eq!(settings.tmdb.timeout, Duration::from_secs(5));
        assert_eq!(settings.fallback.timeout, Duration::from_secs(10));
        assert_eq!(settings.tmdb.language, "fr-FR");
    }
}
