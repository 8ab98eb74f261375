use std::fmt;

use async_trait::async_trait;
use ethiens_model::{MovieDetail, MovieSearchResult};

use crate::error::ProviderFailure;

pub type ProviderResult<T> = Result<T, ProviderFailure>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// The Movie Database, keyed by numeric ids. Requires an API key.
    Tmdb,
    /// Unauthenticated IMDb mirror, keyed by `tt…` ids.
    ImdbMirror,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tmdb => "tmdb",
            Self::ImdbMirror => "imdb-mirror",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A movie metadata source.
///
/// Implementations surface either a normalized record or a
/// [`ProviderFailure`]; they never panic on sparse upstream data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Search movies by free-text title
    async fn search(&self, query: &str) -> ProviderResult<Vec<MovieSearchResult>>;

    /// Fetch full metadata for a provider-specific identifier
    async fn detail(&self, id: &str) -> ProviderResult<MovieDetail>;

    /// Which upstream this provider talks to
    fn kind(&self) -> ProviderKind;
}
