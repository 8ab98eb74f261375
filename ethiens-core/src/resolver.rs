use std::fmt;
use std::sync::Arc;

use ethiens_model::{MovieDetail, MovieSearchResult};
use tracing::{debug, info, warn};

use crate::error::{ClientBuildError, ResolutionError};
use crate::providers::{
    ImdbMirrorClient, MetadataProvider, ResolverSettings, TmdbClient,
};

/// Resolves movie metadata against the primary provider, falling back to
/// the secondary provider once when the primary is absent or fails.
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Clone)]
pub struct MovieMetadataResolver {
    primary: Option<Arc<dyn MetadataProvider>>,
    fallback: Arc<dyn MetadataProvider>,
}

impl fmt::Debug for MovieMetadataResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MovieMetadataResolver")
            .field("primary", &self.primary.as_ref().map(|p| p.kind()))
            .field("fallback", &self.fallback.kind())
            .finish()
    }
}

impl MovieMetadataResolver {
    /// Builds both HTTP clients. Without an API key the primary provider is
    /// never constructed and every call goes straight to the fallback.
    pub fn new(settings: &ResolverSettings) -> Result<Self, ClientBuildError> {
        let primary = match settings.tmdb.api_key.clone() {
            Some(api_key) => {
                let client = TmdbClient::new(api_key, &settings.tmdb)?;
                Some(Arc::new(client) as Arc<dyn MetadataProvider>)
            }
            None => {
                info!("TMDB API key not configured; IMDb mirror only");
                None
            }
        };
        let fallback = Arc::new(ImdbMirrorClient::new(&settings.fallback)?);

        Ok(Self::with_providers(primary, fallback))
    }

    pub fn with_providers(
        primary: Option<Arc<dyn MetadataProvider>>,
        fallback: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self { primary, fallback }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    /// Only non-empty, all-digit identifiers are valid TMDB ids.
    pub fn is_primary_identifier(identifier: &str) -> bool {
        !identifier.is_empty()
            && identifier.bytes().all(|byte| byte.is_ascii_digit())
    }

    /// A primary answer is final even when it holds zero results; only a
    /// primary failure consults the fallback.
    pub async fn resolve_search(
        &self,
        query: &str,
    ) -> Result<Vec<MovieSearchResult>, ResolutionError> {
        if let Some(primary) = &self.primary {
            match primary.search(query).await {
                Ok(results) => {
                    debug!(
                        provider = %primary.kind(),
                        count = results.len(),
                        "search resolved"
                    );
                    return Ok(results);
                }
                Err(failure) => warn!(
                    provider = %failure.provider,
                    cause = %failure.cause,
                    query,
                    "primary search failed, falling back"
                ),
            }
        }

        let results = self
            .fallback
            .search(query)
            .await
            .map_err(ResolutionError::NoResults)?;
        debug!(
            provider = %self.fallback.kind(),
            count = results.len(),
            "search resolved"
        );
        Ok(results)
    }

    /// The fallback is queried with the unchanged identifier, even when it
    /// was a numeric TMDB id the mirror cannot know about.
    pub async fn resolve_detail(
        &self,
        identifier: &str,
    ) -> Result<MovieDetail, ResolutionError> {
        let primary = self
            .primary
            .as_ref()
            .filter(|_| Self::is_primary_identifier(identifier));

        if let Some(primary) = primary {
            match primary.detail(identifier).await {
                Ok(detail) => {
                    debug!(provider = %primary.kind(), identifier, "detail resolved");
                    return Ok(detail);
                }
                Err(failure) => warn!(
                    provider = %failure.provider,
                    cause = %failure.cause,
                    identifier,
                    "primary detail lookup failed, falling back"
                ),
            }
        }

        let detail = self
            .fallback
            .detail(identifier)
            .await
            .map_err(ResolutionError::Upstream)?;
        debug!(provider = %self.fallback.kind(), identifier, "detail resolved");
        Ok(detail)
    }
}
