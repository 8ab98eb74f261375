use std::fmt;

use async_trait::async_trait;
use ethiens_model::{MovieDetail, MovieSearchResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::decode::nullable;
use super::http::{build_client, endpoint, get_json};
use super::settings::{ApiKey, TmdbSettings};
use super::traits::{MetadataProvider, ProviderKind, ProviderResult};
use crate::error::ClientBuildError;
use crate::normalize;

/// `GET /search/movie` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSearchPage {
    #[serde(default, deserialize_with = "nullable")]
    pub results: Vec<TmdbSearchItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbSearchItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// `GET /movie/{id}?append_to_response=credits` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Relative to the TMDB image base.
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub production_countries: Vec<TmdbNamed>,
    #[serde(default, deserialize_with = "nullable")]
    pub production_companies: Vec<TmdbNamed>,
    #[serde(default, deserialize_with = "nullable")]
    pub credits: TmdbCredits,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbNamed {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    #[serde(default, deserialize_with = "nullable")]
    pub cast: Vec<TmdbNamed>,
}

#[derive(Serialize)]
struct SearchParams<'a> {
    api_key: &'a str,
    query: &'a str,
    language: &'a str,
}

#[derive(Serialize)]
struct DetailParams<'a> {
    api_key: &'a str,
    language: &'a str,
    append_to_response: &'static str,
}

/// Primary provider client for the TMDB v3 API.
pub struct TmdbClient {
    http: reqwest::Client,
    api_key: ApiKey,
    settings: TmdbSettings,
}

impl fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.settings.base_url.as_str())
            .field("language", &self.settings.language)
            .field("timeout", &self.settings.timeout)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(
        api_key: ApiKey,
        settings: &TmdbSettings,
    ) -> Result<Self, ClientBuildError> {
        let http = build_client(ProviderKind::Tmdb, settings.timeout)?;
        info!(
            base_url = %settings.base_url,
            language = %settings.language,
            timeout_ms = settings.timeout.as_millis() as u64,
            "TMDB provider configured"
        );

        Ok(Self {
            http,
            api_key,
            settings: settings.clone(),
        })
    }

    pub async fn fetch_search(
        &self,
        query: &str,
    ) -> ProviderResult<TmdbSearchPage> {
        let params = SearchParams {
            api_key: self.api_key.expose(),
            query,
            language: &self.settings.language,
        };

        get_json(
            &self.http,
            ProviderKind::Tmdb,
            endpoint(&self.settings.base_url, &["search", "movie"]),
            &params,
        )
        .await
    }

    pub async fn fetch_detail(&self, id: &str) -> ProviderResult<TmdbMovie> {
        let params = DetailParams {
            api_key: self.api_key.expose(),
            language: &self.settings.language,
            append_to_response: "credits",
        };

        get_json(
            &self.http,
            ProviderKind::Tmdb,
            endpoint(&self.settings.base_url, &["movie", id]),
            &params,
        )
        .await
    }
}

#[async_trait]
impl MetadataProvider for TmdbClient {
    async fn search(
        &self,
        query: &str,
    ) -> ProviderResult<Vec<MovieSearchResult>> {
        let page = self.fetch_search(query).await?;
        Ok(normalize::tmdb_search(page))
    }

    async fn detail(&self, id: &str) -> ProviderResult<MovieDetail> {
        let movie = self.fetch_detail(id).await?;
        Ok(normalize::tmdb_detail(movie))
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Tmdb
    }
}
