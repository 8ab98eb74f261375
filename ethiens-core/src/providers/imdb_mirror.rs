//! Fallback provider backed by an unauthenticated IMDb mirror.
//!
//! The mirror returns the raw IMDb page state: a JSON-LD `short` summary plus
//! a deeply nested GraphQL `main` document. Only the branches we read are
//! modeled; each hop is optional and defaults when absent.

use std::fmt;

use async_trait::async_trait;
use ethiens_model::{MovieDetail, MovieSearchResult};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::decode::{Scalar, lenient_text, nullable};
use super::http::{build_client, endpoint, get_json};
use super::settings::FallbackSettings;
use super::traits::{MetadataProvider, ProviderKind, ProviderResult};
use crate::error::ClientBuildError;
use crate::normalize;

/// `GET /search?q=` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbSearchPage {
    #[serde(default, deserialize_with = "nullable")]
    pub description: Vec<ImdbSearchItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbSearchItem {
    #[serde(rename = "#IMDB_ID", default)]
    pub imdb_id: Option<Scalar>,
    #[serde(rename = "#TITLE", default)]
    pub title: Option<Scalar>,
    #[serde(rename = "#YEAR", default)]
    pub year: Option<Scalar>,
}

/// `GET /search?tt=` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbTitlePage {
    #[serde(default, deserialize_with = "nullable")]
    pub short: ImdbShort,
    #[serde(default, deserialize_with = "nullable")]
    pub main: ImdbMain,
}

/// JSON-LD summary block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbShort {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(rename = "datePublished", default)]
    pub date_published: Option<Scalar>,
    /// Absolute poster URL.
    #[serde(default, deserialize_with = "lenient_text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbMain {
    #[serde(default, deserialize_with = "nullable")]
    pub runtime: ImdbRuntime,
    #[serde(rename = "countriesDetails", default, deserialize_with = "nullable")]
    pub countries_details: ImdbCountriesDetails,
    #[serde(default, deserialize_with = "nullable")]
    pub production: ImdbProduction,
    #[serde(rename = "castV2", default, deserialize_with = "nullable")]
    pub cast_groups: Vec<ImdbCastGroup>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbRuntime {
    #[serde(default)]
    pub seconds: Option<Scalar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbCountriesDetails {
    #[serde(default, deserialize_with = "nullable")]
    pub countries: Vec<ImdbText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbProduction {
    #[serde(default, deserialize_with = "nullable")]
    pub edges: Vec<ImdbProductionEdge>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbProductionEdge {
    #[serde(default)]
    pub node: Option<ImdbProductionNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbProductionNode {
    #[serde(default)]
    pub company: Option<ImdbCompany>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbCompany {
    #[serde(rename = "companyText", default)]
    pub company_text: Option<ImdbText>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbCastGroup {
    #[serde(default, deserialize_with = "nullable")]
    pub credits: Vec<ImdbCastCredit>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbCastCredit {
    #[serde(default)]
    pub name: Option<ImdbCastName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbCastName {
    #[serde(rename = "nameText", default)]
    pub name_text: Option<ImdbText>,
}

/// The `{ "text": ... }` leaf used all over the GraphQL document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImdbText {
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
}

impl ImdbText {
    pub fn non_empty(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

impl ImdbTitlePage {
    pub fn runtime_seconds(&self) -> Option<u64> {
        self.main
            .runtime
            .seconds
            .as_ref()
            .and_then(Scalar::to_positive_integer)
    }

    pub fn date_published(&self) -> Option<String> {
        self.short
            .date_published
            .as_ref()
            .and_then(Scalar::to_raw_text)
    }

    /// Credits of the first cast group only ("top cast").
    pub fn top_cast(&self) -> &[ImdbCastCredit] {
        self.main
            .cast_groups
            .first()
            .map(|group| group.credits.as_slice())
            .unwrap_or_default()
    }
}

impl ImdbProductionEdge {
    pub fn company_name(&self) -> Option<&str> {
        self.node
            .as_ref()?
            .company
            .as_ref()?
            .company_text
            .as_ref()?
            .non_empty()
    }
}

impl ImdbCastCredit {
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_ref()?.name_text.as_ref()?.non_empty()
    }
}

#[derive(Serialize)]
struct SearchParams<'a> {
    q: &'a str,
}

#[derive(Serialize)]
struct TitleParams<'a> {
    tt: &'a str,
}

/// Secondary provider client.
pub struct ImdbMirrorClient {
    http: reqwest::Client,
    settings: FallbackSettings,
}

impl fmt::Debug for ImdbMirrorClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImdbMirrorClient")
            .field("base_url", &self.settings.base_url.as_str())
            .field("timeout", &self.settings.timeout)
            .finish_non_exhaustive()
    }
}

impl ImdbMirrorClient {
    pub fn new(settings: &FallbackSettings) -> Result<Self, ClientBuildError> {
        let http = build_client(ProviderKind::ImdbMirror, settings.timeout)?;
        info!(
            base_url = %settings.base_url,
            timeout_ms = settings.timeout.as_millis() as u64,
            "IMDb mirror provider configured"
        );

        Ok(Self {
            http,
            settings: settings.clone(),
        })
    }

    pub async fn fetch_search(
        &self,
        query: &str,
    ) -> ProviderResult<ImdbSearchPage> {
        get_json(
            &self.http,
            ProviderKind::ImdbMirror,
            endpoint(&self.settings.base_url, &["search"]),
            &SearchParams { q: query },
        )
        .await
    }

    pub async fn fetch_detail(&self, id: &str) -> ProviderResult<ImdbTitlePage> {
        get_json(
            &self.http,
            ProviderKind::ImdbMirror,
            endpoint(&self.settings.base_url, &["search"]),
            &TitleParams { tt: id },
        )
        .await
    }
}

#[async_trait]
impl MetadataProvider for ImdbMirrorClient {
    async fn search(
        &self,
        query: &str,
    ) -> ProviderResult<Vec<MovieSearchResult>> {
        let page = self.fetch_search(query).await?;
        Ok(normalize::imdb_search(page))
    }

    async fn detail(&self, id: &str) -> ProviderResult<MovieDetail> {
        let page = self.fetch_detail(id).await?;
        Ok(normalize::imdb_detail(page))
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::ImdbMirror
    }
}
