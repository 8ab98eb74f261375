/// Display value used when a provider does not report a release year.
pub const RELEASE_YEAR_UNKNOWN: &str = "N/A";

/// One hit of a title search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieSearchResult {
    /// Provider-tagged identifier: a decimal TMDB id or an IMDb `tt…` id.
    pub external_id: String,
    pub title: String,
    /// Four digit year, or [`RELEASE_YEAR_UNKNOWN`].
    pub release_year: String,
}

impl MovieSearchResult {
    pub fn new(
        external_id: impl Into<String>,
        title: impl Into<String>,
        release_year: Option<String>,
    ) -> Self {
        Self {
            external_id: external_id.into(),
            title: title.into(),
            release_year: release_year
                .filter(|year| !year.trim().is_empty())
                .unwrap_or_else(|| RELEASE_YEAR_UNKNOWN.to_string()),
        }
    }

    pub fn has_known_year(&self) -> bool {
        self.release_year != RELEASE_YEAR_UNKNOWN
    }
}

/// Body of a successful search response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResponse {
    pub results: Vec<MovieSearchResult>,
}

impl From<Vec<MovieSearchResult>> for SearchResponse {
    fn from(results: Vec<MovieSearchResult>) -> Self {
        Self { results }
    }
}

/// A country, company or cast member reduced to its display name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedEntity {
    pub name: String,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for NamedEntity {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for NamedEntity {
    fn from(name: String) -> Self {
        Self { name }
    }
}

/// Full metadata of a single movie.
///
/// Every field is always present. Unknown strings are empty, an unknown
/// runtime is `0` and empty upstream collections stay empty lists.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovieDetail {
    pub title: String,
    pub overview: String,
    /// Full date, a synthesized `YYYY-01-01`, or whatever the provider sent.
    pub release_date: String,
    pub runtime_minutes: u32,
    /// Relative path for TMDB records, absolute URL for IMDb mirror records.
    pub poster_url: String,
    pub production_countries: Vec<NamedEntity>,
    pub production_companies: Vec<NamedEntity>,
    pub cast: Vec<NamedEntity>,
}

impl MovieDetail {
    pub fn cast_names(&self) -> impl Iterator<Item = &str> {
        self.cast.iter().map(|member| member.name.as_str())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_year_uses_display_sentinel() {
        let result = MovieSearchResult::new("tt0133093", "The Matrix", None);
        assert_eq!(result.release_year, "N/A");
        assert!(!result.has_known_year());

        let blank = MovieSearchResult::new("603", "The Matrix", Some("  ".into()));
        assert_eq!(blank.release_year, RELEASE_YEAR_UNKNOWN);
    }

    #[test]
    fn detail_serializes_every_field_even_when_empty() {
        let value = serde_json::to_value(MovieDetail::default()).unwrap();
        let object = value.as_object().unwrap();

        for key in [
            "title",
            "overview",
            "release_date",
            "runtime_minutes",
            "poster_url",
            "production_countries",
            "production_companies",
            "cast",
        ] {
            assert!(object.contains_key(key), "missing {key}");
        }
        assert_eq!(value["runtime_minutes"], 0);
        assert_eq!(value["cast"], serde_json::json!([]));
    }

    #[test]
    fn search_response_wraps_results() {
        let response = SearchResponse::from(vec![MovieSearchResult::new(
            "603",
            "The Matrix",
            Some("1999".into()),
        )]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["results"][0]["external_id"], "603");
        assert_eq!(value["results"][0]["release_year"], "1999");
    }
}
