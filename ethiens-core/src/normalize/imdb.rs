use ethiens_model::{MovieDetail, MovieSearchResult, NamedEntity};

use super::{expand_partial_date, runtime_minutes};
use crate::providers::Scalar;
use crate::providers::imdb_mirror::{ImdbSearchPage, ImdbTitlePage};

pub fn imdb_search(page: ImdbSearchPage) -> Vec<MovieSearchResult> {
    page.description
        .into_iter()
        .map(|item| {
            MovieSearchResult::new(
                raw_text_or_empty(item.imdb_id.as_ref()),
                raw_text_or_empty(item.title.as_ref()),
                item.year.as_ref().and_then(Scalar::to_text),
            )
        })
        .collect()
}

pub fn imdb_detail(page: ImdbTitlePage) -> MovieDetail {
    let release_date = page
        .date_published()
        .map(|raw| expand_partial_date(&raw))
        .unwrap_or_default();

    let production_countries = page
        .main
        .countries_details
        .countries
        .iter()
        .map(|country| NamedEntity::new(country.text.clone().unwrap_or_default()))
        .collect();

    let production_companies = page
        .main
        .production
        .edges
        .iter()
        .filter_map(|edge| edge.company_name())
        .map(NamedEntity::from)
        .collect();

    // Later cast groups ("more cast", crew) are deliberately ignored.
    let cast = page
        .top_cast()
        .iter()
        .filter_map(|credit| credit.display_name())
        .map(NamedEntity::from)
        .collect();

    MovieDetail {
        runtime_minutes: runtime_minutes(page.runtime_seconds()),
        release_date,
        production_countries,
        production_companies,
        cast,
        title: page.short.name.unwrap_or_default(),
        overview: page.short.description.unwrap_or_default(),
        poster_url: page.short.image.unwrap_or_default(),
    }
}

fn raw_text_or_empty(value: Option<&Scalar>) -> String {
    value.and_then(Scalar::to_raw_text).unwrap_or_default()
}
