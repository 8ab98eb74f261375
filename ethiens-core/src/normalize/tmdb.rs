use ethiens_model::{MovieDetail, MovieSearchResult, NamedEntity};

use super::year_prefix;
use crate::providers::tmdb::{TmdbMovie, TmdbNamed, TmdbSearchPage};

pub fn tmdb_search(page: TmdbSearchPage) -> Vec<MovieSearchResult> {
    page.results
        .into_iter()
        .map(|item| {
            let release_year = item.release_date.as_deref().and_then(year_prefix);
            MovieSearchResult::new(
                item.id.map(|id| id.to_string()).unwrap_or_default(),
                item.title.unwrap_or_default(),
                release_year,
            )
        })
        .collect()
}

pub fn tmdb_detail(movie: TmdbMovie) -> MovieDetail {
    MovieDetail {
        title: movie.title.unwrap_or_default(),
        overview: movie.overview.unwrap_or_default(),
        release_date: movie.release_date.unwrap_or_default(),
        runtime_minutes: movie.runtime.unwrap_or(0),
        poster_url: movie.poster_path.unwrap_or_default(),
        production_countries: names(movie.production_countries),
        production_companies: names(movie.production_companies),
        cast: names(movie.credits.cast),
    }
}

fn names(entries: Vec<TmdbNamed>) -> Vec<NamedEntity> {
    entries
        .into_iter()
        .map(|entry| NamedEntity::new(entry.name.unwrap_or_default()))
        .collect()
}
