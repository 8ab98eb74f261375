//! Canonical movie records shared across Ethiens crates.
//!
//! Both metadata providers normalize into these shapes, so the HTTP layer
//! never needs to know which upstream answered a request.
#![allow(missing_docs)]

pub mod movie;

pub use movie::{
    MovieDetail, MovieSearchResult, NamedEntity, RELEASE_YEAR_UNKNOWN,
    SearchResponse,
};
