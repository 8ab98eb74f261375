//! # Ethiens Core
//!
//! Movie metadata resolution for the Ethiens cinema backend.
//!
//! A title search or a detail lookup is answered by TMDB when an API key is
//! configured. When TMDB is missing, times out or answers with garbage, the
//! request is replayed once against an unauthenticated IMDb mirror. Both
//! upstream schemas are decoded into typed payloads and normalized into the
//! canonical records of [`ethiens_model`].
//!
//! ## Layout
//!
//! - [`providers`]: HTTP clients for both upstreams behind the
//!   [`MetadataProvider`] capability, plus their raw payload types
//! - [`normalize`]: infallible raw payload to canonical record mapping
//! - [`resolver`]: the primary/fallback dispatcher

pub mod error;
pub mod normalize;
pub mod providers;
pub mod resolver;

pub use error::{
    ClientBuildError, FailureCause, ProviderFailure, ResolutionError,
};
pub use ethiens_model as model;
pub use providers::{
    ApiKey, FallbackSettings, ImdbMirrorClient, MetadataProvider,
    ProviderKind, ProviderResult, ResolverSettings, TmdbClient, TmdbSettings,
};
pub use resolver::MovieMetadataResolver;
