mod decode;
mod http;
pub mod imdb_mirror;
pub mod settings;
pub mod tmdb;
pub mod traits;

pub use decode::Scalar;
pub use imdb_mirror::ImdbMirrorClient;
pub use settings::{ApiKey, FallbackSettings, ResolverSettings, TmdbSettings};
pub use tmdb::TmdbClient;
#[cfg(test)]
pub use traits::MockMetadataProvider;
pub use traits::{MetadataProvider, ProviderKind, ProviderResult};
