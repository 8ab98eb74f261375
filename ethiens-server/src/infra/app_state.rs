use std::{fmt, sync::Arc};

use ethiens_config::Config;
use ethiens_core::{ClientBuildError, MovieMetadataResolver};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: MovieMetadataResolver,
}

impl AppState {
    /// Builds the provider clients described by `config`.
    pub fn from_config(config: Config) -> Result<Self, ClientBuildError> {
        let resolver = MovieMetadataResolver::new(&config.providers)?;
        Ok(Self::new(Arc::new(config), resolver))
    }

    pub fn new(config: Arc<Config>, resolver: MovieMetadataResolver) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("resolver", &self.resolver)
            .finish_non_exhaustive()
    }
}
