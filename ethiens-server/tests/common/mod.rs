use axum_test::TestServer;
use ethiens_config::{ConfigLoader, EnvConfig};
use ethiens_server::{AppState, create_app};
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";

/// Mock TMDB and IMDb mirror upstreams for one test.
#[allow(unused)]
#[derive(Debug)]
pub struct Upstreams {
    pub tmdb: MockServer,
    pub imdb: MockServer,
}

#[allow(unused)]
impl Upstreams {
    pub async fn start() -> Self {
        Self {
            tmdb: MockServer::start().await,
            imdb: MockServer::start().await,
        }
    }

    /// Environment layer pointing both providers at the mock servers.
    pub fn env(&self, with_api_key: bool) -> EnvConfig {
        EnvConfig {
            tmdb_api_key: with_api_key.then(|| API_KEY.to_string()),
            tmdb_base_url: Some(self.tmdb.uri()),
            tmdb_timeout: Some("500ms".into()),
            imdb_base_url: Some(self.imdb.uri()),
            imdb_timeout: Some("500ms".into()),
            ..EnvConfig::default()
        }
    }

    pub fn server(&self, with_api_key: bool) -> TestServer {
        server_from_env(self.env(with_api_key))
    }
}

#[allow(unused)]
pub fn server_from_env(env: EnvConfig) -> TestServer {
    let load = ConfigLoader::new()
        .load_from_env(env, false)
        .expect("test configuration loads");
    let state = AppState::from_config(load.config).expect("provider clients build");
    TestServer::new(create_app(state)).expect("test server starts")
}
