use std::time::Duration;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use super::traits::{ProviderKind, ProviderResult};
use crate::error::{ClientBuildError, FailureCause, ProviderFailure};

const USER_AGENT: &str = concat!("ethiens/", env!("CARGO_PKG_VERSION"));

/// Builds the client used for every call to one provider. The timeout bounds
/// the whole exchange, body included.
pub(crate) fn build_client(
    provider: ProviderKind,
    timeout: Duration,
) -> Result<reqwest::Client, ClientBuildError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| ClientBuildError { provider, source })
}

/// Appends already-unescaped path segments to a provider base URL.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

pub(crate) async fn get_json<Q, T>(
    client: &reqwest::Client,
    provider: ProviderKind,
    url: Url,
    query: &Q,
) -> ProviderResult<T>
where
    Q: Serialize + ?Sized,
    T: DeserializeOwned,
{
    debug!(%provider, path = url.path(), "requesting upstream");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|err| transport_failure(provider, err))?;

    let status = response.status();
    if !status.is_success() {
        #[derive(Debug, Deserialize)]
        struct UpstreamErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<UpstreamErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| format!("request failed with status {status}"));
        warn!(%provider, status = status.as_u16(), %message, "upstream rejected request");

        return Err(ProviderFailure::new(
            provider,
            FailureCause::Status(status.as_u16()),
        ));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| transport_failure(provider, err))?;

    serde_json::from_slice::<T>(&body).map_err(|err| {
        ProviderFailure::new(provider, FailureCause::Decode(err.to_string()))
    })
}

/// Classifies a reqwest error. The URL is stripped first because TMDB
/// carries the API key in the query string.
fn transport_failure(
    provider: ProviderKind,
    err: reqwest::Error,
) -> ProviderFailure {
    let err = err.without_url();
    let cause = if err.is_timeout() {
        FailureCause::Timeout
    } else if err.is_decode() {
        FailureCause::Decode(err.to_string())
    } else {
        FailureCause::Network(err.to_string())
    };
    ProviderFailure::new(provider, cause)
}
