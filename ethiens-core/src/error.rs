use thiserror::Error;

use crate::providers::ProviderKind;

/// Why a single upstream call did not produce a payload.
///
/// The resolver treats every variant the same way; the distinction only
/// survives for logging and for the HTTP status picked at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureCause {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("upstream answered with HTTP {0}")]
    Status(u16),

    #[error("malformed response body: {0}")]
    Decode(String),
}

/// A transient upstream failure reported by one provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{provider} request failed: {cause}")]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    #[source]
    pub cause: FailureCause,
}

impl ProviderFailure {
    pub fn new(provider: ProviderKind, cause: FailureCause) -> Self {
        Self { provider, cause }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.cause, FailureCause::Status(404))
    }
}

/// Terminal outcome of a resolution once every attempted provider failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The search could not be answered by any provider.
    #[error("no provider could answer the search: {0}")]
    NoResults(#[source] ProviderFailure),

    /// The detail lookup could not be answered by any provider.
    #[error("movie details unavailable: {0}")]
    Upstream(#[source] ProviderFailure),
}

impl ResolutionError {
    /// Failure reported by the last provider that was attempted.
    pub fn last_failure(&self) -> &ProviderFailure {
        match self {
            Self::NoResults(failure) | Self::Upstream(failure) => failure,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.last_failure().is_not_found()
    }
}

/// The HTTP client of a provider could not be constructed.
#[derive(Debug, Error)]
#[error("failed to build {provider} HTTP client: {source}")]
pub struct ClientBuildError {
    pub provider: ProviderKind,
    #[source]
    pub source: reqwest::Error,
}
