use crate::domain::model::{AssetPayload, AssetResult};
use crate::domain::ports::ConfigProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

/// One place to obtain an asset. Chains are ordered lists of these, tried
/// strictly front to back; the policy stays data so tests can build any
/// chain without touching real I/O paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceSpec {
    Local { path: PathBuf },
    Remote { url: String, timeout_seconds: u64 },
}

impl SourceSpec {
    pub fn local(path: impl Into<PathBuf>) -> Self {
        SourceSpec::Local { path: path.into() }
    }

    pub fn remote(url: impl Into<String>, timeout_seconds: u64) -> Self {
        SourceSpec::Remote {
            url: url.into(),
            timeout_seconds,
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Local { path } => write!(f, "local:{}", path.display()),
            SourceSpec::Remote { url, .. } => write!(f, "remote:{}", url),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Json,
    Binary,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchFailure {
    Timeout,
    NotFound(String),
    HttpError(u16),
    DecodeError(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Timeout => write!(f, "request timed out"),
            FetchFailure::NotFound(detail) => write!(f, "source unavailable: {}", detail),
            FetchFailure::HttpError(status) => write!(f, "HTTP status {}", status),
            FetchFailure::DecodeError(detail) => write!(f, "payload decode failed: {}", detail),
        }
    }
}

type CacheKey = (Vec<SourceSpec>, AssetKind);

/// Resolves assets through ordered source chains with per-source retries and
/// a process-lifetime memo cache. Retries apply within a remote JSON source;
/// fallback applies across sources. All failures collapse to `Absent` with
/// the last failure preserved as the reason.
pub struct AssetFetcher {
    client: Client,
    retry_attempts: u32,
    retry_delay: Duration,
    cache: RwLock<HashMap<CacheKey, AssetResult>>,
}

impl AssetFetcher {
    pub fn new(retry_attempts: u32, retry_delay: Duration) -> Self {
        Self {
            client: Client::new(),
            retry_attempts,
            retry_delay,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.retry_attempts(), config.retry_delay())
    }

    pub async fn fetch(&self, chain: &[SourceSpec], kind: AssetKind) -> AssetResult {
        let key: CacheKey = (chain.to_vec(), kind);

        // Lock is dropped before any await. First-population races both
        // compute identical content, so last write wins harmlessly.
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            tracing::debug!(kind = ?kind, "Asset cache hit");
            return hit.clone();
        }

        let result = self.fetch_uncached(chain, kind).await;
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, result.clone());
        result
    }

    async fn fetch_uncached(&self, chain: &[SourceSpec], kind: AssetKind) -> AssetResult {
        let mut last_failure: Option<FetchFailure> = None;

        for source in chain {
            match self.try_source(source, kind).await {
                Ok(payload) => {
                    tracing::debug!(%source, "Asset resolved");
                    return AssetResult::Present(payload);
                }
                Err(failure) => {
                    tracing::warn!(%source, %failure, "Asset source failed, trying next");
                    last_failure = Some(failure);
                }
            }
        }

        let reason = match last_failure {
            Some(failure) => failure.to_string(),
            None => "no sources configured".to_string(),
        };
        AssetResult::Absent { reason }
    }

    async fn try_source(
        &self,
        source: &SourceSpec,
        kind: AssetKind,
    ) -> Result<AssetPayload, FetchFailure> {
        match source {
            SourceSpec::Local { path } => Self::read_local(path, kind),
            SourceSpec::Remote {
                url,
                timeout_seconds,
            } => {
                // Animation JSON historically retried before falling back;
                // binary fetches did not.
                let retries = if kind == AssetKind::Json {
                    self.retry_attempts
                } else {
                    0
                };

                let mut attempt = 0;
                loop {
                    match self.get_remote(url, *timeout_seconds, kind).await {
                        Ok(payload) => return Ok(payload),
                        Err(failure) if attempt < retries => {
                            attempt += 1;
                            tracing::debug!(
                                url,
                                attempt,
                                %failure,
                                "Remote fetch failed, retrying"
                            );
                            tokio::time::sleep(self.retry_delay).await;
                        }
                        Err(failure) => return Err(failure),
                    }
                }
            }
        }
    }

    fn read_local(path: &Path, kind: AssetKind) -> Result<AssetPayload, FetchFailure> {
        let bytes = std::fs::read(path)
            .map_err(|e| FetchFailure::NotFound(format!("{}: {}", path.display(), e)))?;
        Self::decode(bytes, kind)
    }

    async fn get_remote(
        &self,
        url: &str,
        timeout_seconds: u64,
        kind: AssetKind,
    ) -> Result<AssetPayload, FetchFailure> {
        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(timeout_seconds))
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::HttpError(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(classify_transport_error)?
            .to_vec();
        Self::decode(bytes, kind)
    }

    fn decode(bytes: Vec<u8>, kind: AssetKind) -> Result<AssetPayload, FetchFailure> {
        match kind {
            AssetKind::Json => serde_json::from_slice(&bytes)
                .map(AssetPayload::Json)
                .map_err(|e| FetchFailure::DecodeError(e.to_string())),
            AssetKind::Binary | AssetKind::Image => Ok(AssetPayload::Bytes(bytes)),
        }
    }
}

fn classify_transport_error(error: reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if let Some(status) = error.status() {
        FetchFailure::HttpError(status.as_u16())
    } else {
        FetchFailure::NotFound(error.to_string())
    }
}
