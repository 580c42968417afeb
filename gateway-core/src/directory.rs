use crate::error::{GatewayError, Result};
use crate::model::NetworkRecord;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

const LOOKUP_PATH: &str = "get-node";
const LOOKUP_PARAM: &str = "urbit-id";

/// Remote registry of which identifiers have been spawned and by whom.
#[async_trait]
pub trait DirectoryLookupService: Send + Sync {
    /// Fetch the record for `identifier`. `Ok(None)` means unspawned.
    async fn lookup(&self, identifier: &str) -> Result<Option<NetworkRecord>>;
}

/// Directory reached over HTTP at `<base>/get-node?urbit-id=<id>`.
pub struct HttpDirectory {
    client: Client,
    endpoint: Url,
}

impl HttpDirectory {
    pub fn new(base: &Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("urbit-gateway/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Self::with_client(client, base)
    }

    pub fn with_client(client: Client, base: &Url) -> Result<Self> {
        // join() replaces the last path segment unless the base ends in '/'
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let endpoint = base.join(LOOKUP_PATH)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl DirectoryLookupService for HttpDirectory {
    async fn lookup(&self, identifier: &str) -> Result<Option<NetworkRecord>> {
        debug!("Looking up {} at {}", identifier, self.endpoint);

        let start = Instant::now();
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[(LOOKUP_PARAM, identifier)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Directory lookup for {} returned {}", identifier, status);
            return Err(GatewayError::DirectoryStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(
            "Directory answered for {} in {:?} ({} bytes)",
            identifier,
            start.elapsed(),
            body.len()
        );

        if body.trim().is_empty() {
            return Ok(None);
        }
        let record: Option<NetworkRecord> = serde_json::from_str(&body)?;
        Ok(record)
    }
}
