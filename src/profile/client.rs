// Mojang profile API client: batch name lookups and single profile fetches.
//
// Two upstream endpoints:
//   POST {profiles_url}         body ["name", ...] -> [{"id", "name"}, ...]
//   GET  {session_url}/{uuid}   undashed uuid       -> {"id", "name", "properties"}
//
// The `fetch_*` methods report upstream failures as errors so callers can
// tell "not found" from "upstream unreachable". The `resolve_*` methods
// collapse failures to empty/absent results for callers that don't care.
// There is no caching and no retry: every call is one live round trip
// per batch.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use super::identifier::undashed;
use super::model::{parse_profile_batch, PlayerProfile};
use crate::config::Config;

/// Batch name lookup endpoint.
pub const DEFAULT_PROFILES_URL: &str = "https://api.mojang.com/profiles/minecraft";

/// Single profile endpoint; the undashed uuid is appended as a path segment.
pub const DEFAULT_SESSION_URL: &str = "https://sessionserver.mojang.com/session/minecraft/profile";

/// Mojang rejects batch requests with more than 10 names.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Per-request timeout for upstream calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Resolves player names and identifiers to profiles.
///
/// Implemented by [`ProfileClient`] against the live API; the web layer
/// only depends on this trait so it can run against an in-memory resolver.
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Look up profiles for a list of names.
    ///
    /// Returns an error if any upstream call fails or returns a malformed
    /// response. Names with no matching player are simply absent.
    async fn fetch_by_names(&self, names: &[String]) -> Result<Vec<PlayerProfile>>;

    /// Look up the full profile (including properties) for one identifier.
    ///
    /// `Ok(None)` means the upstream has no such player.
    async fn fetch_by_id(&self, id: &Uuid) -> Result<Option<PlayerProfile>>;

    /// Like `fetch_by_names`, but any failure yields an empty result.
    async fn resolve_by_name(&self, names: &[String]) -> Vec<PlayerProfile> {
        match self.fetch_by_names(names).await {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!(error = %e, requested = names.len(), "Name lookup failed");
                Vec::new()
            }
        }
    }

    /// Like `fetch_by_id`, but any failure yields `None`.
    async fn resolve_by_id(&self, id: &Uuid) -> Option<PlayerProfile> {
        match self.fetch_by_id(id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(error = %e, id = %id, "Profile lookup failed");
                None
            }
        }
    }
}

/// HTTP client for the Mojang profile endpoints.
pub struct ProfileClient {
    client: reqwest::Client,
    profiles_url: String,
    session_url: String,
    batch_size: usize,
}

impl ProfileClient {
    /// Create a client for the given endpoints with the default timeout
    /// and batch size.
    ///
    /// Pass local URLs for testing against a mock upstream.
    pub fn new(profiles_url: &str, session_url: &str) -> Result<Self> {
        Ok(Self {
            client: build_http_client(DEFAULT_TIMEOUT)?,
            profiles_url: profiles_url.trim_end_matches('/').to_string(),
            session_url: session_url.trim_end_matches('/').to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config.timeout)?,
            profiles_url: config.profiles_url.trim_end_matches('/').to_string(),
            session_url: config.session_url.trim_end_matches('/').to_string(),
            batch_size: config.batch_size.max(1),
        })
    }

    /// Override the maximum number of names sent per upstream request.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// POST one batch of names and parse the response.
    async fn post_names(&self, names: &[String]) -> Result<Vec<PlayerProfile>> {
        debug!(count = names.len(), "Profile batch POST request");

        let response = self
            .client
            .post(&self.profiles_url)
            .json(names)
            .send()
            .await
            .context("Profile batch request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Profile batch lookup returned {status}: {body}");
        }

        let body: Value = response
            .json()
            .await
            .context("Failed to parse profile batch response")?;

        parse_profile_batch(body).context("Unexpected profile batch response")
    }
}

#[async_trait]
impl ProfileResolver for ProfileClient {
    async fn fetch_by_names(&self, names: &[String]) -> Result<Vec<PlayerProfile>> {
        // An empty list still makes one (empty) upstream call.
        let batches: Vec<&[String]> = if names.is_empty() {
            vec![names]
        } else {
            names.chunks(self.batch_size).collect()
        };

        let mut profiles = Vec::with_capacity(names.len());
        for batch in batches {
            profiles.extend(self.post_names(batch).await?);
        }

        debug!(
            resolved = profiles.len(),
            requested = names.len(),
            "Resolved names to profiles"
        );

        Ok(profiles)
    }

    async fn fetch_by_id(&self, id: &Uuid) -> Result<Option<PlayerProfile>> {
        let url = format!("{}/{}", self.session_url, undashed(id));

        debug!(id = %id, "Profile GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Profile request failed for {id}"))?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Profile lookup for {id} returned {status}: {body}");
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read profile response for {id}"))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let body: Value = serde_json::from_slice(&bytes)
            .with_context(|| format!("Failed to parse profile response for {id}"))?;

        match PlayerProfile::from_record(body) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                debug!(id = %id, error = %e, "Discarding invalid profile response");
                Ok(None)
            }
        }
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("playerindex/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}
