//! `PlayHistoryClient` - play-history service client implementation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use crate::api::{Fetched, LocalPlayHistoryApi};
use crate::error::ApiError;
use crate::invalidate::{InvalidationHandle, Invalidator, NoopInvalidator};
use crate::page::{ContinuationToken, Page};
use crate::range::PlayRange;
use crate::types::{Play, PlaysEnvelope, Station, Track, TrackPlay, TrackPlaysEnvelope};

/// Play-history service client.
///
/// Every operation builds a deterministic request URL (fixed path segments,
/// query parameters in a fixed order) which doubles as the canonical cache
/// key bound into the returned invalidation handle.
pub struct PlayHistoryClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base origin for API requests.
    base_url: Url,
    /// Host cache capability bound into invalidation handles.
    invalidator: Arc<dyn Invalidator>,
}

impl std::fmt::Debug for PlayHistoryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayHistoryClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Builder for `PlayHistoryClient`.
#[derive(Default)]
pub struct PlayHistoryClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    invalidator: Option<Arc<dyn Invalidator>>,
}

impl std::fmt::Debug for PlayHistoryClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayHistoryClientBuilder")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl PlayHistoryClientBuilder {
    /// Creates a new builder.
    fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Injects the host cache capability (default: [`NoopInvalidator`]).
    #[must_use]
    pub fn invalidator(mut self, invalidator: Arc<dyn Invalidator>) -> Self {
        self.invalidator = Some(invalidator);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `base_url` is not set or cannot serve as a base origin.
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<PlayHistoryClient> {
        let base_url = self.base_url.context("base_url is required")?;
        if base_url.cannot_be_a_base() {
            bail!("base_url cannot serve as a base origin: {base_url}");
        }
        let user_agent = self.user_agent.context("user_agent is required")?;

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        let invalidator = self
            .invalidator
            .unwrap_or_else(|| Arc::new(NoopInvalidator));

        Ok(PlayHistoryClient {
            http_client,
            base_url,
            invalidator,
        })
    }
}

impl PlayHistoryClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> PlayHistoryClientBuilder {
        PlayHistoryClientBuilder::new()
    }

    /// Builds the canonical URL for an endpoint.
    ///
    /// Query parameters are appended in the order given; operations pass
    /// them in a fixed order (`start`, `end`, `next_token`) so the same call
    /// always yields the same URL.
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected at build time
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    /// Binds `url` into an invalidation handle over the injected capability.
    fn handle(&self, url: Url) -> InvalidationHandle {
        InvalidationHandle::new(Arc::clone(&self.invalidator), url)
    }

    /// Sends a GET request and decodes the JSON body.
    ///
    /// 404 maps to [`ApiError::NotFound`], other non-success statuses to
    /// [`ApiError::Status`], and shape mismatches to [`ApiError::Decode`].
    /// Failed requests are not retried.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "play-history API request");

        let response = self.http_client.get(url.clone()).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { url: url.clone() });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status,
                url: url.clone(),
            });
        }

        let body = response.text().await?;
        tracing::trace!(%url, body_len = body.len(), "response body received");

        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.clone(),
            source,
        })
    }
}

impl LocalPlayHistoryApi for PlayHistoryClient {
    #[instrument(skip_all)]
    async fn list_stations(&self) -> Result<Fetched<Vec<Station>>, ApiError> {
        let url = self.endpoint(&["v1", "stations"], &[]);

        let stations: Vec<Station> = self.get_json(&url).await?;
        Ok(Fetched {
            data: stations,
            invalidate: self.handle(url),
        })
    }

    #[instrument(skip_all)]
    async fn list_plays(
        &self,
        station_id: &str,
        range: &PlayRange,
        token: Option<&ContinuationToken>,
    ) -> Result<Fetched<Page<Play>>, ApiError> {
        let mut query: Vec<(&str, String)> = vec![
            ("start", range.start_param()),
            ("end", range.end_param()),
        ];
        if let Some(token) = token {
            query.push(("next_token", String::from(token.as_str())));
        }
        let url = self.endpoint(&["v1", "station", station_id, "plays"], &query);

        let envelope: PlaysEnvelope = self.get_json(&url).await?;
        Ok(Fetched {
            data: Page::new(envelope.plays, envelope.next_token),
            invalidate: self.handle(url),
        })
    }

    #[instrument(skip_all)]
    async fn get_track(&self, station_id: &str, track_id: &str) -> Result<Fetched<Track>, ApiError> {
        let url = self.endpoint(&["v1", "station", station_id, "track", track_id], &[]);

        // The service answers `null` for an unknown track id.
        let track: Option<Track> = self.get_json(&url).await?;
        let track = track.ok_or_else(|| ApiError::NotFound { url: url.clone() })?;
        Ok(Fetched {
            data: track,
            invalidate: self.handle(url),
        })
    }

    #[instrument(skip_all)]
    async fn list_track_plays(
        &self,
        station_id: &str,
        track_id: &str,
        token: Option<&ContinuationToken>,
    ) -> Result<Fetched<Page<TrackPlay>>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(token) = token {
            query.push(("next_token", String::from(token.as_str())));
        }
        let url = self.endpoint(
            &["v1", "station", station_id, "track", track_id, "plays"],
            &query,
        );

        let envelope: TrackPlaysEnvelope = self.get_json(&url).await?;
        Ok(Fetched {
            data: Page::new(envelope.plays, envelope.next_token),
            invalidate: self.handle(url),
        })
    }
}
