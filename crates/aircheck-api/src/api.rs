//! `PlayHistoryApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::ApiError;
use crate::invalidate::InvalidationHandle;
use crate::page::{ContinuationToken, Page};
use crate::range::PlayRange;
use crate::types::{Play, Station, Track, TrackPlay};

/// A decoded response paired with the invalidation handle for its request.
///
/// Invoking the handle later forces the host cache to refetch exactly the
/// query that produced `data`.
#[derive(Debug)]
pub struct Fetched<T> {
    /// Decoded response payload.
    pub data: T,
    /// Handle bound to this request's canonical URL.
    pub invalidate: InvalidationHandle,
}

/// Play-history API trait.
///
/// Abstracts query operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(PlayHistoryApi: Send)]
pub trait LocalPlayHistoryApi {
    /// Lists all stations, preserving the service-defined order.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn list_stations(&self) -> Result<Fetched<Vec<Station>>, ApiError>;

    /// Lists plays on a station within `[range.start, range.end)`.
    ///
    /// Pass the previous page's token to continue a listing; the token is
    /// only valid for the same station and range.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn list_plays(
        &self,
        station_id: &str,
        range: &PlayRange,
        token: Option<&ContinuationToken>,
    ) -> Result<Fetched<Page<Play>>, ApiError>;

    /// Fetches one track with aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the service does not know the
    /// track, or another error if the request or decoding fails.
    async fn get_track(&self, station_id: &str, track_id: &str) -> Result<Fetched<Track>, ApiError>;

    /// Lists plays of one track, unbounded in time (token-only pagination).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON decoding fails.
    async fn list_track_plays(
        &self,
        station_id: &str,
        track_id: &str,
        token: Option<&ContinuationToken>,
    ) -> Result<Fetched<Page<TrackPlay>>, ApiError>;
}
