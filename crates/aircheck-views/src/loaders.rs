//! View-load functions.
//!
//! One function per view, called by the routing collaborator with the shared
//! query client, the station directory from the top-level load, and the
//! navigation token for the load being applied. Primary data joins fail
//! fast; invalidation handles combine settle-all.

use aircheck_api::{
    ContinuationToken, Fetched, InvalidationHandle, LocalPlayHistoryApi, Page, Play, Station,
    Track, TrackPlay,
};
use tracing::instrument;

use crate::bucket::HourBucket;
use crate::directory::StationDirectory;
use crate::error::LoadError;
use crate::navigation::NavigationToken;

/// Data backing the station index view.
#[derive(Debug)]
pub struct StationIndexView {
    /// Stations in service-defined order.
    pub stations: Vec<Station>,
    /// Id-keyed lookup for descendant views.
    pub directory: StationDirectory,
    /// Handle refreshing the station list.
    pub invalidate: InvalidationHandle,
}

/// Data backing one hour of a station's play history.
#[derive(Debug)]
pub struct PlayHistoryView {
    /// The station this history belongs to.
    pub station: Station,
    /// The hour this page covers.
    pub hour: HourBucket,
    /// The current hour, the upper bound for forward navigation.
    pub latest: HourBucket,
    /// First page of plays within the hour.
    pub plays: Page<Play>,
    /// Handle refreshing this page's query.
    pub invalidate: InvalidationHandle,
}

/// Data backing the track detail view.
#[derive(Debug)]
pub struct TrackDetailView {
    /// The station the track belongs to.
    pub station: Station,
    /// Track metadata with aggregate statistics.
    pub track: Track,
    /// First page of the track's play history.
    pub plays: Page<TrackPlay>,
    /// Combined handle keeping both backing queries fresh together.
    pub invalidate: InvalidationHandle,
}

/// Canonical page path for a station's play history at the given hour.
#[must_use]
pub fn play_history_path(station_id: &str, hour: &HourBucket) -> String {
    format!("/station/{station_id}/plays/{hour}")
}

/// Page path a bare play-history address resolves to: the current hour.
#[must_use]
pub fn current_play_history_path(station_id: &str) -> String {
    play_history_path(station_id, &HourBucket::now())
}

/// Loads the station index and builds the directory shared by descendants.
///
/// # Errors
///
/// Returns [`LoadError::Superseded`] when `nav` is no longer current, or the
/// underlying API error.
#[instrument(skip_all)]
pub async fn load_station_index(
    api: &(impl LocalPlayHistoryApi + Sync),
    nav: &NavigationToken,
) -> Result<StationIndexView, LoadError> {
    let fetched = api.list_stations().await?;
    if !nav.is_current() {
        return Err(LoadError::Superseded);
    }

    let directory = StationDirectory::from_stations(fetched.data.iter().cloned());
    tracing::debug!(stations = directory.len(), "station index loaded");

    Ok(StationIndexView {
        stations: fetched.data,
        directory,
        invalidate: fetched.invalidate,
    })
}

/// Loads one hour of play history addressed by its bucket id.
///
/// A malformed or non-existent `hour_id` resolves to
/// [`LoadError::NotFound`] without issuing any request, as does a station id
/// absent from the directory.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`], [`LoadError::Superseded`], or the
/// underlying API error.
#[instrument(skip_all)]
pub async fn load_play_history(
    api: &(impl LocalPlayHistoryApi + Sync),
    directory: &StationDirectory,
    station_id: &str,
    hour_id: &str,
    nav: &NavigationToken,
) -> Result<PlayHistoryView, LoadError> {
    let hour: HourBucket = hour_id.parse().map_err(|_| LoadError::NotFound)?;
    let station = directory.get(station_id).ok_or(LoadError::NotFound)?.clone();

    let fetched = api.list_plays(station_id, &hour.range(), None).await?;
    if !nav.is_current() {
        return Err(LoadError::Superseded);
    }

    Ok(PlayHistoryView {
        station,
        hour,
        latest: HourBucket::now(),
        plays: fetched.data,
        invalidate: fetched.invalidate,
    })
}

/// Fetches the next play-history page for an hour already on screen.
///
/// Re-issues the owning query with the stored token; the returned handle
/// addresses this page's request, not the first page's.
///
/// # Errors
///
/// Returns [`LoadError::Superseded`] when `nav` is no longer current, or the
/// underlying API error.
#[instrument(skip_all)]
pub async fn load_more_plays(
    api: &(impl LocalPlayHistoryApi + Sync),
    station_id: &str,
    hour: &HourBucket,
    token: &ContinuationToken,
    nav: &NavigationToken,
) -> Result<Fetched<Page<Play>>, LoadError> {
    let fetched = api.list_plays(station_id, &hour.range(), Some(token)).await?;
    if !nav.is_current() {
        return Err(LoadError::Superseded);
    }
    Ok(fetched)
}

/// Loads the track detail view.
///
/// Track metadata and the track's play history are fetched concurrently and
/// joined fail-fast; their invalidation handles are combined settle-all so a
/// later refresh keeps both fresh without one failure blocking the other.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] for an unknown station or track,
/// [`LoadError::Superseded`] when `nav` is no longer current, or the
/// underlying API error.
#[instrument(skip_all)]
pub async fn load_track_detail(
    api: &(impl LocalPlayHistoryApi + Sync),
    directory: &StationDirectory,
    station_id: &str,
    track_id: &str,
    nav: &NavigationToken,
) -> Result<TrackDetailView, LoadError> {
    let station = directory.get(station_id).ok_or(LoadError::NotFound)?.clone();

    let (track, plays) = tokio::try_join!(
        api.get_track(station_id, track_id),
        api.list_track_plays(station_id, track_id, None),
    )?;
    if !nav.is_current() {
        return Err(LoadError::Superseded);
    }

    let invalidate = InvalidationHandle::combine(vec![track.invalidate, plays.invalidate]);
    Ok(TrackDetailView {
        station,
        track: track.data,
        plays: plays.data,
        invalidate,
    })
}

/// Fetches the next page of a track's play history.
///
/// # Errors
///
/// Returns [`LoadError::Superseded`] when `nav` is no longer current, or the
/// underlying API error.
#[instrument(skip_all)]
pub async fn load_more_track_plays(
    api: &(impl LocalPlayHistoryApi + Sync),
    station_id: &str,
    track_id: &str,
    token: &ContinuationToken,
    nav: &NavigationToken,
) -> Result<Fetched<Page<TrackPlay>>, LoadError> {
    let fetched = api
        .list_track_plays(station_id, track_id, Some(token))
        .await?;
    if !nav.is_current() {
        return Err(LoadError::Superseded);
    }
    Ok(fetched)
}
