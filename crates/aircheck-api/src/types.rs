//! Play-history service response types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A broadcasting station.
#[derive(Debug, Clone, Deserialize)]
pub struct Station {
    /// Stable, globally unique station id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Broadcast location, when the service knows one.
    #[serde(default)]
    pub location: Option<String>,
    /// Total plays recorded for this station.
    pub play_count: u64,
    /// Distinct tracks recorded for this station.
    pub track_count: u64,
}

/// Track identity as embedded in a play record.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackMinimal {
    /// Track id, unique per station.
    pub id: String,
    /// Performing artist.
    pub artist: String,
    /// Track title.
    pub title: String,
    /// Whether this is a song (as opposed to e.g. station ident or ad).
    pub is_song: bool,
}

/// Track with aggregate statistics, as returned by the detail endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    /// Track id, unique per station.
    pub id: String,
    /// Performing artist.
    pub artist: String,
    /// Track title.
    pub title: String,
    /// Whether this is a song.
    pub is_song: bool,
    /// Total plays recorded for this track.
    pub play_count: u64,
    /// First time the service saw this track.
    pub created_at: DateTime<Utc>,
    /// Last time the track's record changed.
    pub updated_at: DateTime<Utc>,
}

/// One instance of a track airing on a station.
#[derive(Debug, Clone, Deserialize)]
pub struct Play {
    /// Unique play id.
    pub id: String,
    /// When the track aired, UTC.
    pub played_at: DateTime<Utc>,
    /// Identity of the aired track.
    pub track: TrackMinimal,
}

/// A play record scoped to an already-known track.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackPlay {
    /// When the track aired, UTC.
    pub played_at: DateTime<Utc>,
}

/// Wire envelope for `/plays` listings.
#[derive(Debug, Deserialize)]
pub(crate) struct PlaysEnvelope {
    pub plays: Vec<Play>,
    pub next_token: Option<String>,
}

/// Wire envelope for `/track/{id}/plays` listings.
#[derive(Debug, Deserialize)]
pub(crate) struct TrackPlaysEnvelope {
    pub plays: Vec<TrackPlay>,
    pub next_token: Option<String>,
}
