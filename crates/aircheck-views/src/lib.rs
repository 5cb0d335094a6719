//! View-load layer for the aircheck play-history client.
//!
//! Sits between the query client and a rendering/routing collaborator:
//! addresses play-history pages by hour bucket, builds the station
//! directory, guards against superseded navigations, and assembles the data
//! each view needs.

/// Hour-bucket page addressing.
pub mod bucket;
mod directory;
mod error;
/// View-load functions and canonical page paths.
pub mod loaders;
mod navigation;

pub use bucket::{HourBucket, InvalidBucketId};
#[allow(clippy::module_name_repetitions)]
pub use directory::StationDirectory;
#[allow(clippy::module_name_repetitions)]
pub use error::LoadError;
pub use loaders::{
    PlayHistoryView, StationIndexView, TrackDetailView, current_play_history_path,
    load_more_plays, load_more_track_plays, load_play_history, load_station_index,
    load_track_detail, play_history_path,
};
pub use navigation::{NavigationGate, NavigationToken};
