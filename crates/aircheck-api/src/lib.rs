//! HTTP client library for the aircheck play-history service.
//!
//! Exposes typed query operations over the service's v1 endpoints, with
//! continuation-token pagination and per-request cache-invalidation handles.

mod api;
mod client;
mod error;
/// Cache-invalidation capability and request handles.
pub mod invalidate;
mod page;
mod range;
/// Wire record types decoded from service responses.
pub mod types;

pub use api::{Fetched, LocalPlayHistoryApi, PlayHistoryApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{PlayHistoryClient, PlayHistoryClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use error::ApiError;
pub use invalidate::{InvalidationHandle, Invalidator, NoopInvalidator};
pub use page::{ContinuationToken, Page};
pub use range::PlayRange;
pub use types::{Play, Station, Track, TrackMinimal, TrackPlay};
