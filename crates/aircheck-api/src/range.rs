//! Time window parameter for play listings.

use chrono::{DateTime, SecondsFormat, Utc};

/// Half-open UTC time window `[start, end)` for a play listing.
///
/// Both bounds are mandatory; the service does not accept open-ended ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayRange {
    /// Inclusive window start.
    pub start: DateTime<Utc>,
    /// Exclusive window end.
    pub end: DateTime<Utc>,
}

impl PlayRange {
    /// Creates a new window.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// `start` rendered as the canonical query value.
    pub(crate) fn start_param(&self) -> String {
        format_instant(self.start)
    }

    /// `end` rendered as the canonical query value.
    pub(crate) fn end_param(&self) -> String {
        format_instant(self.end)
    }
}

/// Renders an instant as ISO-8601 UTC with milliseconds, e.g.
/// `2024-01-01T00:00:00.000Z`.
fn format_instant(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}
