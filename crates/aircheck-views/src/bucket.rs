//! Hour-bucket page addressing.
//!
//! A play-history page is addressed by the UTC hour it covers, rendered as
//! the fixed-width id `YYYY-MM-DDTHHZ` (e.g. `2024-01-01T05Z`). The id is
//! stable and bookmarkable: any two instants within the same UTC hour
//! produce the same bucket.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use aircheck_api::PlayRange;
use chrono::{DateTime, Datelike, TimeDelta, TimeZone, Timelike, Utc};
use regex::Regex;
use thiserror::Error;

/// Regex for the bucket id pattern. Widths are fixed; anything else is
/// rejected before calendar validation.
#[allow(clippy::expect_used)]
static BUCKET_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2})Z$").expect("failed to compile bucket id regex")
});

/// Malformed or non-existent hour-bucket id.
///
/// Callers must treat this as "no such page", never as a transient error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hour bucket id: {id:?}")]
pub struct InvalidBucketId {
    /// The rejected id.
    pub id: String,
}

/// A canonical one-hour UTC window used as a page address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourBucket(DateTime<Utc>);

impl HourBucket {
    /// Buckets an instant, truncating to the start of its UTC hour.
    ///
    /// Timezone-normalizing: the input's original offset does not matter.
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Self(truncate_to_hour(t.with_timezone(&Utc)))
    }

    /// The bucket covering the present moment.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Inclusive start of the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.0
    }

    /// The query window `[start, start + 1h)` for this bucket.
    #[must_use]
    pub fn range(&self) -> PlayRange {
        let end = self
            .0
            .checked_add_signed(TimeDelta::hours(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        PlayRange::new(self.0, end)
    }

    /// The following hour's bucket, `None` at the end of representable time.
    #[must_use]
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add_signed(TimeDelta::hours(1)).map(Self)
    }

    /// The preceding hour's bucket, `None` at the start of representable time.
    #[must_use]
    pub fn prev(&self) -> Option<Self> {
        self.0.checked_sub_signed(TimeDelta::hours(1)).map(Self)
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%HZ"))
    }
}

impl FromStr for HourBucket {
    type Err = InvalidBucketId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidBucketId {
            id: String::from(s),
        };

        let caps = BUCKET_ID_RE.captures(s).ok_or_else(invalid)?;
        let field = |i: usize| {
            caps.get(i)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(invalid)
        };

        let year = i32::try_from(field(1)?).map_err(|_| invalid())?;
        let (month, day, hour) = (field(2)?, field(3)?, field(4)?);

        // Rejects ids naming a non-existent calendar hour (month 13, day 32, hour 24).
        Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
            .single()
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Zeroes the sub-hour components of a UTC instant.
fn truncate_to_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    // Components of a valid datetime always recombine into a valid datetime.
    Utc.with_ymd_and_hms(t.year(), t.month(), t.day(), t.hour(), 0, 0)
        .single()
        .unwrap_or(t)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::FixedOffset;

    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_instants_in_same_hour_bucket_identically() {
        // Arrange
        let early = utc(2024, 1, 1, 5, 0, 0);
        let late = utc(2024, 1, 1, 5, 59, 59);

        // Act & Assert
        assert_eq!(
            HourBucket::from_datetime(&early),
            HourBucket::from_datetime(&late)
        );
        assert_eq!(HourBucket::from_datetime(&early).to_string(), "2024-01-01T05Z");
    }

    #[test]
    fn test_bucketing_normalizes_timezone() {
        // Arrange: 08:30+05:30 is 03:00 UTC
        let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let local = offset.with_ymd_and_hms(2024, 1, 1, 8, 30, 0).unwrap();
        let utc_equiv = utc(2024, 1, 1, 3, 15, 0);

        // Act & Assert
        assert_eq!(
            HourBucket::from_datetime(&local),
            HourBucket::from_datetime(&utc_equiv)
        );
        assert_eq!(HourBucket::from_datetime(&local).to_string(), "2024-01-01T03Z");
    }

    #[test]
    fn test_truncation_is_idempotent() {
        // Arrange
        let t = utc(2024, 6, 15, 12, 34, 56);

        // Act
        let once = HourBucket::from_datetime(&t);
        let twice = HourBucket::from_datetime(&once.start());

        // Assert
        assert_eq!(once, twice);
    }

    #[test]
    fn test_roundtrip_reproduces_truncated_hour() {
        // Arrange
        let t = utc(2024, 2, 29, 23, 45, 12);

        // Act
        let bucket = HourBucket::from_datetime(&t);
        let parsed: HourBucket = bucket.to_string().parse().unwrap();

        // Assert
        assert_eq!(parsed, bucket);
        assert_eq!(parsed.start(), utc(2024, 2, 29, 23, 0, 0));
    }

    #[test]
    fn test_parse_valid_id() {
        // Arrange & Act
        let bucket: HourBucket = "2024-01-01T00Z".parse().unwrap();

        // Assert
        assert_eq!(bucket.start(), utc(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        // Arrange
        let malformed = [
            "bad",
            "",
            "2024-01-01",
            "2024-01-01T00",
            "2024-01-01t00Z",
            "2024-1-1T0Z",
            "2024-01-01T00:00Z",
            "2024-01-01T00Z ",
            " 2024-01-01T00Z",
            "2024-01-01T00Zx",
            "20240101T00Z",
        ];

        // Act & Assert
        for id in malformed {
            assert!(id.parse::<HourBucket>().is_err(), "accepted {id:?}");
        }
    }

    #[test]
    fn test_parse_rejects_nonexistent_calendar_hours() {
        // Arrange
        let nonexistent = [
            "2024-13-01T00Z", // month 13
            "2024-00-01T00Z", // month 0
            "2024-01-32T00Z", // day 32
            "2024-01-00T00Z", // day 0
            "2024-01-01T24Z", // hour 24
            "2023-02-29T00Z", // not a leap year
        ];

        // Act & Assert
        for id in nonexistent {
            assert!(id.parse::<HourBucket>().is_err(), "accepted {id:?}");
        }
    }

    #[test]
    fn test_parse_accepts_leap_day() {
        // Arrange & Act
        let bucket: HourBucket = "2024-02-29T12Z".parse().unwrap();

        // Assert
        assert_eq!(bucket.start(), utc(2024, 2, 29, 12, 0, 0));
    }

    #[test]
    fn test_range_is_half_open_one_hour() {
        // Arrange
        let bucket: HourBucket = "2024-01-01T00Z".parse().unwrap();

        // Act
        let range = bucket.range();

        // Assert
        assert_eq!(range.start, utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(range.end, utc(2024, 1, 1, 1, 0, 0));
    }

    #[test]
    fn test_next_and_prev_step_one_hour() {
        // Arrange
        let bucket: HourBucket = "2024-01-01T23Z".parse().unwrap();

        // Act & Assert
        assert_eq!(bucket.next().unwrap().to_string(), "2024-01-02T00Z");
        assert_eq!(bucket.prev().unwrap().to_string(), "2024-01-01T22Z");
    }

    #[test]
    fn test_invalid_id_error_carries_input() {
        // Arrange & Act
        let err = "nope".parse::<HourBucket>().unwrap_err();

        // Assert
        assert_eq!(err.id, "nope");
        assert!(err.to_string().contains("nope"));
    }
}
