//! Id-keyed station lookup.

use std::collections::HashMap;

use aircheck_api::Station;

/// Lookup structure built from a full station listing.
///
/// Built once per top-level load and shared read-only by dependent views in
/// place of re-fetching the station list. An id absent from the directory is
/// a "not found" condition for callers.
#[derive(Debug, Clone, Default)]
pub struct StationDirectory {
    stations: HashMap<String, Station>,
}

impl StationDirectory {
    /// Builds the directory in one pass. Later duplicate ids overwrite
    /// earlier ones (last-write-wins).
    #[must_use]
    pub fn from_stations<I>(stations: I) -> Self
    where
        I: IntoIterator<Item = Station>,
    {
        Self {
            stations: stations
                .into_iter()
                .map(|station| (station.id.clone(), station))
                .collect(),
        }
    }

    /// Looks up a station by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Station> {
        self.stations.get(id)
    }

    /// Number of distinct stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the directory holds no stations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Iterates over stations in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn station(id: &str, name: &str) -> Station {
        Station {
            id: String::from(id),
            name: String::from(name),
            location: None,
            play_count: 0,
            track_count: 0,
        }
    }

    #[test]
    fn test_duplicate_ids_last_write_wins() {
        // Arrange
        let stations = vec![
            station("a", "First A"),
            station("b", "Only B"),
            station("a", "Second A"),
        ];

        // Act
        let directory = StationDirectory::from_stations(stations);

        // Assert
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get("a").unwrap().name, "Second A");
        assert_eq!(directory.get("b").unwrap().name, "Only B");
    }

    #[test]
    fn test_absent_id_is_none() {
        // Arrange
        let directory = StationDirectory::from_stations(vec![station("a", "A")]);

        // Act & Assert
        assert!(directory.get("zzz").is_none());
    }

    #[test]
    fn test_empty_directory() {
        // Arrange & Act
        let directory = StationDirectory::from_stations(Vec::new());

        // Assert
        assert!(directory.is_empty());
        assert_eq!(directory.iter().count(), 0);
    }
}
