use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripStatus {
    Completed,
    Upcoming,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Completed => "Completed",
            TripStatus::Upcoming => "Upcoming",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TripStatus::Completed => "badge badge-completed",
            TripStatus::Upcoming => "badge badge-upcoming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stay {
    pub name: String,
    pub nights: u32,
    pub price: String, // Display string, currency included
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32, // 1-based
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: u32,
    pub destination: String,
    pub dates: String,
    pub status: TripStatus,
    pub image: String,
    pub attractions: u32,
    pub budget: String,
    pub stays: Vec<Stay>,
    pub itinerary: Vec<DayPlan>,
}

/// Text copied to the clipboard when a trip is shared.
pub fn share_text(trip: &Trip) -> String {
    format!("Check out my amazing trip to {}! {}", trip.destination, trip.dates)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TripTab {
    #[default]
    All,
    Upcoming,
    Completed,
}

impl TripTab {
    pub const ALL: [TripTab; 3] = [TripTab::All, TripTab::Upcoming, TripTab::Completed];

    pub fn status(&self) -> Option<TripStatus> {
        match self {
            TripTab::All => None,
            TripTab::Upcoming => Some(TripStatus::Upcoming),
            TripTab::Completed => Some(TripStatus::Completed),
        }
    }

    pub fn label(&self, counts: &TripCounts) -> String {
        match self {
            TripTab::All => "All Trips".to_string(),
            TripTab::Upcoming => format!("Upcoming ({})", counts.upcoming),
            TripTab::Completed => format!("Completed ({})", counts.completed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripCounts {
    pub all: usize,
    pub upcoming: usize,
    pub completed: usize,
}

impl TripCounts {
    pub fn from_trips(trips: &[Trip]) -> Self {
        trips.iter().fold(Self::default(), |mut counts, trip| {
            counts.all += 1;
            match trip.status {
                TripStatus::Upcoming => counts.upcoming += 1,
                TripStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }
}

pub fn filter_by_status(trips: &[Trip], status: TripStatus) -> Vec<&Trip> {
    trips.iter().filter(|trip| trip.status == status).collect()
}

pub fn trips_for_tab(trips: &[Trip], tab: TripTab) -> Vec<&Trip> {
    match tab.status() {
        Some(status) => filter_by_status(trips, status),
        None => trips.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::fixtures;

    fn ids(trips: &[&Trip]) -> Vec<u32> {
        trips.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_filter_preserves_order() {
        let trips = fixtures::user_trips();
        let completed = filter_by_status(&trips, TripStatus::Completed);
        assert_eq!(ids(&completed), vec![1, 3]);
        assert!(completed.iter().all(|t| t.status == TripStatus::Completed));

        let upcoming = filter_by_status(&trips, TripStatus::Upcoming);
        assert_eq!(ids(&upcoming), vec![2]);
    }

    #[test]
    fn test_partition_covers_all_trips() {
        let trips = fixtures::user_trips();
        let upcoming = filter_by_status(&trips, TripStatus::Upcoming);
        let completed = filter_by_status(&trips, TripStatus::Completed);
        assert_eq!(upcoming.len() + completed.len(), trips.len());
    }

    #[test]
    fn test_counts_match_tab_labels() {
        let trips = fixtures::user_trips();
        let counts = TripCounts::from_trips(&trips);
        assert_eq!(counts.all, 3);
        assert_eq!(
            counts.completed,
            filter_by_status(&trips, TripStatus::Completed).len()
        );
        assert_eq!(TripTab::All.label(&counts), "All Trips");
        assert_eq!(TripTab::Upcoming.label(&counts), "Upcoming (1)");
        assert_eq!(TripTab::Completed.label(&counts), "Completed (2)");
    }

    #[test]
    fn test_all_tab_returns_everything() {
        let trips = fixtures::user_trips();
        assert_eq!(ids(&trips_for_tab(&trips, TripTab::All)), vec![1, 2, 3]);
        assert_eq!(ids(&trips_for_tab(&trips, TripTab::Completed)), vec![1, 3]);
    }

    #[test]
    fn test_filter_empty_list() {
        assert!(filter_by_status(&[], TripStatus::Upcoming).is_empty());
        assert_eq!(TripCounts::from_trips(&[]), TripCounts::default());
    }

    #[test]
    fn test_share_text() {
        let trips = fixtures::user_trips();
        assert_eq!(
            share_text(&trips[0]),
            "Check out my amazing trip to Puducherry, India! Oct 20 - Oct 25, 2024"
        );
    }
}
