//! Mock data shown on the profile page.

use chrono::NaiveDate;

use super::profile::{MemberSince, ProfileData, UserStats};
use super::trip::{DayPlan, Stay, Trip, TripStatus};

pub const AVATAR_IMAGE: &str = "/placeholder.svg";

pub fn profile() -> ProfileData {
    ProfileData {
        name: "John Doe".to_string(),
        bio: "Travel Enthusiast • Explorer".to_string(),
        location: "Mumbai, India".to_string(),
        email: "john.doe@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
    }
}

pub fn member_since() -> MemberSince {
    MemberSince(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default())
}

pub fn user_stats() -> UserStats {
    UserStats {
        total_trips: 8,
        countries_visited: 12,
        total_budget: "₹2,50,000".to_string(),
        favorite_destination: "Europe".to_string(),
    }
}

fn stay(name: &str, nights: u32, price: &str) -> Stay {
    Stay {
        name: name.to_string(),
        nights,
        price: price.to_string(),
    }
}

fn itinerary(days: &[&[&str]]) -> Vec<DayPlan> {
    days.iter()
        .zip(1..)
        .map(|(activities, day)| DayPlan {
            day,
            activities: activities.iter().map(|a| a.to_string()).collect(),
        })
        .collect()
}

pub fn user_trips() -> Vec<Trip> {
    vec![
        Trip {
            id: 1,
            destination: "Puducherry, India".to_string(),
            dates: "Oct 20 - Oct 25, 2024".to_string(),
            status: TripStatus::Completed,
            image: "/lovable-uploads/11e8bfa5-0cf0-4962-93ff-c8b5841917fb.png".to_string(),
            attractions: 12,
            budget: "₹15,000".to_string(),
            stays: vec![
                stay("Heritage Villa", 3, "₹8,000"),
                stay("Beach Resort", 2, "₹7,000"),
            ],
            itinerary: itinerary(&[
                &["Arrival", "French Quarter Walk", "Promenade Beach"],
                &["Auroville Visit", "Matrimandir", "Local Markets"],
                &["Paradise Beach", "Chunnambar Boat House"],
                &["Heritage Buildings", "Bharathi Park"],
                &["Shopping", "Departure"],
            ]),
        },
        Trip {
            id: 2,
            destination: "Paris, France".to_string(),
            dates: "Dec 15 - Dec 22, 2024".to_string(),
            status: TripStatus::Upcoming,
            image: "/placeholder.svg".to_string(),
            attractions: 18,
            budget: "€2,400".to_string(),
            stays: vec![
                stay("Hotel Louvre", 4, "€800"),
                stay("Montmartre Boutique", 3, "€600"),
            ],
            itinerary: itinerary(&[
                &["Arrival", "Eiffel Tower", "Seine River Cruise"],
                &["Louvre Museum", "Champs-Élysées"],
                &["Versailles Day Trip"],
                &["Montmartre", "Sacré-Cœur"],
                &["Notre-Dame", "Latin Quarter"],
                &["Musée d'Orsay", "Shopping"],
                &["Arc de Triomphe", "Departure"],
            ]),
        },
        Trip {
            id: 3,
            destination: "Tokyo, Japan".to_string(),
            dates: "Aug 10 - Aug 17, 2024".to_string(),
            status: TripStatus::Completed,
            image: "/placeholder.svg".to_string(),
            attractions: 25,
            budget: "¥180,000".to_string(),
            stays: vec![
                stay("Tokyo Station Hotel", 4, "¥80,000"),
                stay("Shibuya Sky Hotel", 3, "¥70,000"),
            ],
            itinerary: itinerary(&[
                &["Arrival", "Shibuya Crossing", "Harajuku"],
                &["Tokyo Skytree", "Asakusa Temple"],
                &["Tsukiji Market", "Imperial Palace"],
                &["Akihabara", "Tokyo Station"],
                &["Ueno Park", "Tokyo National Museum"],
                &["Ginza Shopping", "Tokyo Tower"],
                &["Meiji Shrine", "Departure"],
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_trip_ids_unique() {
        let trips = user_trips();
        let ids: HashSet<u32> = trips.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), trips.len());
    }

    #[test]
    fn test_itinerary_days_sequential() {
        for trip in user_trips() {
            let days: Vec<u32> = trip.itinerary.iter().map(|d| d.day).collect();
            let expected: Vec<u32> = (1..=trip.itinerary.len() as u32).collect();
            assert_eq!(days, expected, "trip {}", trip.id);
        }
    }

    #[test]
    fn test_stats_are_fixed_summary() {
        let stats = user_stats();
        assert_eq!(stats.total_trips, 8);
        assert_eq!(stats.countries_visited, 12);
        assert_eq!(stats.total_budget, "₹2,50,000");
        assert_eq!(stats.favorite_destination, "Europe");
        // Summary is not derived from the listed trips.
        assert_ne!(stats.total_trips as usize, user_trips().len());
    }
}
