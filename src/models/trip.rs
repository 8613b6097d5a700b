//! Trip request and itinerary models

use crate::error::TripAiError;
use crate::models::Location;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A trip planning request with all parameters the agents need
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripRequest {
    /// Starting location
    pub origin: Location,
    /// Ordered list of destination locations
    pub destinations: Vec<Location>,
    /// Trip start date
    pub start_date: NaiveDate,
    /// Trip end date
    pub end_date: NaiveDate,
    /// Total trip budget in USD
    pub budget: f64,
    /// Traveler's interests, free text
    pub interests: Vec<String>,
}

impl TripRequest {
    /// Create a validated trip request.
    ///
    /// Rejects an empty destination list, an end date before the start date,
    /// and a negative budget.
    pub fn new(
        origin: Location,
        destinations: Vec<Location>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        budget: f64,
        interests: Vec<String>,
    ) -> crate::Result<Self> {
        if destinations.is_empty() {
            return Err(TripAiError::validation(
                "A trip request needs at least one destination",
            ));
        }

        if end_date < start_date {
            return Err(TripAiError::validation(format!(
                "End date {end_date} is before start date {start_date}"
            )));
        }

        if budget < 0.0 {
            return Err(TripAiError::validation(format!(
                "Budget cannot be negative, got {budget:.2}"
            )));
        }

        Ok(Self {
            origin,
            destinations,
            start_date,
            end_date,
            budget,
            interests,
        })
    }

    /// First destination; guaranteed to exist by construction
    #[must_use]
    pub fn primary_destination(&self) -> &Location {
        &self.destinations[0]
    }

    /// Trip length in nights
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Formatted date range, e.g. "2024-03-01 - 2024-03-10"
    #[must_use]
    pub fn date_range(&self) -> String {
        format!("{} - {}", self.start_date, self.end_date)
    }
}

/// A complete trip itinerary: the originating request plus three opaque
/// text payloads generated by the agents
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TripItinerary {
    /// Original trip request
    pub trip_request: TripRequest,
    /// Flight recommendations
    pub flights: HashMap<String, String>,
    /// Weather information
    pub weather_forecasts: HashMap<String, String>,
    /// Suggested attractions and activities
    pub attractions: HashMap<String, String>,
}

impl TripItinerary {
    /// Wrap the raw agent outputs into an itinerary. Pure pass-through:
    /// no parsing or transformation of the text content.
    #[must_use]
    pub fn new(
        trip_request: TripRequest,
        flights: HashMap<String, String>,
        weather_forecasts: HashMap<String, String>,
        attractions: HashMap<String, String>,
    ) -> Self {
        Self {
            trip_request,
            flights,
            weather_forecasts,
            attractions,
        }
    }

    /// Render the plain-text summary printed at the end of a run
    #[must_use]
    pub fn summary(&self) -> String {
        let request = &self.trip_request;
        let destinations = request
            .destinations
            .iter()
            .map(|d| d.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let mut summary = String::new();
        summary.push_str("Trip Itinerary:\n");
        summary.push_str("===============\n");
        summary.push_str(&format!("From: {}\n", request.origin.name));
        summary.push_str(&format!("To: {destinations}\n"));
        summary.push_str(&format!("Dates: {}\n", request.date_range()));
        summary.push_str(&format!("Budget: ${:.2}\n", request.budget));
        summary.push_str(&format!("Interests: {}\n", request.interests.join(", ")));

        for (title, section) in [
            ("Flights", &self.flights),
            ("Weather", &self.weather_forecasts),
            ("Attractions", &self.attractions),
        ] {
            summary.push_str(&format!("\n{title}:\n"));
            let mut keys: Vec<&String> = section.keys().collect();
            keys.sort();
            for key in keys {
                summary.push_str(&format!("[{key}] {}\n", section[key]));
            }
        }

        summary
    }
}
