//! Data models for trip requests and itineraries

pub mod location;
pub mod trip;

pub use location::Location;
pub use trip::{TripItinerary, TripRequest};
