//! `TripAI` - Multi-agent trip planning
//!
//! This library provides the core functionality for collecting trip
//! parameters and generating flight, weather, and attraction
//! recommendations through a fixed sequential pipeline of LLM-backed agents.

pub mod agents;
pub mod config;
pub mod error;
pub mod intake;
pub mod llm;
pub mod models;
pub mod planner;

// Re-export core types for public API
pub use agents::{AgentDefinition, SequentialExecutor, TaskDefinition, TaskExecutor, TaskResult};
pub use config::TripAiConfig;
pub use error::TripAiError;
pub use llm::OllamaClient;
pub use models::{Location, TripItinerary, TripRequest};
pub use planner::TripPlannerManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripAiError>;
