//! Trip planning manager
//!
//! Assembles the three fixed agent/task definitions from a trip request,
//! hands them to the sequential executor, and wraps the raw results into a
//! `TripItinerary`. The manager owns the only connection to the model
//! endpoint and verifies it once at construction time.

use crate::TripAiConfig;
use crate::TripAiError;
use crate::agents::{AgentDefinition, SequentialExecutor, TaskDefinition, TaskExecutor, TaskResult};
use crate::llm::OllamaClient;
use crate::models::{TripItinerary, TripRequest};
use anyhow::Result;
use std::collections::HashMap;
use tracing::{debug, error, info};

/// Task identifier for flight recommendations
pub const TASK_FLIGHTS: &str = "flights";
/// Task identifier for the weather forecast
pub const TASK_WEATHER: &str = "weather";
/// Task identifier for attraction suggestions
pub const TASK_ATTRACTIONS: &str = "attractions";

/// Manages the trip planning process with role-specialized agents
pub struct TripPlannerManager {
    executor: Box<dyn TaskExecutor>,
    flight_agent: AgentDefinition,
    weather_agent: AgentDefinition,
    attraction_agent: AgentDefinition,
}

impl TripPlannerManager {
    /// Create a manager backed by the configured Ollama endpoint.
    ///
    /// Issues one test completion to confirm the endpoint is reachable;
    /// any failure is logged and aborts construction.
    pub async fn new(config: &TripAiConfig) -> Result<Self> {
        let llm = OllamaClient::new(config.llm.clone())?;

        llm.verify_connection().await.map_err(|e| {
            error!("Error initializing TripPlannerManager: {e:#}");
            e
        })?;

        Ok(Self::with_executor(Box::new(SequentialExecutor::new(llm))))
    }

    /// Create a manager over an arbitrary executor. Used by tests to
    /// substitute the model endpoint; skips the connection check.
    #[must_use]
    pub fn with_executor(executor: Box<dyn TaskExecutor>) -> Self {
        Self {
            executor,
            flight_agent: AgentDefinition::flight_specialist(),
            weather_agent: AgentDefinition::weather_analyst(),
            attraction_agent: AgentDefinition::attractions_expert(),
        }
    }

    /// Build the three task definitions for a request, in execution order
    /// (flights, then weather, then attractions).
    #[must_use]
    pub fn assemble_tasks(&self, request: &TripRequest) -> Vec<TaskDefinition> {
        let destination = request.primary_destination();

        let flight_task = TaskDefinition::new(
            TASK_FLIGHTS,
            format!(
                "Find flight options from {} to {} for dates {} to {}. \
                 Consider a budget of ${:.2}. \
                 Provide detailed flight options including prices, times, and airlines.",
                request.origin.name,
                destination.name,
                request.start_date,
                request.end_date,
                request.budget,
            ),
            "Detailed flight recommendations including prices, times, and airlines.",
            self.flight_agent.clone(),
        );

        let weather_task = TaskDefinition::new(
            TASK_WEATHER,
            format!(
                "Analyze weather patterns and provide a forecast for {} during {} to {}. \
                 Include temperature ranges, precipitation chances, and practical packing \
                 recommendations.",
                destination.name, request.start_date, request.end_date,
            ),
            "Detailed weather forecast with temperatures, conditions, and packing advice.",
            self.weather_agent.clone(),
        );

        // References the weather forecast by name only; the tasks are
        // prompt-level siblings, not a data-dependent pipeline.
        let attraction_task = TaskDefinition::new(
            TASK_ATTRACTIONS,
            format!(
                "Recommend attractions and activities in {} based on interests: {}. \
                 Consider the weather forecast and a budget of ${:.2}. \
                 Provide detailed daily itinerary suggestions.",
                destination.name,
                request.interests.join(", "),
                request.budget,
            ),
            "Detailed daily itinerary with attractions, activities, and costs.",
            self.attraction_agent.clone(),
        );

        vec![flight_task, weather_task, attraction_task]
    }

    /// Create a complete trip itinerary using the specialized agents.
    ///
    /// Runs the three tasks sequentially and wraps their raw text outputs
    /// into the itinerary unchanged. Any execution failure is logged and
    /// propagated; no partial itinerary is produced.
    pub async fn create_itinerary(&self, request: &TripRequest) -> Result<TripItinerary> {
        info!(
            "Creating itinerary: {} -> {} ({})",
            request.origin.name,
            request.primary_destination().name,
            request.date_range()
        );

        let tasks = self.assemble_tasks(request);
        debug!("Assembled {} tasks", tasks.len());

        let results = self.executor.execute(&tasks).await.map_err(|e| {
            error!("Error creating itinerary: {e:#}");
            e
        })?;

        let flights = Self::take_output(&results, TASK_FLIGHTS)?;
        let weather = Self::take_output(&results, TASK_WEATHER)?;
        let attractions = Self::take_output(&results, TASK_ATTRACTIONS)?;

        info!("Itinerary complete with {} task results", results.len());

        Ok(TripItinerary::new(
            request.clone(),
            HashMap::from([("recommendations".to_string(), flights)]),
            HashMap::from([("forecast".to_string(), weather)]),
            HashMap::from([("suggestions".to_string(), attractions)]),
        ))
    }

    /// Pull one task's output from the executor results
    fn take_output(results: &[TaskResult], task_id: &str) -> Result<String> {
        results
            .iter()
            .find(|r| r.task_id == task_id)
            .map(|r| r.output.clone())
            .ok_or_else(|| {
                TripAiError::agent(format!("Executor returned no result for task '{task_id}'"))
                    .into()
            })
    }
}
