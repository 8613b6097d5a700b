//! Agent and task definitions for the planning pipeline
//!
//! An agent is a named role with a goal and a persona, bound to the shared
//! language-model client. A task is a natural-language instruction assigned
//! to one agent, executed once. The `TaskExecutor` seam keeps the pipeline
//! swappable for a test substitute.

use crate::TripAiError;
use crate::llm::OllamaClient;
use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, error, info};

/// A role-specialized agent description
#[derive(Debug, Clone, PartialEq)]
pub struct AgentDefinition {
    /// Role name, e.g. "Flight Search Specialist"
    pub role: String,
    /// What the agent is expected to achieve
    pub goal: String,
    /// Narrative persona given to the model
    pub backstory: String,
    /// Whether the agent may hand work to other agents (always false here)
    pub allow_delegation: bool,
}

impl AgentDefinition {
    /// Create an agent that keeps its work to itself
    #[must_use]
    pub fn new(role: &str, goal: &str, backstory: &str) -> Self {
        Self {
            role: role.to_string(),
            goal: goal.to_string(),
            backstory: backstory.to_string(),
            allow_delegation: false,
        }
    }

    /// The flight-search agent
    #[must_use]
    pub fn flight_specialist() -> Self {
        Self::new(
            "Flight Search Specialist",
            "Find the best flight options for travelers",
            "You are an expert in finding optimal flight routes and deals. \
             You consider factors like price, duration, layovers, and airline reputation.",
        )
    }

    /// The weather-forecast agent
    #[must_use]
    pub fn weather_analyst() -> Self {
        Self::new(
            "Weather Analyst",
            "Provide accurate weather forecasts and recommendations",
            "You are a meteorologist specialized in travel weather forecasting. \
             You analyze weather patterns and provide practical advice for travelers.",
        )
    }

    /// The attractions agent
    #[must_use]
    pub fn attractions_expert() -> Self {
        Self::new(
            "Local Attractions Expert",
            "Recommend personalized attractions and activities",
            "You are a knowledgeable travel guide with extensive experience. \
             You provide customized recommendations based on interests, budget, and weather.",
        )
    }
}

/// A single unit of work for one agent
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDefinition {
    /// Stable identifier, e.g. "flights"
    pub id: String,
    /// Natural-language instruction with trip parameters interpolated
    pub description: String,
    /// What shape of answer the agent should produce
    pub expected_output: String,
    /// The agent assigned to this task
    pub agent: AgentDefinition,
}

impl TaskDefinition {
    /// Create a task assigned to the given agent
    #[must_use]
    pub fn new(id: &str, description: String, expected_output: &str, agent: AgentDefinition) -> Self {
        Self {
            id: id.to_string(),
            description,
            expected_output: expected_output.to_string(),
            agent,
        }
    }

    /// Render the persona block and instruction into one completion prompt
    #[must_use]
    pub fn render_prompt(&self) -> String {
        format!(
            "You are {role}.\nGoal: {goal}\n{backstory}\n\nTask: {description}\n\nExpected output: {expected}\n",
            role = self.agent.role,
            goal = self.agent.goal,
            backstory = self.agent.backstory,
            description = self.description,
            expected = self.expected_output,
        )
    }
}

/// Output of one executed task
#[derive(Debug, Clone, PartialEq)]
pub struct TaskResult {
    /// Identifier of the task that produced this output
    pub task_id: String,
    /// Raw text returned by the agent
    pub output: String,
}

/// Narrow execution seam: run tasks in declared order, return the ordered
/// results or the first error. Production uses `SequentialExecutor`; tests
/// substitute their own implementation.
#[async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, tasks: &[TaskDefinition]) -> Result<Vec<TaskResult>>;
}

/// Runs tasks one after another against the shared Ollama client.
/// No parallelism, no retries; the first failure aborts the run.
pub struct SequentialExecutor {
    llm: OllamaClient,
}

impl SequentialExecutor {
    /// Create an executor over the given client
    #[must_use]
    pub fn new(llm: OllamaClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TaskExecutor for SequentialExecutor {
    async fn execute(&self, tasks: &[TaskDefinition]) -> Result<Vec<TaskResult>> {
        let mut results = Vec::with_capacity(tasks.len());

        for (index, task) in tasks.iter().enumerate() {
            info!(
                "Running task '{}' ({}/{}) with agent '{}'",
                task.id,
                index + 1,
                tasks.len(),
                task.agent.role
            );

            let prompt = task.render_prompt();
            debug!("Rendered prompt of {} characters", prompt.len());

            let output = self.llm.generate(&prompt).await.map_err(|e| {
                error!("Task '{}' failed: {e:#}", task.id);
                TripAiError::agent(format!("Task '{}' failed: {e:#}", task.id))
            })?;

            results.push(TaskResult {
                task_id: task.id.clone(),
                output,
            });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_agents_disallow_delegation() {
        for agent in [
            AgentDefinition::flight_specialist(),
            AgentDefinition::weather_analyst(),
            AgentDefinition::attractions_expert(),
        ] {
            assert!(!agent.allow_delegation);
            assert!(!agent.role.is_empty());
            assert!(!agent.goal.is_empty());
            assert!(!agent.backstory.is_empty());
        }
    }

    #[test]
    fn test_render_prompt_contains_persona_and_instruction() {
        let task = TaskDefinition::new(
            "flights",
            "Find flight options from New York to Paris.".to_string(),
            "Detailed flight recommendations.",
            AgentDefinition::flight_specialist(),
        );

        let prompt = task.render_prompt();
        assert!(prompt.contains("You are Flight Search Specialist."));
        assert!(prompt.contains("Goal: Find the best flight options for travelers"));
        assert!(prompt.contains("Task: Find flight options from New York to Paris."));
        assert!(prompt.contains("Expected output: Detailed flight recommendations."));
    }
}
