//! Results of dispatching and routing a task.

use super::{AgentResponse, TaskRunId};
use crate::capability::domain::CapabilityName;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// What the dispatcher did with a coordinator response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    delegated_to: Option<CapabilityName>,
    response: AgentResponse,
}

impl DispatchOutcome {
    /// Records that `capability` handled the task and produced `response`.
    #[must_use]
    pub const fn delegated(capability: CapabilityName, response: AgentResponse) -> Self {
        Self {
            delegated_to: Some(capability),
            response,
        }
    }

    /// Records that no candidate was named and the coordinator reply stands.
    #[must_use]
    pub const fn answered_directly(response: AgentResponse) -> Self {
        Self {
            delegated_to: None,
            response,
        }
    }

    /// Returns the capability that handled the task, if any.
    #[must_use]
    pub const fn delegated_to(&self) -> Option<&CapabilityName> {
        self.delegated_to.as_ref()
    }

    /// Returns the final reply.
    #[must_use]
    pub const fn response(&self) -> &AgentResponse {
        &self.response
    }

    /// Splits the outcome into its delegation target and reply.
    #[must_use]
    pub fn into_parts(self) -> (Option<CapabilityName>, AgentResponse) {
        (self.delegated_to, self.response)
    }
}

/// Completed task run as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    run_id: TaskRunId,
    task: String,
    delegated_to: Option<CapabilityName>,
    response: AgentResponse,
    completed_at: DateTime<Utc>,
}

impl TaskOutcome {
    /// Builds the outcome of `run_id`, stamped with the clock's current time.
    #[must_use]
    pub fn new(
        run_id: TaskRunId,
        task: impl Into<String>,
        dispatch: DispatchOutcome,
        clock: &impl Clock,
    ) -> Self {
        let (delegated_to, response) = dispatch.into_parts();
        Self {
            run_id,
            task: task.into(),
            delegated_to,
            response,
            completed_at: clock.utc(),
        }
    }

    /// Returns the run identifier.
    #[must_use]
    pub const fn run_id(&self) -> TaskRunId {
        self.run_id
    }

    /// Returns the task text as submitted.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the capability that handled the task, if any.
    #[must_use]
    pub const fn delegated_to(&self) -> Option<&CapabilityName> {
        self.delegated_to.as_ref()
    }

    /// Returns the final reply with its speaker.
    #[must_use]
    pub const fn response(&self) -> &AgentResponse {
        &self.response
    }

    /// Returns the result text.
    #[must_use]
    pub fn result(&self) -> &str {
        self.response.content()
    }

    /// Returns when the run completed.
    #[must_use]
    pub const fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }
}
