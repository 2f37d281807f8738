//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use chrono::{Duration, SecondsFormat, Utc};
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Value, json};
use taskdesk::task::{
    adapters::memory::{InMemoryTaskRepository, RecordingDiagnostics},
    domain::{TaskId, TaskRecord},
    services::{TaskService, TaskServiceResult},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskService<InMemoryTaskRepository, DefaultClock, RecordingDiagnostics>;

/// Scenario world for task tracking behaviour tests.
pub struct TrackingWorld {
    pub raw: Option<Value>,
    pub service: Option<TestTaskService>,
    pub diagnostics: RecordingDiagnostics,
    pub last_create_result: Option<TaskServiceResult<TaskRecord>>,
    pub last_update_result: Option<TaskServiceResult<Option<TaskRecord>>>,
    pub last_filter: Vec<TaskId>,
    pub last_deadline_check: Option<Option<bool>>,
}

impl TrackingWorld {
    /// Creates a world with no store and empty scenario state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw: None,
            service: None,
            diagnostics: RecordingDiagnostics::new(),
            last_create_result: None,
            last_update_result: None,
            last_filter: Vec::new(),
            last_deadline_check: None,
        }
    }

    /// Seeds the store from the pending raw batch.
    pub fn seed(&mut self) -> Result<(), eyre::Report> {
        let raw = self
            .raw
            .take()
            .ok_or_else(|| eyre::eyre!("missing raw batch in scenario world"))?;
        self.service = Some(TaskService::from_raw(
            &raw,
            InMemoryTaskRepository::new(),
            Arc::new(DefaultClock),
            Arc::new(self.diagnostics.clone()),
        ));
        Ok(())
    }

    /// Returns the seeded service.
    pub fn service(&self) -> Result<&TestTaskService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("store has not been seeded"))
    }

    /// Returns the seeded service mutably.
    pub fn service_mut(&mut self) -> Result<&mut TestTaskService, eyre::Report> {
        self.service
            .as_mut()
            .ok_or_else(|| eyre::eyre!("store has not been seeded"))
    }
}

impl Default for TrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TrackingWorld {
    TrackingWorld::default()
}

/// Three tasks: a late finished one, an on-time finished one and an open one.
#[must_use]
pub fn sample_batch() -> Value {
    let upcoming = (Utc::now() + Duration::days(14)).to_rfc3339_opts(SecondsFormat::Secs, true);
    json!([
        {
            "id": 1,
            "title": "Set up repository",
            "createdAt": "2025-09-27T08:30:00Z",
            "status": "done",
            "priority": "high",
            "deadline": "2025-10-01"
        },
        {
            "id": 2,
            "title": "Design schema",
            "createdAt": "2025-09-28",
            "status": "done",
            "priority": "medium",
            "deadline": upcoming
        },
        {
            "id": 4,
            "title": "Write docs",
            "createdAt": "2025-09-28",
            "status": "todo",
            "priority": "low"
        }
    ])
}
