//! Application services for task tracking.

mod lifecycle;
mod requests;

pub use lifecycle::{TaskService, TaskServiceError, TaskServiceResult};
pub use requests::{CreateTaskRequest, TaskFilter, TaskPatch};
