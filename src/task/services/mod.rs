//! Application services for task assignment and lifecycle updates.

mod lifecycle;

pub use lifecycle::{
    AssignTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
};
