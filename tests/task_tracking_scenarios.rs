//! Behaviour tests for seeding, editing and querying the task store.

mod task_tracking_steps;

use rstest_bdd_macros::scenario;
use task_tracking_steps::world::{TrackingWorld, world};

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Seed the store from a raw batch"
)]
fn seed_store(world: TrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Create a task with unknown vocabulary values"
)]
fn create_with_unknown_vocabulary(world: TrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Update a task that does not exist"
)]
fn update_missing_task(world: TrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Delete a task and list the rest"
)]
fn delete_and_list(world: TrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Filter by status and priority"
)]
fn filter_by_status_and_priority(world: TrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Check a completed task against its deadline"
)]
fn deadline_check(world: TrackingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_tracking.feature",
    name = "Malformed batch leaves the store empty"
)]
fn malformed_batch(world: TrackingWorld) {
    let _ = world;
}
