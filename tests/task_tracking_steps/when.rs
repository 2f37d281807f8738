//! When steps for task tracking BDD scenarios.

use super::world::TrackingWorld;
use rstest_bdd_macros::when;
use taskdesk::task::{
    domain::{Priority, Status, TaskId},
    services::{CreateTaskRequest, TaskFilter, TaskPatch},
};

#[when("the store is seeded from the batch")]
fn seed_from_batch(world: &mut TrackingWorld) -> Result<(), eyre::Report> {
    world.seed()
}

#[when(r#"a task titled "{title}" is created with status "{status}" and priority "{priority}""#)]
fn create_task(
    world: &mut TrackingWorld,
    title: String,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let request = CreateTaskRequest::new(title)
        .with_status(status)
        .with_priority(priority);
    let result = world.service_mut()?.create(request);
    world.last_create_result = Some(result);
    Ok(())
}

#[when(r#"task {id:u64} is renamed to "{title}""#)]
fn rename_task(world: &mut TrackingWorld, id: u64, title: String) -> Result<(), eyre::Report> {
    let patch = TaskPatch::new().with_title(title);
    let result = world.service_mut()?.update(TaskId::new(id), &patch);
    world.last_update_result = Some(result);
    Ok(())
}

#[when("task {id:u64} is deleted")]
fn delete_task(world: &mut TrackingWorld, id: u64) -> Result<(), eyre::Report> {
    world.service_mut()?.delete(TaskId::new(id));
    Ok(())
}

#[when(r#"tasks are filtered by status "{status}" and priority "{priority}""#)]
fn filter_tasks(
    world: &mut TrackingWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let filter = TaskFilter::new()
        .with_status(Status::try_from(status.as_str())?)
        .with_priority(Priority::try_from(priority.as_str())?);
    let matches = world
        .service()?
        .filter(&filter)
        .into_iter()
        .map(|record| record.id())
        .collect();
    world.last_filter = matches;
    Ok(())
}

#[when("task {id:u64} is checked against its deadline")]
fn check_deadline(world: &mut TrackingWorld, id: u64) -> Result<(), eyre::Report> {
    let outcome = world.service()?.is_completed_before_deadline(TaskId::new(id));
    world.last_deadline_check = Some(outcome);
    Ok(())
}
