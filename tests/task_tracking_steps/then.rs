//! Then steps for task tracking BDD scenarios.

use super::world::TrackingWorld;
use rstest_bdd_macros::then;
use taskdesk::task::domain::{Diagnostic, TaskId};

fn parse_ids(ids: &str) -> Result<Vec<TaskId>, eyre::Report> {
    ids.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| -> Result<TaskId, eyre::Report> {
            Ok(TaskId::new(part.trim().parse()?))
        })
        .collect()
}

fn matches_label(diagnostic: &Diagnostic, label: &str) -> bool {
    match label {
        "status defaulted" => matches!(diagnostic, Diagnostic::StatusDefaulted { .. }),
        "task not found" => matches!(diagnostic, Diagnostic::TaskNotFound { .. }),
        "invalid batch shape" => matches!(diagnostic, Diagnostic::InvalidBatchShape),
        _ => false,
    }
}

#[then(r#"the store holds tasks "{ids}" in order"#)]
fn store_holds(world: &TrackingWorld, ids: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&ids)?;
    let actual: Vec<TaskId> = world
        .service()?
        .records()
        .iter()
        .map(|record| record.id())
        .collect();
    eyre::ensure!(actual == expected, "expected {expected:?}, found {actual:?}");
    Ok(())
}

#[then("the store is empty")]
fn store_is_empty(world: &TrackingWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(world.service()?.is_empty(), "expected an empty store");
    Ok(())
}

#[then("no diagnostics were reported")]
fn no_diagnostics(world: &TrackingWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        world.diagnostics.entries()
    );
    Ok(())
}

#[then(r#"a "{label}" diagnostic was reported"#)]
fn diagnostic_reported(world: &TrackingWorld, label: String) -> Result<(), eyre::Report> {
    let entries = world.diagnostics.entries();
    eyre::ensure!(
        entries.iter().any(|entry| matches_label(entry, &label)),
        "no {label} diagnostic among {entries:?}"
    );
    Ok(())
}

#[then(r#"the new task has id {id:u64}, status "{status}" and priority "{priority}""#)]
fn new_task_fields(
    world: &TrackingWorld,
    id: u64,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    let task = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))?;

    eyre::ensure!(task.id() == TaskId::new(id), "unexpected id {}", task.id());
    eyre::ensure!(task.status().as_str() == status, "unexpected status");
    eyre::ensure!(task.priority().as_str() == priority, "unexpected priority");
    Ok(())
}

#[then("no task is returned")]
fn no_task_returned(world: &TrackingWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;
    let found = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected update error: {err}"))?;
    eyre::ensure!(found.is_none(), "expected no task, got {found:?}");
    Ok(())
}

#[then(r#"the filter returns tasks "{ids}""#)]
fn filter_returns(world: &TrackingWorld, ids: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&ids)?;
    eyre::ensure!(
        world.last_filter == expected,
        "expected {expected:?}, found {:?}",
        world.last_filter
    );
    Ok(())
}

#[then("the task was completed on time")]
fn completed_on_time(world: &TrackingWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.last_deadline_check == Some(Some(true)),
        "unexpected deadline check {:?}",
        world.last_deadline_check
    );
    Ok(())
}
