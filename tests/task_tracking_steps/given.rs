//! Given steps for task tracking BDD scenarios.

use super::world::{TrackingWorld, sample_batch};
use rstest_bdd_macros::given;
use serde_json::json;

#[given("a raw batch with tasks 1, 2 and 4")]
fn raw_sample_batch(world: &mut TrackingWorld) {
    world.raw = Some(sample_batch());
}

#[given("a raw batch that is not a list")]
fn raw_object_batch(world: &mut TrackingWorld) {
    world.raw = Some(json!({ "id": 1, "title": "Lonely task" }));
}

#[given("a store seeded with tasks 1, 2 and 4")]
fn seeded_store(world: &mut TrackingWorld) -> Result<(), eyre::Report> {
    world.raw = Some(sample_batch());
    world.seed()?;
    world.diagnostics.clear();
    Ok(())
}
