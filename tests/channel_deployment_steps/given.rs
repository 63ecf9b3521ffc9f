//! Given steps for channel deployment BDD scenarios.

use std::sync::Arc;

use super::world::{ChannelWorld, run_async};
use eyre::WrapErr;
use inlet::channel::{adapters::memory::InMemoryEventRepository, ports::EventRepository};
use rstest_bdd_macros::given;

#[given("an empty event repository")]
fn an_empty_repository(world: &mut ChannelWorld) -> Result<(), eyre::Report> {
    world.repository = Arc::new(InMemoryEventRepository::new());
    let existing = run_async(world.repository.list_deployments())
        .wrap_err("list deployments of a fresh repository")?;
    if !existing.is_empty() {
        return Err(eyre::eyre!("expected an empty repository"));
    }
    Ok(())
}

#[given(r#"a channel definition keyed "{key}""#)]
fn a_channel_keyed(world: &mut ChannelWorld, key: String) {
    world.key = Some(key);
}

#[given(r#"the resource name "{name}""#)]
fn the_resource_name(world: &mut ChannelWorld, name: String) {
    world.resource_name = Some(name);
}
