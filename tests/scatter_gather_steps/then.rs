//! Then steps for scatter-gather BDD scenarios.

use super::world::DispatchWorld;
use gropius::dispatch::domain::DispatchError;
use rstest_bdd_macros::then;

#[then("the dispatch succeeds with {count:usize} merged entries")]
fn dispatch_succeeds_with(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let merged = world.aggregated()?.merged().len();
    if merged != count {
        return Err(eyre::eyre!("expected {count} merged entries, found {merged}"));
    }
    Ok(())
}

#[then(r#"server "{name}" is recorded as "{status}""#)]
fn server_recorded_as(
    world: &DispatchWorld,
    name: String,
    status: String,
) -> Result<(), eyre::Report> {
    let server = world.server(&name)?;
    let partial = world
        .aggregated()?
        .partial_for(server.name())
        .ok_or_else(|| eyre::eyre!("no partial result recorded for '{name}'"))?;
    if partial.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected '{name}' to be {status}, found {}",
            partial.status()
        ));
    }
    Ok(())
}

#[then("no partial results are recorded")]
fn no_partials(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let partials = world.aggregated()?.partials().len();
    if partials != 0 {
        return Err(eyre::eyre!("expected no partial results, found {partials}"));
    }
    Ok(())
}

#[then("the dispatch fails because discovery is unavailable")]
fn dispatch_fails_with_discovery(world: &DispatchWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(DispatchError::DiscoveryUnavailable(_))) => Ok(()),
        other => Err(eyre::eyre!("expected discovery failure, got {other:?}")),
    }
}

#[then("no server received a request")]
fn no_server_requested(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let recorded = world
        .host
        .recorded_requests()
        .map_err(|err| eyre::eyre!("could not read recorded requests: {err}"))?;
    if !recorded.is_empty() {
        return Err(eyre::eyre!("expected no requests, found {}", recorded.len()));
    }
    Ok(())
}
