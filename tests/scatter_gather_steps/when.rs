//! When steps for scatter-gather BDD scenarios.

use std::time::Duration;

use super::world::{DispatchWorld, run_async};
use gropius::dispatch::domain::{DispatchRequest, QueryPayload};
use rstest_bdd_macros::when;

#[when(r#"symbols matching "{query}" are requested for "{target}" within {deadline_ms:u64} ms"#)]
fn request_symbols(
    world: &mut DispatchWorld,
    query: String,
    target: String,
    deadline_ms: u64,
) -> Result<(), eyre::Report> {
    let request = DispatchRequest::new(&target, QueryPayload::WorkspaceSymbol { query })
        .map_err(|err| eyre::eyre!("invalid dispatch request: {err}"))?;
    let deadline = Duration::from_millis(deadline_ms);
    let result = run_async(world.coordinator.dispatch_with_deadline(&request, deadline));
    world.last_result = Some(result);
    Ok(())
}
