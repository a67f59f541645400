//! Given steps for scatter-gather BDD scenarios.

use std::time::Duration;

use super::world::{DispatchWorld, run_async};
use eyre::WrapErr;
use gropius::language_server::{
    adapters::ScriptedResponse,
    domain::{LanguageServerHandle, ServerCapabilities},
    services::RegisterLanguageServerRequest,
};
use rstest_bdd_macros::given;
use serde_json::json;

const SYMBOL_METHOD: &str = "workspace/symbol";

fn start_server(
    world: &mut DispatchWorld,
    name: &str,
    capabilities: ServerCapabilities,
) -> Result<(), eyre::Report> {
    let registration = run_async(
        world
            .registry
            .register(RegisterLanguageServerRequest::new(name, "rust", ["rs"])),
    )
    .wrap_err("register language server for scenario")?;
    let initialized = run_async(
        world
            .registry
            .mark_initialized(registration.id(), capabilities),
    )
    .wrap_err("initialize language server for scenario")?;
    let handle = LanguageServerHandle::snapshot(&initialized);
    world.servers.insert(name.to_owned(), handle);
    Ok(())
}

#[given(r#"a language server "{name}" advertising "{capability}""#)]
fn server_advertising(
    world: &mut DispatchWorld,
    name: String,
    capability: String,
) -> Result<(), eyre::Report> {
    let capabilities = ServerCapabilities::new().with_flag(capability);
    start_server(world, &name, capabilities)
}

#[given(r#"a language server "{name}" advertising no capabilities"#)]
fn server_without_capabilities(
    world: &mut DispatchWorld,
    name: String,
) -> Result<(), eyre::Report> {
    start_server(world, &name, ServerCapabilities::new())
}

#[given(r#"server "{name}" answers symbol "{symbol}" after {delay_ms:u64} ms"#)]
fn server_answers_symbol(
    world: &mut DispatchWorld,
    name: String,
    symbol: String,
    delay_ms: u64,
) -> Result<(), eyre::Report> {
    let server_name = world.server(&name)?.name().clone();
    let reply = json!([{
        "name": symbol,
        "kind": 12,
        "location": {
            "uri": "file:///projects/app/src/main.rs",
            "range": {
                "start": { "line": 0, "character": 0 },
                "end": { "line": 0, "character": 4 }
            }
        }
    }]);
    world
        .host
        .script(
            server_name,
            SYMBOL_METHOD,
            ScriptedResponse::reply_after(reply, Duration::from_millis(delay_ms)),
        )
        .wrap_err("script symbol reply")?;
    Ok(())
}

#[given(r#"server "{name}" never answers"#)]
fn server_never_answers(world: &mut DispatchWorld, name: String) -> Result<(), eyre::Report> {
    let server_name = world.server(&name)?.name().clone();
    world
        .host
        .script(server_name, SYMBOL_METHOD, ScriptedResponse::Hang)
        .wrap_err("script hanging server")?;
    Ok(())
}

#[given(r#"server "{name}" has exited"#)]
fn server_has_exited(world: &mut DispatchWorld, name: String) -> Result<(), eyre::Report> {
    let server_id = world.server(&name)?.id();
    world
        .host
        .terminate(server_id)
        .wrap_err("terminate language server process")?;
    Ok(())
}

#[given("the registry is unavailable")]
fn registry_unavailable(world: &mut DispatchWorld) {
    world.discovery.go_offline();
}
