//! Then steps for file edit BDD scenarios.

use super::world::EditWorld;
use gropius::workspace::{
    domain::TransformError, ports::WorkspaceFileStore, services::FileEditError,
};
use rstest_bdd_macros::then;

#[then(r#"the file now contains "{expected}""#)]
fn file_contains(world: &EditWorld, expected: String) -> Result<(), eyre::Report> {
    let bytes = world
        .store
        .read(world.target()?)
        .map_err(|err| eyre::eyre!("could not read workspace file: {err}"))?;
    let actual = String::from_utf8(bytes)?;
    if actual != expected {
        return Err(eyre::eyre!("expected '{expected}', found '{actual}'"));
    }
    Ok(())
}

#[then("the edit is rejected as overlapping")]
fn rejected_as_overlapping(world: &EditWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(FileEditError::Transform(TransformError::OverlappingEdits { .. }))) => Ok(()),
        other => Err(eyre::eyre!("expected overlapping edits error, got {other:?}")),
    }
}

#[then("the edit is rejected because the file is missing")]
fn rejected_as_missing(world: &EditWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(FileEditError::ResourceNotFound(_))) => Ok(()),
        other => Err(eyre::eyre!("expected missing file error, got {other:?}")),
    }
}
