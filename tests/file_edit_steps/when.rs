//! When steps for file edit BDD scenarios.

use super::world::{EditWorld, first_line_edit};
use rstest_bdd_macros::when;

#[when(
    "characters {first_start:u32} to {first_end:u32} and {second_start:u32} to {second_end:u32} of the first line are replaced"
)]
fn replace_two_ranges(
    world: &mut EditWorld,
    first_start: u32,
    first_end: u32,
    second_start: u32,
    second_end: u32,
) -> Result<(), eyre::Report> {
    let target = world.target()?.clone();
    let edits = vec![
        first_line_edit(first_start, first_end, "x"),
        first_line_edit(second_start, second_end, "y"),
    ];
    world.last_result = Some(world.service.edit_file(&target, edits));
    Ok(())
}

#[when(r#"characters {start:u32} to {end:u32} of the first line are replaced with "{text}""#)]
fn replace_range(
    world: &mut EditWorld,
    start: u32,
    end: u32,
    text: String,
) -> Result<(), eyre::Report> {
    let target = world.target()?.clone();
    let edits = vec![first_line_edit(start, end, &text)];
    world.last_result = Some(world.service.edit_file(&target, edits));
    Ok(())
}

#[when("the returned undo edits are applied")]
fn apply_undo(world: &mut EditWorld) -> Result<(), eyre::Report> {
    let target = world.target()?.clone();
    let undo = match world.last_result.take() {
        Some(Ok(undo)) => undo,
        Some(Err(err)) => return Err(eyre::eyre!("previous edit failed: {err}")),
        None => return Err(eyre::eyre!("no previous edit in scenario world")),
    };
    world.last_result = Some(world.service.edit_file(&target, undo));
    Ok(())
}
