//! Given steps for file edit BDD scenarios.

use super::world::EditWorld;
use eyre::WrapErr;
use gropius::workspace::domain::WorkspacePath;
use rstest_bdd_macros::given;

#[given(r#"a workspace file "{path}" containing "{contents}""#)]
fn workspace_file(
    world: &mut EditWorld,
    path: String,
    contents: String,
) -> Result<(), eyre::Report> {
    let target = WorkspacePath::new(path).wrap_err("parse workspace path")?;
    world
        .store
        .insert(target.clone(), contents)
        .wrap_err("seed workspace file")?;
    world.target = Some(target);
    Ok(())
}

#[given(r#"no workspace file "{path}""#)]
fn no_workspace_file(world: &mut EditWorld, path: String) -> Result<(), eyre::Report> {
    world.target = Some(WorkspacePath::new(path).wrap_err("parse workspace path")?);
    Ok(())
}
