//! Shared world state for file edit BDD scenarios.

use std::sync::Arc;

use gropius::workspace::{
    adapters::InMemoryFileStore,
    domain::{Position, Range, TextEdit, WorkspacePath},
    services::{FileEditError, FileEditService},
};
use rstest::fixture;

/// Scenario world for file edit behaviour tests.
pub struct EditWorld {
    /// Backing file store.
    pub store: Arc<InMemoryFileStore>,
    /// Edit service under test.
    pub service: FileEditService<InMemoryFileStore>,
    /// File targeted by the scenario.
    pub target: Option<WorkspacePath>,
    /// Result of the last edit.
    pub last_result: Option<Result<Vec<TextEdit>, FileEditError>>,
}

impl EditWorld {
    /// Creates a world with an empty store.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryFileStore::new());
        Self {
            service: FileEditService::new(Arc::clone(&store)),
            store,
            target: None,
            last_result: None,
        }
    }

    /// Returns the scenario's target file.
    ///
    /// # Errors
    ///
    /// Returns an error when no target was set.
    pub fn target(&self) -> Result<&WorkspacePath, eyre::Report> {
        self.target
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no workspace file in scenario world"))
    }
}

impl Default for EditWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> EditWorld {
    EditWorld::default()
}

/// Builds an edit replacing `start..end` of the first line.
#[must_use]
pub fn first_line_edit(start: u32, end: u32, text: &str) -> TextEdit {
    TextEdit::new(
        Range::new(Position::new(0, start), Position::new(0, end)),
        text,
    )
}
