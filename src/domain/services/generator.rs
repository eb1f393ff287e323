//! File generator
//!
//! Orchestrates a whole run: every path is checked, definitions are
//! indexed for uniqueness, and only then is any file reduced. The run
//! either returns every generated file or a single error.

use std::collections::HashSet;

use crate::domain::entities::{
    FileChange, FileContent, FileDefinition, GeneratedFile, SiblingDefinition,
};
use crate::domain::value_objects::check_path;
use crate::error::{GenerateError, GenerateResult};

use super::change_order::select;
use super::reducer::build;

/// Input of a multi-file run
#[derive(Debug)]
pub struct GeneratorConfig<M = ()> {
    pub definitions: Vec<FileDefinition<M>>,
    pub content_changes: Vec<FileChange<M>>,
}

impl<M> Default for GeneratorConfig<M> {
    fn default() -> Self {
        Self {
            definitions: Vec::new(),
            content_changes: Vec::new(),
        }
    }
}

impl<M> GeneratorConfig<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_definitions(mut self, definitions: Vec<FileDefinition<M>>) -> Self {
        self.definitions = definitions;
        self
    }

    pub fn with_content_changes(mut self, content_changes: Vec<FileChange<M>>) -> Self {
        self.content_changes = content_changes;
        self
    }
}

/// Generate every definition that has content
///
/// Output order follows definition order. Definitions without content
/// produce nothing but are still checked and still visible as siblings.
pub fn generate_files<M: Clone>(
    config: &GeneratorConfig<M>,
) -> GenerateResult<Vec<GeneratedFile>> {
    let definition_paths = config.definitions.iter().map(FileDefinition::path);
    let change_paths = config.content_changes.iter().map(FileChange::path);
    check_paths(definition_paths.chain(change_paths))?;

    let mut seen = HashSet::new();
    for definition in &config.definitions {
        if !seen.insert(definition.path()) {
            return Err(GenerateError::DuplicateDefinition {
                path: definition.path().to_string(),
            });
        }
    }

    let siblings: Vec<SiblingDefinition<M>> =
        config.definitions.iter().map(FileDefinition::sibling).collect();

    let mut generated = Vec::new();
    for (index, definition) in config.definitions.iter().enumerate() {
        let Some(content) = definition.content() else {
            continue;
        };

        let others = other_definitions(&siblings, index);
        let changes = select(&config.content_changes, definition.path());
        tracing::debug!(
            path = definition.path(),
            changes = changes.len(),
            "generating file"
        );

        let data = build(definition.path(), content, &changes, &others)?;
        generated.push(GeneratedFile::new(definition.path(), data));
    }

    tracing::debug!(files = generated.len(), "generation finished");
    Ok(generated)
}

/// Generate a single file's text from its content and a pool of changes
///
/// Changes aimed at other paths are ignored after their paths are
/// checked. Reducers see no siblings.
pub fn generate_content<M>(
    path: &str,
    content: &FileContent,
    changes: &[FileChange<M>],
) -> GenerateResult<String> {
    check_paths(std::iter::once(path).chain(changes.iter().map(FileChange::path)))?;

    let selected = select(changes, path);
    tracing::debug!(path, changes = selected.len(), "generating content");
    build(path, content, &selected, &[])
}

fn check_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> GenerateResult<()> {
    for path in paths {
        check_path(path).map_err(|error| GenerateError::from_path_error(error, path))?;
    }
    Ok(())
}

fn other_definitions<M: Clone>(
    siblings: &[SiblingDefinition<M>],
    index: usize,
) -> Vec<SiblingDefinition<M>> {
    siblings
        .iter()
        .enumerate()
        .filter(|(other, _)| *other != index)
        .map(|(_, sibling)| sibling.clone())
        .collect()
}
