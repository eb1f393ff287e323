//! Reduction of one file
//!
//! Per file the state machine is
//! `Seed -> Reducing (one step per change) -> Validating -> Serialized`.
//! Any refusal is terminal: later changes and the serializer never run.

use crate::domain::entities::{FileChange, FileContent, SiblingDefinition, Value};
use crate::error::{GenerateError, GenerateResult};

/// Fold `initial` through `changes`, gating every step
pub(crate) fn reduce<M>(
    path: &str,
    initial: Value,
    changes: &[&FileChange<M>],
    others: &[SiblingDefinition<M>],
) -> GenerateResult<Value> {
    let mut value = initial;

    for (step, change) in changes.iter().enumerate() {
        value = change.apply(value, others).ok_or_else(|| {
            tracing::debug!(path, step, "change refused the accumulated value");
            GenerateError::IncompatibleForChange {
                path: path.to_string(),
            }
        })?;
        tracing::trace!(path, step, priority = ?change.priority(), "applied change");
    }

    Ok(value)
}

/// Check the final value against the content's own predicate and serialize
pub(crate) fn render(path: &str, content: &FileContent, value: &Value) -> GenerateResult<String> {
    content.render(&**value).ok_or_else(|| {
        tracing::debug!(path, "final value refused by the definition");
        GenerateError::MalformedForSerialization {
            path: path.to_string(),
        }
    })
}

/// Seed, reduce and render one file
pub(crate) fn build<M>(
    path: &str,
    content: &FileContent,
    changes: &[&FileChange<M>],
    others: &[SiblingDefinition<M>],
) -> GenerateResult<String> {
    let value = reduce(path, content.seed(), changes, others)?;
    render(path, content, &value)
}
