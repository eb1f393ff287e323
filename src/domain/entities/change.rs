//! FileChange entity - one ordered modification of a file's value
//!
//! A change targets a file by exact path. It is gated by its own predicate
//! and may look at the other definitions of the run while reducing.

use std::fmt;

use super::definition::{SiblingDefinition, Value};
use crate::domain::value_objects::{ChangeOptions, Predicate, Priority};

/// Arguments handed to a reducer
#[derive(Debug)]
pub struct ReducerArgs<'a, T, M = ()> {
    /// Value accumulated so far
    pub previous_value: T,
    /// Every other definition of the run, in input order
    pub other_definitions: &'a [SiblingDefinition<M>],
}

type Step<M> = Box<dyn Fn(Value, &[SiblingDefinition<M>]) -> Option<Value>>;

/// A content change contributed independently of the file's definition
pub struct FileChange<M = ()> {
    path: String,
    priority: Priority,
    step: Step<M>,
}

impl<M: 'static> FileChange<M> {
    /// Create a change whose reducer sees sibling definitions
    pub fn reducing<T: 'static>(
        path: impl Into<String>,
        predicate: Predicate<T>,
        reducer: impl Fn(ReducerArgs<'_, T, M>) -> T + 'static,
    ) -> Self {
        let step: Step<M> = Box::new(move |value: Value, others: &[SiblingDefinition<M>]| {
            predicate.narrow(&*value)?;
            let previous_value = *value.downcast::<T>().ok()?;
            let next = reducer(ReducerArgs {
                previous_value,
                other_definitions: others,
            });
            Some(Box::new(next) as Value)
        });

        Self {
            path: path.into(),
            priority: Priority::default(),
            step,
        }
    }

    /// Create a change that only maps the previous value
    pub fn replacing<T: 'static>(
        path: impl Into<String>,
        predicate: Predicate<T>,
        replacer: impl Fn(T) -> T + 'static,
    ) -> Self {
        Self::reducing(path, predicate, move |args| replacer(args.previous_value))
    }
}

impl<M> FileChange<M> {
    /// Apply options, substituting the default priority when unset
    pub fn with_options(mut self, options: ChangeOptions) -> Self {
        self.priority = options.resolved_priority();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Gate `value` with the predicate, then reduce it
    ///
    /// `None` means the predicate refused; the reducer was not called.
    pub(crate) fn apply(&self, value: Value, others: &[SiblingDefinition<M>]) -> Option<Value> {
        (self.step)(value, others)
    }
}

impl<M> fmt::Debug for FileChange<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileChange")
            .field("path", &self.path)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}
