//! FileDefinition entity - a declared output file
//!
//! A definition names a path, optionally carries caller metadata, and
//! optionally carries typed content. Definitions without content produce
//! no output but stay visible to changes as siblings.

use std::any::Any;
use std::fmt;

use crate::domain::value_objects::Predicate;

/// Type-erased accumulated value of one file
pub(crate) type Value = Box<dyn Any>;

/// Typed seed value of a file plus its final gate and serializer
pub struct FileContent {
    seed: Box<dyn Fn() -> Value>,
    render: Box<dyn Fn(&dyn Any) -> Option<String>>,
    type_name: &'static str,
}

impl FileContent {
    /// Create content from an initial value, a predicate and a serializer
    ///
    /// The initial value is cloned at the start of every run, so the same
    /// definition can be generated repeatedly.
    pub fn new<T: Clone + 'static>(
        initial_value: T,
        predicate: Predicate<T>,
        serializer: impl Fn(&T) -> String + 'static,
    ) -> Self {
        Self {
            seed: Box::new(move || Box::new(initial_value.clone()) as Value),
            render: Box::new(move |value: &dyn Any| predicate.narrow(value).map(&serializer)),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) fn seed(&self) -> Value {
        (self.seed)()
    }

    /// Gate the final value with the predicate, then serialize it
    ///
    /// Returns `None` without calling the serializer when the gate fails.
    pub(crate) fn render(&self, value: &dyn Any) -> Option<String> {
        (self.render)(value)
    }
}

impl fmt::Debug for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileContent")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// A declared file
#[derive(Debug)]
pub struct FileDefinition<M = ()> {
    path: String,
    metadata: Option<M>,
    content: Option<FileContent>,
}

impl<M> FileDefinition<M> {
    /// Declare a file without metadata or content
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            metadata: None,
            content: None,
        }
    }

    /// Attach caller metadata
    pub fn with_metadata(mut self, metadata: M) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Attach typed content
    pub fn with_content(mut self, content: FileContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn metadata(&self) -> Option<&M> {
        self.metadata.as_ref()
    }

    pub fn content(&self) -> Option<&FileContent> {
        self.content.as_ref()
    }

    /// Project to the shape other files' changes may observe
    pub fn sibling(&self) -> SiblingDefinition<M>
    where
        M: Clone,
    {
        SiblingDefinition {
            path: self.path.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

/// Another file's declarative shape, content excluded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiblingDefinition<M = ()> {
    pub path: String,
    pub metadata: Option<M>,
}
