//! Change Priority Value Object
//!
//! Insertion order decides when a change runs. Priority is a coarse
//! override on top of it: `Early` changes run before `Normal` ones, which
//! run before `Late` ones, and order inside each group is preserved.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Priority of a content change
///
/// Serialized as the integers `-1`, `0` and `1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "i8", into = "i8")]
pub enum Priority {
    Early,
    #[default]
    Normal,
    Late,
}

/// Error for an integer outside `-1..=1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPriority(pub i8);

impl fmt::Display for InvalidPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "priority must be -1, 0 or 1, got {}", self.0)
    }
}

impl std::error::Error for InvalidPriority {}

impl TryFrom<i8> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Priority::Early),
            0 => Ok(Priority::Normal),
            1 => Ok(Priority::Late),
            other => Err(InvalidPriority(other)),
        }
    }
}

impl From<Priority> for i8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Early => -1,
            Priority::Normal => 0,
            Priority::Late => 1,
        }
    }
}

/// Options attached to a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeOptions {
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl ChangeOptions {
    /// The priority with the default substituted
    pub fn resolved_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}
