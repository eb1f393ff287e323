//! GeneratedFile entity - the rendered text of one definition
//!
//! GeneratedFiles are what a host tool writes to disk. The core never does
//! that itself.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A generated file ready to be written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    /// Relative, `/`-separated path
    path: String,
    /// Serialized content
    data: String,
}

impl GeneratedFile {
    pub fn new(path: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    /// SHA256 of the data, as `sha256:<hex>`
    ///
    /// Lets a host skip writing files whose content did not change.
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.data.as_bytes());
        format!("sha256:{:x}", hasher.finalize())
    }

    /// Split into `(path, data)`
    pub fn into_parts(self) -> (String, String) {
        (self.path, self.data)
    }
}
