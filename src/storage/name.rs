//! File name handling
//!
//! A [`FileName`] is a validated single path component. It can only ever
//! resolve to a direct child of the storage root.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, StashError};

/// Longest accepted name in bytes (NAME_MAX on common filesystems)
pub const MAX_NAME_LEN: usize = 255;

/// Prefix reserved for in-flight temporary files
pub const TEMP_PREFIX: &str = ".filestash-tmp";

/// A validated stored-file name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validate a caller-supplied name
    ///
    /// Rejects anything that is not exactly one normal path component:
    /// empty names, `.` and `..`, absolute paths, separators (either slash),
    /// NUL bytes, over-long names and the temporary-file prefix.
    pub fn parse(name: &str) -> Result<Self> {
        let invalid = |reason| StashError::InvalidName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(invalid("name is too long"));
        }
        if name.contains('\0') {
            return Err(invalid("name contains a NUL byte"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name contains a path separator"));
        }
        if name == "." || name == ".." {
            return Err(invalid("name refers to a directory"));
        }
        if name.starts_with(TEMP_PREFIX) {
            return Err(invalid("name uses a reserved prefix"));
        }

        // Catches platform prefixes such as `C:` that contain no separator.
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self(name.to_string())),
            _ => Err(invalid("name escapes the storage directory")),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of this file under `root`
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.0)
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FileName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
