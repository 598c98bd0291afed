//! Storage Module
//!
//! Persists stored files as plain files directly under the storage root.
//!
//! ## Responsibilities
//! - Validate file names so they cannot leave the storage root
//! - Durable, atomic saves (temp file + fsync + rename + directory fsync)
//! - Whole-file reads and single-file deletes
//! - Cleanup of temporary files left by interrupted saves
//! - Per-name mutual exclusion for callers
//!
//! ## Directory Layout
//! ```text
//! {storage_dir}/
//!   ├── a.txt
//!   ├── report.pdf
//!   └── .filestash-tmp-<pid>-<n>   (while a save is in flight; leftovers removed on open)
//! ```

mod name;
mod locks;
mod store;

pub use name::{FileName, MAX_NAME_LEN, TEMP_PREFIX};
pub use locks::{NameGuard, NameLocks};
pub use store::FileStore;
