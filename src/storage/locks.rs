//! Per-name locks
//!
//! Serializes operations that address the same file name while leaving
//! different names independent.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};

use super::FileName;

/// Table of on-demand mutexes keyed by file name
///
/// ## Concurrency:
/// - `table`: short critical sections only (lookup / insert / remove)
/// - Per-name `Mutex<()>`: held for the whole filesystem phase of an operation
/// - An entry is removed once no guard holds or waits on it, so the table
///   only grows with the number of names currently in use
#[derive(Default)]
pub struct NameLocks {
    table: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

/// Exclusive hold on one name; released on drop
pub struct NameGuard<'a> {
    locks: &'a NameLocks,
    name: String,
    guard: Option<ArcMutexGuard<RawMutex, ()>>,
}

impl NameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block until `name` is free, then hold it
    pub fn lock(&self, name: &FileName) -> NameGuard<'_> {
        // Clone under the table lock so release can tell a waiter is present.
        let entry = {
            let mut table = self.table.lock();
            Arc::clone(table.entry(name.as_str().to_string()).or_default())
        };

        NameGuard {
            locks: self,
            name: name.as_str().to_string(),
            guard: Some(entry.lock_arc()),
        }
    }

    /// Number of names currently held or waited on
    pub fn active(&self) -> usize {
        self.table.lock().len()
    }
}

impl Drop for NameGuard<'_> {
    fn drop(&mut self) {
        // Release the name before touching the table.
        drop(self.guard.take());

        let mut table = self.locks.table.lock();
        if let Some(entry) = table.get(&self.name) {
            if Arc::strong_count(entry) == 1 {
                table.remove(&self.name);
            }
        }
    }
}
