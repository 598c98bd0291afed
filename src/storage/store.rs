//! File Store
//!
//! Filesystem side of the three storage operations.
//!
//! ## Save pipeline
//! 1. Ensure the storage root exists
//! 2. Create a fresh temporary file next to the target
//! 3. Write all bytes, `sync_all`, close (close errors are reported)
//! 4. Rename over the target, then sync the directory
//!
//! A failure at any step removes the temporary file and leaves the previous
//! content of the target untouched.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{IoOp, Result, StashError};

use super::name::{FileName, TEMP_PREFIX};

/// Owns the storage root and performs filesystem I/O for stored files
///
/// Holds no per-file state; the filesystem is the only source of truth.
/// Callers serialize access per name (see [`super::NameLocks`]).
pub struct FileStore {
    /// Directory every stored file lives in
    root: PathBuf,

    /// Distinguishes temporary files created by this process
    next_temp_id: AtomicU64,
}

impl FileStore {
    /// Create a store rooted at `root`
    ///
    /// The directory is not touched until the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            next_temp_id: AtomicU64::new(0),
        }
    }

    /// Storage root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Durably store `data` under `name`, replacing any previous content
    pub fn save(&self, name: &FileName, data: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| StashError::StorageUnavailable {
            path: self.root.clone(),
            source,
        })?;

        let target = name.resolve(&self.root);
        let temp = self.temp_path();

        if let Err(e) = self.write_temp(&temp, data) {
            discard_temp(&temp);
            return Err(e);
        }

        if let Err(source) = fs::rename(&temp, &target) {
            discard_temp(&temp);
            return Err(StashError::io(IoOp::Rename, &target, source));
        }

        sync_dir(&self.root).map_err(|source| StashError::io(IoOp::Sync, &self.root, source))?;

        match fs::metadata(&target) {
            Ok(meta) => tracing::debug!("Stored {} ({} bytes)", name, meta.len()),
            Err(e) => tracing::warn!("Stored {} but could not stat it: {}", name, e),
        }

        Ok(())
    }

    /// Remove the file called `name`
    ///
    /// Succeeds once the file is unlinked. A failed directory sync afterwards
    /// is logged, not returned, so the removal may not yet be durable.
    pub fn delete(&self, name: &FileName) -> Result<()> {
        let path = name.resolve(&self.root);

        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(not_found(name)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(not_found(name)),
            Err(e) => return Err(StashError::io(IoOp::Stat, &path, e)),
        }

        fs::remove_file(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => not_found(name),
            _ => StashError::io(IoOp::Remove, &path, e),
        })?;

        if let Err(e) = sync_dir(&self.root) {
            tracing::warn!("Deleted {} but syncing {} failed: {}", name, self.root.display(), e);
        }

        tracing::debug!("Deleted {}", name);
        Ok(())
    }

    /// Read the whole content of the file called `name`
    pub fn extract(&self, name: &FileName) -> Result<Vec<u8>> {
        let path = name.resolve(&self.root);
        tracing::debug!("Attempting to open file: {}", path.display());

        let mut file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => not_found(name),
            _ => StashError::io(IoOp::Open, &path, e),
        })?;

        let meta = file
            .metadata()
            .map_err(|e| StashError::io(IoOp::Stat, &path, e))?;
        if !meta.is_file() {
            return Err(not_found(name));
        }

        let mut data = Vec::with_capacity(meta.len() as usize);
        file.read_to_end(&mut data)
            .map_err(|e| StashError::io(IoOp::Read, &path, e))?;

        Ok(data)
    }

    /// Remove temporary files left behind by saves that never finished
    ///
    /// Only safe while no save is in flight under this root. Returns how many
    /// files were removed; a missing root counts as nothing to do.
    pub fn remove_orphaned_temps(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => {
                return Err(StashError::StorageUnavailable {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let mut removed = 0;
        for entry in entries {
            let entry = entry.map_err(|e| StashError::io(IoOp::Stat, &self.root, e))?;
            if !entry.file_name().to_string_lossy().starts_with(TEMP_PREFIX) {
                continue;
            }
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }

            let path = entry.path();
            match fs::remove_file(&path) {
                Ok(()) => {
                    tracing::warn!("Removed orphaned temporary file {}", path.display());
                    removed += 1;
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(StashError::io(IoOp::Remove, &path, e)),
            }
        }

        if removed > 0 {
            sync_dir(&self.root)
                .map_err(|source| StashError::io(IoOp::Sync, &self.root, source))?;
        }
        Ok(removed)
    }

    /// Whether a stored file called `name` currently exists
    pub fn contains(&self, name: &FileName) -> bool {
        name.resolve(&self.root).is_file()
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn temp_path(&self) -> PathBuf {
        let id = self.next_temp_id.fetch_add(1, Ordering::Relaxed);
        self.root
            .join(format!("{}-{}-{}", TEMP_PREFIX, std::process::id(), id))
    }

    fn write_temp(&self, temp: &Path, data: &[u8]) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(temp)
            .map_err(|e| StashError::io(IoOp::Open, temp, e))?;

        file.write_all(data)
            .map_err(|e| StashError::io(IoOp::Write, temp, e))?;
        file.sync_all()
            .map_err(|e| StashError::io(IoOp::Sync, temp, e))?;
        close(file).map_err(|e| StashError::io(IoOp::Close, temp, e))
    }
}

fn not_found(name: &FileName) -> StashError {
    StashError::NotFound {
        name: name.to_string(),
    }
}

fn discard_temp(temp: &Path) {
    if let Err(e) = fs::remove_file(temp) {
        if e.kind() != io::ErrorKind::NotFound {
            tracing::warn!("Failed to remove temporary file {}: {}", temp.display(), e);
        }
    }
}

/// Close a file handle, reporting errors that `Drop` would swallow
#[cfg(unix)]
fn close(file: File) -> io::Result<()> {
    use std::os::unix::io::IntoRawFd;

    let fd = file.into_raw_fd();
    // SAFETY: `fd` was just released from an owned `File` and is closed exactly once.
    if unsafe { libc::close(fd) } == -1 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn close(file: File) -> io::Result<()> {
    drop(file);
    Ok(())
}

/// Make directory entry changes (create, rename, unlink) durable
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
