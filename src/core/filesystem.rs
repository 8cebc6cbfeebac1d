//! Host filesystem operations.
//!
//! Commands never call `std::fs` directly; they go through [`FileSystem`] so
//! that each operation is one call that either succeeds or returns an
//! `io::Error`. [`HostFs`] is the implementation backed by the real disk.

use std::collections::VecDeque;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::thread;

/// Directory entry returned by [`FileSystem::list_directory`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    /// File size in bytes; `None` for directories
    pub size: Option<u64>,
}

impl DirEntry {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Outcome of [`FileSystem::make_directory`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MakeDirOutcome {
    Created,
    /// Directory was already there; nothing was done.
    AlreadyExists,
}

/// Filesystem operations available to commands.
pub trait FileSystem {
    /// List a directory, sorted for display.
    fn list_directory(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Create a single directory. Parents must already exist.
    fn make_directory(&self, path: &Path) -> io::Result<MakeDirOutcome>;

    /// Remove a directory, which must be empty.
    fn remove_empty_directory(&self, path: &Path) -> io::Result<()>;

    /// Create an empty file. Fails if anything already exists at `path`.
    fn create_file(&self, path: &Path) -> io::Result<()>;

    fn delete_file(&self, path: &Path) -> io::Result<()>;

    /// Hand a file to the desktop's default application.
    fn open_with_default_app(&self, path: &Path) -> io::Result<()>;

    /// Breadth-first search for a file named exactly `name` below `root`.
    fn find_file(&self, root: &Path, name: &str) -> io::Result<Option<PathBuf>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostFs;

impl FileSystem for HostFs {
    fn list_directory(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut items = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // Follows symlinks so a link to a directory lists as one.
            let meta = match fs::metadata(entry.path()) {
                Ok(meta) => meta,
                Err(err) => {
                    log::debug!("ls: cannot stat {}: {}", entry.path().display(), err);
                    entry.metadata()?
                }
            };
            items.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: meta.is_dir(),
                size: (!meta.is_dir()).then(|| meta.len()),
            });
        }
        sort_entries(&mut items);
        Ok(items)
    }

    fn make_directory(&self, path: &Path) -> io::Result<MakeDirOutcome> {
        if path.is_dir() {
            return Ok(MakeDirOutcome::AlreadyExists);
        }
        fs::create_dir(path)?;
        Ok(MakeDirOutcome::Created)
    }

    fn remove_empty_directory(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn open_with_default_app(&self, path: &Path) -> io::Result<()> {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "the specified file does not exist",
            ));
        }
        let child = opener(path).spawn().map_err(|err| {
            io::Error::new(
                err.kind(),
                format!("no application could be launched for this file ({})", err),
            )
        })?;
        log::debug!("launched opener pid {} for {}", child.id(), path.display());
        reap(child);
        Ok(())
    }

    fn find_file(&self, root: &Path, name: &str) -> io::Result<Option<PathBuf>> {
        let target = OsStr::new(name);
        let mut queue = VecDeque::from([root.to_path_buf()]);

        while let Some(dir) = queue.pop_front() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                // The search root itself must be readable.
                Err(err) if dir.as_path() == root => return Err(err),
                Err(err) => {
                    log::debug!("find: skipping {}: {}", dir.display(), err);
                    continue;
                }
            };

            let mut entries: Vec<fs::DirEntry> = entries
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        log::debug!("find: skipping entry in {}: {}", dir.display(), err);
                        None
                    }
                })
                .collect();
            entries.sort_by_key(|entry| entry.file_name());

            for entry in entries {
                // file_type() does not follow symlinks, so linked
                // directories are never descended into.
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                if file_type.is_dir() {
                    queue.push_back(entry.path());
                } else if entry.file_name() == target {
                    return Ok(Some(entry.path()));
                }
            }
        }

        Ok(None)
    }
}

/// Sort: directories first, then regular files, hidden entries last within
/// each group, alphabetical within the same category.
pub fn sort_entries(items: &mut [DirEntry]) {
    items.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.is_hidden().cmp(&b.is_hidden()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> process::Command {
    let mut cmd = process::Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn opener(path: &Path) -> process::Command {
    let mut cmd = process::Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener(path: &Path) -> process::Command {
    let mut cmd = process::Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Wait for `child` on a detached thread so it does not linger as a zombie.
fn reap(mut child: process::Child) -> thread::JoinHandle<io::Result<process::ExitStatus>> {
    thread::spawn(move || {
        let status = child.wait();
        match &status {
            Ok(status) => log::debug!("opener pid {} exited with {}", child.id(), status),
            Err(err) => log::warn!("failed to wait for opener pid {}: {}", child.id(), err),
        }
        status
    })
}
