//! The directory cursor.
//!
//! [`PathResolver`] holds the session's current directory and resolves user
//! supplied paths against it. Only [`PathResolver::change_directory`] looks
//! at the filesystem, and only to check that its target is a directory.

use std::path::{Path, PathBuf};

use crate::error::DirectoryError;
use crate::path::{PARENT, PathSegments, is_absolute, path_segments};

/// A resolved target path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolved {
    pub path: PathBuf,
    /// The input tried to climb above the root and was stopped there.
    pub clamped: bool,
}

impl Resolved {
    fn exact(path: PathBuf) -> Self {
        Self {
            path,
            clamped: false,
        }
    }
}

/// Current directory of one shell session.
///
/// Owned by the session that drives it; each session gets its own resolver.
#[derive(Clone, Debug)]
pub struct PathResolver {
    current: PathSegments,
}

impl PathResolver {
    /// Start at `start`, which is taken as-is and not checked against the
    /// filesystem. Relative starts are kept relative.
    pub fn new(start: &str) -> Self {
        Self {
            current: PathSegments::parse(start),
        }
    }

    /// Start at an existing directory.
    ///
    /// A relative `start` is made absolute against the process working
    /// directory, so the cursor always has a root to climb back to.
    pub fn from_path(start: &Path) -> Result<Self, DirectoryError> {
        let not_found = || DirectoryError::DirectoryNotFound {
            path: start.to_path_buf(),
        };
        if !start.is_dir() {
            return Err(not_found());
        }
        let absolute = std::path::absolute(start).map_err(|_| not_found())?;
        let text = absolute.to_str().ok_or_else(|| DirectoryError::NotUnicode {
            path: absolute.clone(),
        })?;
        Ok(Self {
            current: PathSegments::parse(text).normalize(),
        })
    }

    /// The current directory.
    pub fn current(&self) -> PathBuf {
        self.current.to_path_buf()
    }

    /// The current directory as a segment list.
    pub fn segments(&self) -> &PathSegments {
        &self.current
    }

    pub fn is_at_root(&self) -> bool {
        self.current.is_root()
    }

    /// Resolve `input` against the current directory without touching the
    /// filesystem.
    ///
    /// Absolute input is returned verbatim. An empty input yields the current
    /// directory.
    pub fn resolve(&self, input: &str) -> PathBuf {
        if is_absolute(input) {
            return PathBuf::from(input);
        }
        self.current.join(path_segments(input)).to_path_buf()
    }

    /// Resolve an input that starts with `..`.
    ///
    /// Leading `..` segments each climb one level from the current directory
    /// and the remaining segments are joined onto the result. Climbing stops
    /// at the root; `clamped` reports when that happened. A `..` after the
    /// first ordinary segment is kept literally.
    pub fn resolve_parent_relative(&self, input: &str) -> Resolved {
        let segments = path_segments(input);
        let levels = segments.iter().take_while(|s| *s == PARENT).count();
        let (base, clamped) = self.current.ascend(levels);
        if clamped {
            log::debug!("{:?} climbs above {}, clamped at root", input, self.current);
        }
        Resolved {
            path: base.join(segments.into_iter().skip(levels)).to_path_buf(),
            clamped,
        }
    }

    /// Resolve any user path: parent-relative if it starts with `..`,
    /// otherwise through [`PathResolver::resolve`].
    pub fn resolve_target(&self, input: &str) -> Resolved {
        if starts_with_parent(input) {
            self.resolve_parent_relative(input)
        } else {
            Resolved::exact(self.resolve(input))
        }
    }

    /// Move the cursor to `input` if it names an existing directory.
    ///
    /// `..` at the root is refused with [`DirectoryError::AlreadyAtRoot`].
    /// A missing target or a regular file is
    /// [`DirectoryError::DirectoryNotFound`]. On error the cursor does not
    /// move. The stored cursor has its `.` and `..` components folded; the
    /// returned [`Resolved`] keeps the path as it was checked.
    pub fn change_directory(&mut self, input: &str) -> Result<Resolved, DirectoryError> {
        let target = self.resolve_target(input);
        let only_parents = path_segments(input).iter().all(|s| s == PARENT);
        if self.is_at_root() && target.clamped && only_parents {
            return Err(DirectoryError::AlreadyAtRoot);
        }

        if !target.path.is_dir() {
            return Err(DirectoryError::DirectoryNotFound { path: target.path });
        }

        let path_str = target.path.to_str().ok_or_else(|| DirectoryError::NotUnicode {
            path: target.path.clone(),
        })?;
        self.current = PathSegments::parse(path_str).normalize();
        log::debug!("current directory is now {}", self.current);
        Ok(target)
    }

    /// Move the cursor to its parent.
    pub fn go_to_parent(&mut self) -> Result<(), DirectoryError> {
        let parent = self.current.parent().ok_or(DirectoryError::AlreadyAtRoot)?;
        self.current = parent;
        Ok(())
    }
}

fn starts_with_parent(input: &str) -> bool {
    path_segments(input).first().is_some_and(|s| s == PARENT) && !is_absolute(input)
}

// =============================================================================
// Tests
// =============================================================================
