//! Path arithmetic shared by every resolver operation.
//!
//! A path is an [`Anchor`] (relative, filesystem root, or drive root) plus an
//! ordered list of component names. Splitting, joining, taking the parent and
//! rendering all go through [`PathSegments`], so `cd`, `back` and
//! parent-relative resolution agree on what a separator is.
//!
//! # Separators
//!
//! `/` is always a separator. On platforms whose native separator differs
//! (Windows' `\`), that character is a separator as well. Rendering uses the
//! native separator.

use std::fmt;
use std::path::{MAIN_SEPARATOR, MAIN_SEPARATOR_STR, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Matches `C:\...` and `c:/...` style absolute paths.
static DRIVE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]):[\\/]").expect("drive prefix regex is valid"));

/// Parent-directory segment.
pub const PARENT: &str = "..";

/// Current-directory segment.
pub const CURRENT: &str = ".";

/// Check whether `c` separates path components.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}

/// Check whether a path is absolute.
///
/// Recognizes both Unix-style (`/` or `\` prefix) and Windows-style
/// (`X:` followed by a separator) absolute paths, whatever the host.
pub fn is_absolute(input: &str) -> bool {
    input.starts_with(['/', '\\']) || DRIVE_PREFIX.is_match(input)
}

/// Split a path into its component names.
///
/// Empty components (leading, trailing or doubled separators) are dropped.
/// A drive prefix such as `C:` is not stripped here; use
/// [`PathSegments::parse`] to separate the anchor from the components.
pub fn path_segments(path: &str) -> Vec<String> {
    path.split(is_separator)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Anchor
// =============================================================================

/// What a path is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    /// Relative to some other directory
    Relative,
    /// The filesystem root `/`
    Root,
    /// A drive root such as `C:\`
    Drive(char),
}

// =============================================================================
// PathSegments
// =============================================================================

/// A path split into an anchor and component names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathSegments {
    anchor: Anchor,
    segments: Vec<String>,
}

impl PathSegments {
    /// Parse a path string.
    pub fn parse(path: &str) -> Self {
        if let Some(caps) = DRIVE_PREFIX.captures(path) {
            let letter = caps[1].chars().next().unwrap_or('C');
            let rest = &path[caps[0].len()..];
            return Self {
                anchor: Anchor::Drive(letter),
                segments: path_segments(rest),
            };
        }

        let anchor = if is_absolute(path) {
            Anchor::Root
        } else {
            Anchor::Relative
        };
        Self {
            anchor,
            segments: path_segments(path),
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_absolute(&self) -> bool {
        self.anchor != Anchor::Relative
    }

    /// True for `/` or a bare drive root.
    pub fn is_root(&self) -> bool {
        self.is_absolute() && self.segments.is_empty()
    }

    /// Number of components below the anchor.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Parent path, or `None` if there is nothing left to remove.
    pub fn parent(&self) -> Option<Self> {
        if self.segments.is_empty() {
            return None;
        }
        let mut parent = self.clone();
        parent.segments.pop();
        Some(parent)
    }

    /// Go up `levels` directories, stopping at the top.
    ///
    /// Returns the new path and whether the climb was cut short.
    pub fn ascend(&self, levels: usize) -> (Self, bool) {
        let kept = self.segments.len().saturating_sub(levels);
        let clamped = levels > self.segments.len();
        let path = Self {
            anchor: self.anchor,
            segments: self.segments[..kept].to_vec(),
        };
        (path, clamped)
    }

    /// Append component names.
    pub fn join<I, S>(&self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut joined = self.clone();
        joined
            .segments
            .extend(components.into_iter().map(Into::into));
        joined
    }

    /// Fold `.` and `..` components lexically.
    ///
    /// `..` removes the preceding component. At the top of an absolute path
    /// it is dropped; at the top of a relative path it is kept.
    pub fn normalize(&self) -> Self {
        let mut segments: Vec<String> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment.as_str() {
                CURRENT => {}
                PARENT => {
                    let climbs = segments.last().is_some_and(|last| last != PARENT);
                    if climbs {
                        segments.pop();
                    } else if !self.is_absolute() {
                        segments.push(segment.clone());
                    }
                }
                _ => segments.push(segment.clone()),
            }
        }
        Self {
            anchor: self.anchor,
            segments,
        }
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }
}

impl fmt::Display for PathSegments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self.segments.join(MAIN_SEPARATOR_STR);
        match self.anchor {
            Anchor::Relative => f.write_str(&body),
            Anchor::Root => write!(f, "{}{}", MAIN_SEPARATOR, body),
            Anchor::Drive(letter) => write!(f, "{}:{}{}", letter, MAIN_SEPARATOR, body),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
