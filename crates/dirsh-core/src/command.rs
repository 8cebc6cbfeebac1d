//! Command keywords and their accepted argument counts.

use std::fmt;

// =============================================================================
// Arity
// =============================================================================

/// Number of arguments a command accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// No arguments at all
    None,
    /// Exactly `n` arguments
    Exactly(usize),
    /// Anywhere from zero to `n` arguments
    AtMost(usize),
}

impl Arity {
    /// Check whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::None => count == 0,
            Self::Exactly(n) => count == n,
            Self::AtMost(n) => count <= n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "no arguments"),
            Self::Exactly(1) => write!(f, "exactly 1 argument"),
            Self::Exactly(n) => write!(f, "exactly {} arguments", n),
            Self::AtMost(1) => write!(f, "at most 1 argument"),
            Self::AtMost(n) => write!(f, "at most {} arguments", n),
        }
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Shell command named by the first word of an input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Exit,
    Help,
    Find,
    Delete,
    Create,
    /// `CD` or its alias `GOTO`
    ChangeDir,
    Open,
    Back,
    MakeDir,
    RemoveDir,
    List,
    /// Anything that is not a known keyword
    Invalid,
}

impl Command {
    /// Every valid command, in the order `HELP` lists them.
    pub const ALL: [Command; 11] = [
        Self::Exit,
        Self::Help,
        Self::Find,
        Self::Delete,
        Self::Create,
        Self::ChangeDir,
        Self::Open,
        Self::Back,
        Self::MakeDir,
        Self::RemoveDir,
        Self::List,
    ];

    /// Resolve a single word to a command, ignoring case.
    ///
    /// This is independent of tokenizing, so it can also validate the
    /// argument of `HELP <command>`.
    pub fn from_word(word: &str) -> Self {
        match word.to_uppercase().as_str() {
            "EXIT" => Self::Exit,
            "HELP" => Self::Help,
            "FIND" => Self::Find,
            "DELETE" => Self::Delete,
            "CREATE" => Self::Create,
            "CD" | "GOTO" => Self::ChangeDir,
            "OPEN" => Self::Open,
            "BACK" => Self::Back,
            "MKDIR" => Self::MakeDir,
            "RMDIR" => Self::RemoveDir,
            "LS" => Self::List,
            _ => Self::Invalid,
        }
    }

    /// Canonical keyword as typed by the user.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Exit => "EXIT",
            Self::Help => "HELP",
            Self::Find => "FIND",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::ChangeDir => "CD",
            Self::Open => "OPEN",
            Self::Back => "BACK",
            Self::MakeDir => "MKDIR",
            Self::RemoveDir => "RMDIR",
            Self::List => "LS",
            Self::Invalid => "INVALID",
        }
    }

    /// Alternative keywords that resolve to the same command.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::ChangeDir => &["GOTO"],
            _ => &[],
        }
    }

    /// Argument counts this command accepts.
    pub fn arity(self) -> Arity {
        match self {
            Self::Exit | Self::Back | Self::List => Arity::None,
            Self::Help => Arity::AtMost(1),
            Self::Find
            | Self::Delete
            | Self::Create
            | Self::ChangeDir
            | Self::Open
            | Self::MakeDir
            | Self::RemoveDir => Arity::Exactly(1),
            Self::Invalid => Arity::AtMost(usize::MAX),
        }
    }

    /// One-line description used by the `HELP` listing.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Exit => "Exits the program",
            Self::Help => "Displays this screen",
            Self::Find => "Finds a file below the current directory",
            Self::Delete => "Deletes a file",
            Self::Create => "Creates an empty file",
            Self::ChangeDir => "Goes to the specified directory",
            Self::Open => "Opens a file with its default application",
            Self::Back => "Goes to the parent directory",
            Self::MakeDir => "Creates a directory",
            Self::RemoveDir => "Deletes an empty directory",
            Self::List => "Lists the current directory",
            Self::Invalid => "Invalid command",
        }
    }

    /// Usage text for `HELP <command>`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Exit => "Exits the program.\nUsage: EXIT",
            Self::Help => "Displays all usable commands.\nUsage: HELP [COMMAND]",
            Self::Find => {
                "Finds a file by exact name, searching the current directory breadth-first.\n\
                 Usage: FIND FILENAME\nE.g: FIND notes.txt"
            }
            Self::Delete => "Deletes a file.\nUsage: DELETE FILENAME",
            Self::Create => "Creates an empty file.\nUsage: CREATE FILENAME",
            Self::ChangeDir => {
                "Goes to the specified directory.\nUsage: CD DIRECTORY (alias: GOTO)\n\
                 E.g: CD \"/home/user/My Documents\""
            }
            Self::Open => {
                "Opens the specified file with its default application.\nUsage: OPEN FILENAME"
            }
            Self::Back => "Goes to the parent directory.\nUsage: BACK",
            Self::MakeDir => "Creates a directory.\nUsage: MKDIR DIRECTORY",
            Self::RemoveDir => "Deletes a directory, which must be empty.\nUsage: RMDIR DIRECTORY",
            Self::List => "Lists the contents of the current directory.\nUsage: LS",
            Self::Invalid => "Invalid command specified.",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// =============================================================================
// Tests
// =============================================================================
