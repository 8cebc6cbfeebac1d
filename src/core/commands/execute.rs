//! Command execution logic.
//!
//! Contains the `execute_command` function that runs a parsed command
//! against the directory cursor and the filesystem.

use dirsh_core::{Command, ParsedCommand, PathResolver, Resolved};

use crate::config::{HELP_FOOTER, HELP_HEADER};
use crate::core::error::{FileOperation, ShellError};
use crate::core::filesystem::{FileSystem, MakeDirOutcome};
use crate::models::OutputLine;

use super::CommandResult;

/// Execute a parsed command and return its output.
///
/// Arity is checked before anything else runs, so a command with the wrong
/// number of arguments never reaches the filesystem.
///
/// # Arguments
///
/// * `parsed` - Command and arguments from the parser
/// * `cwd` - The session's directory cursor (moved by `CD` and `BACK`)
/// * `fs` - Filesystem the command operates on
pub fn execute_command<F: FileSystem + ?Sized>(
    parsed: &ParsedCommand,
    cwd: &mut PathResolver,
    fs: &F,
) -> Result<CommandResult, ShellError> {
    let command = parsed.command;
    if command == Command::Invalid {
        return Err(ShellError::InvalidCommand(parsed.name.clone()));
    }

    let arity = command.arity();
    if !arity.accepts(parsed.args.len()) {
        return Err(ShellError::WrongArgumentCount {
            command,
            expected: arity,
            found: parsed.args.len(),
        });
    }

    let arg = parsed.args.first().map(String::as_str);
    let target = arg.unwrap_or_default();

    match command {
        Command::Exit => Ok(CommandResult::exit()),
        Command::Help => execute_help(arg),
        Command::ChangeDir => execute_cd(target, cwd),
        Command::Back => {
            cwd.go_to_parent()?;
            Ok(CommandResult::empty())
        }
        Command::List => execute_ls(cwd, fs),
        Command::MakeDir => execute_mkdir(target, cwd, fs),
        Command::RemoveDir => {
            let resolved = cwd.resolve_target(target);
            fs.remove_empty_directory(&resolved.path)
                .map_err(ShellError::file_op(FileOperation::RemoveDir, &resolved.path))?;
            Ok(with_clamp_notice(&resolved, vec![]))
        }
        Command::Create => {
            let resolved = cwd.resolve_target(target);
            fs.create_file(&resolved.path)
                .map_err(ShellError::file_op(FileOperation::Create, &resolved.path))?;
            Ok(with_clamp_notice(&resolved, vec![]))
        }
        Command::Delete => {
            let resolved = cwd.resolve_target(target);
            fs.delete_file(&resolved.path)
                .map_err(ShellError::file_op(FileOperation::Delete, &resolved.path))?;
            Ok(with_clamp_notice(&resolved, vec![]))
        }
        Command::Open => {
            let resolved = cwd.resolve_target(target);
            fs.open_with_default_app(&resolved.path)
                .map_err(ShellError::file_op(FileOperation::Open, &resolved.path))?;
            Ok(with_clamp_notice(&resolved, vec![]))
        }
        Command::Find => execute_find(target, cwd, fs),
        Command::Invalid => Err(ShellError::InvalidCommand(parsed.name.clone())),
    }
}

/// Execute `HELP` with an optional command word.
fn execute_help(word: Option<&str>) -> Result<CommandResult, ShellError> {
    let Some(word) = word else {
        let mut lines = vec![OutputLine::text(HELP_HEADER)];
        for command in Command::ALL {
            let mut names = vec![command.keyword()];
            names.extend(command.aliases());
            lines.push(OutputLine::text(format!(
                "{}: {}",
                names.join("/"),
                command.summary()
            )));
        }
        lines.push(OutputLine::text(HELP_FOOTER));
        return Ok(CommandResult::output(lines));
    };

    match Command::from_word(word) {
        Command::Invalid => Err(ShellError::InvalidCommand(word.to_string())),
        command => Ok(CommandResult::output(
            command.usage().lines().map(OutputLine::text).collect(),
        )),
    }
}

/// Execute `CD`.
fn execute_cd(target: &str, cwd: &mut PathResolver) -> Result<CommandResult, ShellError> {
    let resolved = cwd.change_directory(target)?;
    Ok(with_clamp_notice(&resolved, vec![]))
}

/// Execute `LS` on the current directory.
fn execute_ls<F: FileSystem + ?Sized>(
    cwd: &PathResolver,
    fs: &F,
) -> Result<CommandResult, ShellError> {
    let dir = cwd.current();
    let entries = fs
        .list_directory(&dir)
        .map_err(ShellError::file_op(FileOperation::List, &dir))?;

    if entries.is_empty() {
        return Ok(CommandResult::output(vec![OutputLine::info(
            "This directory is empty.",
        )]));
    }

    let lines = entries
        .into_iter()
        .map(|entry| {
            if entry.is_dir {
                OutputLine::dir_entry(entry.name)
            } else {
                OutputLine::file_entry(entry.name, entry.size)
            }
        })
        .collect();
    Ok(CommandResult::output(lines))
}

/// Execute `MKDIR`.
fn execute_mkdir<F: FileSystem + ?Sized>(
    target: &str,
    cwd: &PathResolver,
    fs: &F,
) -> Result<CommandResult, ShellError> {
    let resolved = cwd.resolve_target(target);
    let outcome = fs
        .make_directory(&resolved.path)
        .map_err(ShellError::file_op(FileOperation::MakeDir, &resolved.path))?;

    let lines = match outcome {
        MakeDirOutcome::Created => vec![],
        MakeDirOutcome::AlreadyExists => vec![OutputLine::info(format!(
            "mkdir: {}: directory already exists",
            resolved.path.display()
        ))],
    };
    Ok(with_clamp_notice(&resolved, lines))
}

/// Execute `FIND` below the current directory.
fn execute_find<F: FileSystem + ?Sized>(
    name: &str,
    cwd: &PathResolver,
    fs: &F,
) -> Result<CommandResult, ShellError> {
    let root = cwd.current();
    let found = fs
        .find_file(&root, name)
        .map_err(ShellError::file_op(FileOperation::Find, &root))?;

    let line = match found {
        Some(path) => OutputLine::text(path.display().to_string()),
        None => OutputLine::info(format!(
            "find: no file named '{}' under {}",
            name,
            root.display()
        )),
    };
    Ok(CommandResult::output(vec![line]))
}

/// Prepend a notice when a `..` chain was stopped at the root.
fn with_clamp_notice(resolved: &Resolved, mut lines: Vec<OutputLine>) -> CommandResult {
    if resolved.clamped {
        lines.insert(
            0,
            OutputLine::info("This is the root directory; cannot go above it."),
        );
    }
    CommandResult::output(lines)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::path::{Path, PathBuf};

    use dirsh_core::{Arity, DirectoryError, parse_input};

    use crate::core::filesystem::DirEntry;

    /// Records every call instead of touching the disk.
    #[derive(Default)]
    struct RecordingFs {
        calls: RefCell<Vec<String>>,
    }

    impl RecordingFs {
        fn record(&self, op: &str, path: &Path) {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", op, path.display()));
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl FileSystem for RecordingFs {
        fn list_directory(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
            self.record("list", dir);
            Ok(vec![
                DirEntry {
                    name: "docs".to_string(),
                    is_dir: true,
                    size: None,
                },
                DirEntry {
                    name: "a.txt".to_string(),
                    is_dir: false,
                    size: Some(3),
                },
            ])
        }

        fn make_directory(&self, path: &Path) -> io::Result<MakeDirOutcome> {
            self.record("mkdir", path);
            Ok(MakeDirOutcome::Created)
        }

        fn remove_empty_directory(&self, path: &Path) -> io::Result<()> {
            self.record("rmdir", path);
            Err(io::Error::other("directory not empty"))
        }

        fn create_file(&self, path: &Path) -> io::Result<()> {
            self.record("create", path);
            Ok(())
        }

        fn delete_file(&self, path: &Path) -> io::Result<()> {
            self.record("delete", path);
            Ok(())
        }

        fn open_with_default_app(&self, path: &Path) -> io::Result<()> {
            self.record("open", path);
            Ok(())
        }

        fn find_file(&self, root: &Path, name: &str) -> io::Result<Option<PathBuf>> {
            self.record("find", root);
            Ok(Some(root.join(name)))
        }
    }

    fn run(
        line: &str,
        cwd: &mut PathResolver,
        fs: &RecordingFs,
    ) -> Result<CommandResult, ShellError> {
        let parsed = parse_input(line).unwrap().unwrap();
        execute_command(&parsed, cwd, fs)
    }

    #[test]
    fn test_exit() {
        let mut cwd = PathResolver::new("/home/user");
        let result = run("EXIT", &mut cwd, &RecordingFs::default()).unwrap();
        assert!(result.exit);
    }

    #[test]
    fn test_invalid_command() {
        let mut cwd = PathResolver::new("/home/user");
        let fs = RecordingFs::default();
        let err = run("pwd", &mut cwd, &fs).unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommand(ref c) if c == "pwd"));
        assert!(fs.calls().is_empty());
    }

    #[test]
    fn test_wrong_argument_count_touches_nothing() {
        let mut cwd = PathResolver::new("/home/user");
        let fs = RecordingFs::default();

        for line in ["mkdir", "mkdir a b", "rmdir", "create a b", "delete", "open", "find"] {
            let err = run(line, &mut cwd, &fs).unwrap_err();
            assert!(
                matches!(err, ShellError::WrongArgumentCount { expected: Arity::Exactly(1), .. }),
                "{}",
                line
            );
        }
        let err = run("ls docs", &mut cwd, &fs).unwrap_err();
        assert!(matches!(
            err,
            ShellError::WrongArgumentCount {
                command: Command::List,
                found: 1,
                ..
            }
        ));
        assert!(fs.calls().is_empty());
        assert_eq!(cwd.current(), PathBuf::from("/home/user"));
    }

    #[test]
    fn test_paths_are_resolved_against_cwd() {
        let mut cwd = PathResolver::new("/home/user");
        let fs = RecordingFs::default();

        run("mkdir \"New Folder\"", &mut cwd, &fs).unwrap();
        run("create ../notes.txt", &mut cwd, &fs).unwrap();
        run("delete /tmp/x", &mut cwd, &fs).unwrap();
        run("open report.pdf", &mut cwd, &fs).unwrap();

        assert_eq!(
            fs.calls(),
            vec![
                "mkdir /home/user/New Folder",
                "create /home/notes.txt",
                "delete /tmp/x",
                "open /home/user/report.pdf",
            ]
        );
    }

    #[test]
    fn test_rmdir_failure_is_reported() {
        let mut cwd = PathResolver::new("/home/user");
        let err = run("rmdir docs", &mut cwd, &RecordingFs::default()).unwrap_err();
        match err {
            ShellError::FileOperationFailed {
                operation, path, ..
            } => {
                assert_eq!(operation, FileOperation::RemoveDir);
                assert_eq!(path, PathBuf::from("/home/user/docs"));
            }
            other => panic!("Expected FileOperationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_clamped_path_gets_notice() {
        let mut cwd = PathResolver::new("/");
        let fs = RecordingFs::default();
        let result = run("create ../../x", &mut cwd, &fs).unwrap();
        assert_eq!(fs.calls(), vec!["create /x"]);
        assert!(matches!(result.output[0], OutputLine::Info(_)));
    }

    #[test]
    fn test_back_at_root() {
        let mut cwd = PathResolver::new("/");
        let err = run("back", &mut cwd, &RecordingFs::default()).unwrap_err();
        assert!(matches!(
            err,
            ShellError::Directory(DirectoryError::AlreadyAtRoot)
        ));
        assert_eq!(cwd.current(), PathBuf::from("/"));
    }

    #[test]
    fn test_back_moves_up() {
        let mut cwd = PathResolver::new("/home/user");
        run("BACK", &mut cwd, &RecordingFs::default()).unwrap();
        assert_eq!(cwd.current(), PathBuf::from("/home"));
    }

    #[test]
    fn test_ls_lists_entries() {
        let mut cwd = PathResolver::new("/home/user");
        let fs = RecordingFs::default();
        let result = run("ls", &mut cwd, &fs).unwrap();
        assert_eq!(
            result.output,
            vec![
                OutputLine::dir_entry("docs"),
                OutputLine::file_entry("a.txt", Some(3)),
            ]
        );
        assert_eq!(fs.calls(), vec!["list /home/user"]);
    }

    #[test]
    fn test_find_searches_cwd() {
        let mut cwd = PathResolver::new("/home/user");
        let fs = RecordingFs::default();
        let result = run("find todo.md", &mut cwd, &fs).unwrap();
        assert_eq!(
            result.output,
            vec![OutputLine::text("/home/user/todo.md")]
        );
    }

    #[test]
    fn test_help_listing() {
        let mut cwd = PathResolver::new("/");
        let result = run("help", &mut cwd, &RecordingFs::default()).unwrap();
        assert_eq!(result.output.first(), Some(&OutputLine::text(HELP_HEADER)));
        assert!(
            result
                .output
                .contains(&OutputLine::text("CD/GOTO: Goes to the specified directory"))
        );
        assert_eq!(result.output.last(), Some(&OutputLine::text(HELP_FOOTER)));
    }

    #[test]
    fn test_help_for_command() {
        let mut cwd = PathResolver::new("/");
        let result = run("help goto", &mut cwd, &RecordingFs::default()).unwrap();
        assert_eq!(
            result.output[0],
            OutputLine::text("Goes to the specified directory.")
        );

        let err = run("help nope", &mut cwd, &RecordingFs::default()).unwrap_err();
        assert!(matches!(err, ShellError::InvalidCommand(ref c) if c == "nope"));
    }
}
