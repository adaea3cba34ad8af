use std::path::PathBuf;
use thiserror::Error;

/// Fatal, user-facing failure modes.
///
/// Everything else (I/O mid-traversal, walker errors) travels as a plain
/// `anyhow` error with context and terminates the run the same way.
#[derive(Error, Debug)]
pub enum TocError {
    /// The tool was invoked with no arguments at all.
    #[error("Expected at least one argument!")]
    MissingArguments,

    /// The `--file` path exists but is not a regular file.
    #[error("{} is not a file", .0.display())]
    NotAFile(PathBuf),

    /// The `--folder` path exists but is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}
