use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct CliErr {
    pub kind: CliErrKind,
    pub path: Option<PathBuf>,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliErrKind {
    MissingArgument,
    FileReadError,
}

impl fmt::Display for CliErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.path) {
            (CliErrKind::MissingArgument, _) => write!(f, "missing argument: {}", self.reason),
            (CliErrKind::FileReadError, Some(path)) => {
                write!(f, "failed to read {}: {}", path.display(), self.reason)
            }
            (CliErrKind::FileReadError, None) => write!(f, "failed to read input: {}", self.reason),
        }
    }
}

impl std::error::Error for CliErr {}

/// Picks the input path out of the arguments that follow the program name.
pub fn input_path(mut args: impl Iterator<Item = String>) -> Result<PathBuf, CliErr> {
    let path = args.next().ok_or_else(|| CliErr {
        kind: CliErrKind::MissingArgument,
        path: None,
        reason: "usage: json2html <FILE>".to_string(),
    })?;

    let extra = args.count();
    if extra > 0 {
        warn!(extra, "ignoring extra arguments");
    }

    Ok(PathBuf::from(path))
}

/// Reads the whole input file up front, so nothing is written if it can't be read.
pub fn read_source(path: &Path) -> Result<Vec<u8>, CliErr> {
    let source = fs::read(path).map_err(|err| CliErr {
        kind: CliErrKind::FileReadError,
        path: Some(path.to_path_buf()),
        reason: err.to_string(),
    })?;

    debug!(path = %path.display(), bytes = source.len(), "read input");
    Ok(source)
}
