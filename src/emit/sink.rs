//! Output sink selection for emitters.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination an emitter renders into.
///
/// File sinks are owned handles closed by drop on every exit path, success
/// or failure. Opening a file target creates (and truncates) the file, so
/// callers must not open the sink until scanning has already succeeded.
#[derive(Debug, Clone)]
pub enum OutputTarget {
  /// The process standard output.
  Stdout,
  /// A file created at the given path.
  File(PathBuf),
}

impl OutputTarget {
  /// Build a target from an optional `--output` argument.
  pub fn from_option(output: Option<PathBuf>) -> Self {
    match output {
      Some(path) => Self::File(path),
      None => Self::Stdout,
    }
  }

  /// Open the sink for writing.
  pub fn open(&self) -> io::Result<Box<dyn Write>> {
    match self {
      Self::Stdout => Ok(Box::new(io::stdout())),
      Self::File(path) => Ok(Box::new(File::create(path)?)),
    }
  }
}
