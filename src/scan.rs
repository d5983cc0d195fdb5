//! Read-only directory walker producing the asset tree.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::models::{AssetTree, DirectoryGroup};

/// Errors raised while scanning an asset tree.
#[derive(Debug)]
pub enum ScanError {
    /// The scan root does not exist.
    NotFound {
        /// Path that was requested.
        path: PathBuf,
    },
    /// The scan root exists but is not a directory.
    NotDirectory {
        /// Path that was requested.
        path: PathBuf,
    },
    /// A directory could not be read during traversal.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "{} does not exist", path.display())
            }
            Self::NotDirectory { path } => {
                write!(f, "{} is not a directory", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Walk `root` top-down and collect every directory with its sorted files.
///
/// The root is validated and canonicalized before traversal, so callers
/// can rely on a returned tree covering the whole hierarchy; a failure
/// partway through produces no tree at all.
pub fn scan_tree(root: &Path) -> Result<AssetTree, ScanError> {
    let metadata = fs::metadata(root).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            ScanError::NotFound {
                path: root.to_path_buf(),
            }
        } else {
            ScanError::Io {
                path: root.to_path_buf(),
                source: err,
            }
        }
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotDirectory {
            path: root.to_path_buf(),
        });
    }

    let root = fs::canonicalize(root).map_err(|err| ScanError::Io {
        path: root.to_path_buf(),
        source: err,
    })?;

    let mut groups = Vec::new();
    collect_groups(&root, String::new(), &mut groups)?;
    Ok(AssetTree { root, groups })
}

fn collect_groups(
    dir: &Path,
    relative: String,
    groups: &mut Vec<DirectoryGroup>,
) -> Result<(), ScanError> {
    let read_error = |source| ScanError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    let mut subdirs: Vec<(String, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().map_err(read_error)?.is_dir() {
            subdirs.push((name, entry.path()));
        } else {
            files.push(name);
        }
    }

    files.sort();
    subdirs.sort_by(|a, b| a.0.cmp(&b.0));

    groups.push(DirectoryGroup {
        path: relative.clone(),
        files,
    });

    for (name, path) in subdirs {
        let child = if relative.is_empty() {
            name
        } else {
            format!("{relative}/{name}")
        };
        collect_groups(&path, child, groups)?;
    }

    Ok(())
}
