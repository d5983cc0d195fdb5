//! Data structures produced while scanning an asset tree.

use std::path::PathBuf;

/// A single scanned directory together with the files it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryGroup {
  /// Directory path relative to the scan root, forward slashes; empty for
  /// the root itself.
  pub path: String,
  /// File names within the directory, sorted lexicographically.
  pub files: Vec<String>,
}

impl DirectoryGroup {
  /// Path of a contained file relative to the scan root.
  pub fn file_path(&self, filename: &str) -> String {
    if self.path.is_empty() {
      filename.to_string()
    } else {
      format!("{}/{}", self.path, filename)
    }
  }
}

/// Ordered representation of a scanned directory hierarchy.
///
/// Groups appear in top-down order: a directory always precedes its
/// descendants. Sibling directories and the files within each directory
/// are sorted lexicographically, so rendering the same tree always yields
/// the same document regardless of platform or filesystem.
#[derive(Debug, Clone)]
pub struct AssetTree {
  /// Canonicalized root the tree was scanned from.
  pub root: PathBuf,
  /// Scanned directory groups in traversal order.
  pub groups: Vec<DirectoryGroup>,
}

impl AssetTree {
  /// Base name of the scan root, used as the default mount prefix.
  pub fn root_base_name(&self) -> Option<String> {
    self
      .root
      .file_name()
      .map(|name| name.to_string_lossy().into_owned())
  }

  /// Groups that contain at least one file, in traversal order.
  ///
  /// Emitters render nothing for file-less directories, so this is the
  /// view both of them iterate.
  pub fn populated_groups(&self) -> impl Iterator<Item = &DirectoryGroup> {
    self.groups.iter().filter(|group| !group.files.is_empty())
  }
}
