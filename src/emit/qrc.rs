//! Qt resource-container (`.qrc`) manifest rendering.

use std::io::Write;

use crate::models::AssetTree;

use super::EmitError;

/// Render `tree` as a QRC document grouping every file under `prefix`.
///
/// File records are relative to the scanned root and follow the tree's
/// deterministic order; each directory's records are followed by one blank
/// separator line. The prefix is emitted with exactly one leading slash
/// however the caller spelled it.
pub fn write_qrc<W: Write>(out: &mut W, tree: &AssetTree, prefix: &str) -> Result<(), EmitError> {
  let prefix = prefix.trim_start_matches('/');

  writeln!(out, "<!DOCTYPE RCC>")?;
  writeln!(out, "<RCC version=\"1.0\">")?;
  writeln!(out, "  <qresource prefix=\"/{prefix}\">")?;

  for group in tree.populated_groups() {
    for filename in &group.files {
      writeln!(out, "    <file>{}</file>", group.file_path(filename))?;
    }
    writeln!(out)?;
  }

  writeln!(out, "  </qresource>")?;
  writeln!(out, "</RCC>")?;
  Ok(())
}
