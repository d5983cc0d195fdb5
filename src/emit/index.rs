//! C++ constant-index rendering for scanned assets.

use std::collections::BTreeMap;
use std::io::Write;

use crate::mangle::{resource_literal, symbol_name};
use crate::models::AssetTree;

use super::EmitError;

/// Render one `constexpr` declaration per file, grouped by directory.
///
/// Each populated directory gets a comment line naming it, its
/// declarations in the tree's file order, and a trailing blank line.
/// Identifiers share one namespace across the whole tree; a collision is a
/// build-time misconfiguration and aborts rendering with
/// [`EmitError::DuplicateSymbol`].
pub fn write_index<W: Write>(out: &mut W, tree: &AssetTree) -> Result<(), EmitError> {
  let mut declared: BTreeMap<String, String> = BTreeMap::new();

  for group in tree.populated_groups() {
    if group.path.is_empty() {
      writeln!(out, "// ./")?;
    } else {
      writeln!(out, "// ./{}/", group.path)?;
    }

    for filename in &group.files {
      let identifier = symbol_name(&group.path, filename).identifier();
      let literal = resource_literal(&group.path, filename);
      if let Some(previous) = declared.insert(identifier.clone(), literal.clone()) {
        return Err(EmitError::DuplicateSymbol {
          symbol: identifier,
          first: previous,
          second: literal,
        });
      }
      writeln!(out, "constexpr const char* {identifier} = \"{literal}\";")?;
    }

    writeln!(out)?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::*;
  use crate::models::DirectoryGroup;

  fn tree(groups: Vec<DirectoryGroup>) -> AssetTree {
    AssetTree {
      root: PathBuf::from("/tmp/assets"),
      groups,
    }
  }

  fn group(path: &str, files: &[&str]) -> DirectoryGroup {
    DirectoryGroup {
      path: path.to_string(),
      files: files.iter().map(|name| name.to_string()).collect(),
    }
  }

  #[test]
  fn renders_the_reference_document() {
    let tree = tree(vec![
      group("", &[]),
      group("icons", &["a.png", "b-one.png"]),
    ]);

    let mut out = Vec::new();
    write_index(&mut out, &tree).unwrap();

    let expected = "\
// ./icons/
constexpr const char* kIconA = \":/icons/a.png\";
constexpr const char* kIconBOne = \":/icons/b-one.png\";

";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
  }

  #[test]
  fn root_files_are_grouped_under_a_bare_dot_comment() {
    let tree = tree(vec![group("", &["app.conf"])]);

    let mut out = Vec::new();
    write_index(&mut out, &tree).unwrap();

    let expected = "\
// ./
constexpr const char* kApp = \":/app.conf\";

";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
  }

  #[test]
  fn matches_manifest_file_ordering() {
    let groups = vec![
      group("configs", &["a.toml", "b.toml"]),
      group("icons", &["close.png", "open.png"]),
    ];

    let mut rendered = Vec::new();
    write_index(&mut rendered, &tree(groups.clone())).unwrap();
    let rendered = String::from_utf8(rendered).unwrap();

    let mut expected_order = Vec::new();
    for group in &groups {
      for file in &group.files {
        expected_order.push(group.file_path(file));
      }
    }

    let mut last = 0;
    for path in expected_order {
      let position = rendered.find(&path).expect("path missing from index");
      assert!(position >= last, "{path} rendered out of order");
      last = position;
    }
  }

  #[test]
  fn colliding_identifiers_fail_fast() {
    let tree = tree(vec![group("icons", &["A-B.png", "a-b.png"])]);

    let mut out = Vec::new();
    match write_index(&mut out, &tree) {
      Err(EmitError::DuplicateSymbol {
        symbol,
        first,
        second,
      }) => {
        assert_eq!(symbol, "kIconAB");
        assert_eq!(first, ":/icons/A-B.png");
        assert_eq!(second, ":/icons/a-b.png");
      }
      other => panic!("expected DuplicateSymbol, got {other:?}"),
    }
  }

  #[test]
  fn same_stem_in_different_directories_does_not_collide() {
    let tree = tree(vec![
      group("icons", &["close.png"]),
      group("icons/dark", &["close.png"]),
    ]);

    let mut out = Vec::new();
    write_index(&mut out, &tree).unwrap();
    let rendered = String::from_utf8(out).unwrap();
    assert!(rendered.contains("kIconClose"));
    assert!(rendered.contains("kIconDarkClose"));
  }
}
