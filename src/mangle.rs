//! Deterministic path-to-identifier mangling for the generated index.

/// Symbolic constant name derived from a (directory path, filename) pair.
///
/// The mangling is pure: identical inputs always produce identical names.
/// It performs no collision detection; distinct inputs that differ only by
/// characters the scheme discards (case, hyphens) mangle to the same
/// identifier, and rejecting that is the index emitter's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolName {
  /// Capitalized directory segments joined without separators, with a
  /// pluralizing `s` stripped from the first segment only.
  pub prefix: String,
  /// Capitalized hyphen-separated parts of the filename stem, joined.
  pub key: String,
}

impl SymbolName {
  /// Render the identifier in its `kPrefixKey` form.
  pub fn identifier(&self) -> String {
    format!("k{}{}", self.prefix, self.key)
  }
}

/// Compute the symbol name for the file `filename` inside `dir`.
///
/// `dir` is relative to the scan root with no leading separator; the empty
/// string denotes the root itself and contributes nothing to the prefix.
pub fn symbol_name(dir: &str, filename: &str) -> SymbolName {
  let mut prefix = String::new();
  for (index, segment) in dir.split('/').enumerate() {
    let segment = if index == 0 {
      segment.strip_suffix('s').unwrap_or(segment)
    } else {
      segment
    };
    prefix.push_str(&capitalize(segment));
  }

  let key: String = file_stem(filename).split('-').map(capitalize).collect();

  SymbolName { prefix, key }
}

/// Resource literal the identifier is bound to, e.g. `:/icons/app.png`.
pub fn resource_literal(dir: &str, filename: &str) -> String {
  if dir.is_empty() {
    format!(":/{filename}")
  } else {
    format!(":/{dir}/{filename}")
  }
}

/// Uppercase the first character and lowercase the rest.
fn capitalize(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    Some(first) => first
      .to_uppercase()
      .chain(chars.flat_map(char::to_lowercase))
      .collect(),
    None => String::new(),
  }
}

/// Strip the last extension, leaving leading-dot names untouched.
fn file_stem(filename: &str) -> &str {
  match filename.rfind('.') {
    Some(index) if filename[..index].chars().any(|c| c != '.') => &filename[..index],
    _ => filename,
  }
}
