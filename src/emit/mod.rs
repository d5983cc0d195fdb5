//! Rendering of scanned asset trees into generated artifacts.
//!
//! The emitters are pure request/response transforms: each takes an
//! [`AssetTree`](crate::models::AssetTree) and a caller-provided sink and
//! renders the whole document in a single pass. Sink selection (standard
//! output versus a created file) lives in [`OutputTarget`], never inside
//! an emitter.

mod index;
mod qrc;
mod sink;

pub use index::write_index;
pub use qrc::write_qrc;
pub use sink::OutputTarget;

/// Errors raised while rendering a generated artifact.
#[derive(Debug)]
pub enum EmitError {
  /// The sink rejected a write.
  Io(std::io::Error),
  /// Two files mangle to the same constant identifier.
  DuplicateSymbol {
    /// The colliding identifier.
    symbol: String,
    /// Resource literal that claimed the identifier first.
    first: String,
    /// Resource literal that collided with it.
    second: String,
  },
}

impl std::fmt::Display for EmitError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Io(source) => write!(f, "failed to write output: {source}"),
      Self::DuplicateSymbol {
        symbol,
        first,
        second,
      } => write!(
        f,
        "duplicate symbol {symbol}: both {first} and {second} mangle to it"
      ),
    }
  }
}

impl std::error::Error for EmitError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(source) => Some(source),
      Self::DuplicateSymbol { .. } => None,
    }
  }
}

impl From<std::io::Error> for EmitError {
  fn from(source: std::io::Error) -> Self {
    Self::Io(source)
  }
}
