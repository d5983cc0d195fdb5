#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod emit;
pub mod mangle;
pub mod models;
pub mod scan;
pub mod translate;

pub use emit::{EmitError, OutputTarget, write_index, write_qrc};
pub use models::{AssetTree, DirectoryGroup};
pub use scan::{ScanError, scan_tree};
