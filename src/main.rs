//! qrc-gen CLI - build-time asset manifest and index generator.
//!
//! Usage: qrc-gen <COMMAND>
//!
//! Commands:
//!   index      Print a C++ constant index for a resource folder
//!   qrc        Generate a qrc resource manifest
//!   update-ts  Regenerate translation source files

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};

use qrc_gen::config::ProjectConfig;
use qrc_gen::emit::{OutputTarget, write_index, write_qrc};
use qrc_gen::scan::scan_tree;
use qrc_gen::translate::update_translations;

/// Build-time generators for embedded Qt resources.
#[derive(Parser, Debug)]
#[command(name = "qrc-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Print one constant declaration per resource file
  Index {
    /// Resource folder to scan
    folder: PathBuf,
  },

  /// Generate a qrc resource manifest
  Qrc {
    /// Resource folder to scan
    folder: PathBuf,

    /// Resource prefix (defaults to the folder's base name)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Output file (defaults to standard output)
    #[arg(short, long)]
    output: Option<PathBuf>,
  },

  /// Regenerate translation source files for all configured locales
  UpdateTs {
    /// Explicit configuration file path
    #[arg(long)]
    config: Option<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Index { folder } => cmd_index(&folder),
    Commands::Qrc {
      folder,
      prefix,
      output,
    } => cmd_qrc(&folder, prefix, output),
    Commands::UpdateTs { config } => cmd_update_ts(config),
  }
}

fn cmd_index(folder: &Path) -> Result<()> {
  let tree = scan_tree(folder)?;
  let mut out = io::stdout().lock();
  write_index(&mut out, &tree).context("failed to render index")?;
  Ok(())
}

fn cmd_qrc(folder: &Path, prefix: Option<String>, output: Option<PathBuf>) -> Result<()> {
  let config = ProjectConfig::discover(Path::new("."));

  // Scan before touching the sink so a failed scan never truncates an
  // existing output file.
  let tree = scan_tree(folder)?;

  let prefix = prefix
    .or(config.prefix)
    .or_else(|| tree.root_base_name())
    .unwrap_or_default();

  let target = OutputTarget::from_option(output);
  let mut out = target
    .open()
    .with_context(|| format!("failed to open output {target:?}"))?;
  write_qrc(&mut out, &tree, &prefix).context("failed to render manifest")?;
  Ok(())
}

fn cmd_update_ts(config_path: Option<PathBuf>) -> Result<()> {
  let config = match config_path {
    Some(path) => ProjectConfig::from_path(&path)
      .ok_or_else(|| anyhow!("failed to read configuration from {}", path.display()))?,
    None => ProjectConfig::discover(Path::new(".")),
  };

  update_translations(&config.i18n)
}
