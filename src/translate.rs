//! Thin wrapper around the Qt translation-extraction tool.

use std::process::Command;

use anyhow::{Context, Result, anyhow};

use crate::config::I18nConfig;

/// Regenerate the translation source file for every configured locale.
///
/// The extraction tool does all the work; this wrapper only sequences one
/// invocation per locale and stops at the first failure.
pub fn update_translations(config: &I18nConfig) -> Result<()> {
  for locale in &config.locales {
    update_locale(config, locale)?;
  }
  Ok(())
}

fn update_locale(config: &I18nConfig, locale: &str) -> Result<()> {
  let ts_file = config.ts_file(locale);
  let status = Command::new(&config.tool)
    .arg("-recursive")
    .arg("-I.")
    .args(&config.sources)
    .arg("-ts")
    .arg(&ts_file)
    .status()
    .with_context(|| format!("failed to run `{}` for {}", config.tool, locale))?;

  if !status.success() {
    return Err(anyhow!(
      "`{}` exited with {} while updating {}",
      config.tool,
      status,
      ts_file
    ));
  }
  Ok(())
}
