//! Project configuration loader for generator defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "qrcgen.config.json";

/// Discoverable project configuration for the generators.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Mount prefix to use when the command line supplies none. When this
    /// is also absent the prefix falls back to the scan root's base name.
    pub prefix: Option<String>,
    /// Translation-update settings for `update-ts`.
    pub i18n: I18nConfig,
}

/// Settings for regenerating translation source files.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct I18nConfig {
    /// Extraction tool executable invoked once per locale.
    pub tool: String,
    /// Locales to regenerate translation sources for.
    pub locales: Vec<String>,
    /// Source directories handed to the extraction tool.
    pub sources: Vec<String>,
    /// Directory receiving the generated translation files.
    pub ts_dir: String,
    /// File-name stem for generated translation files.
    pub ts_stem: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            tool: "lupdate".into(),
            locales: vec!["zh_CN".into(), "en_US".into()],
            sources: vec![
                "src/app".into(),
                "src/controllers".into(),
                "src/ui".into(),
            ],
            ts_dir: "i18n".into(),
            ts_stem: "app".into(),
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so the generators keep working in projects
    /// that never configure anything.
    pub fn discover(dir: &Path) -> Self {
        Self::from_path(&dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

impl I18nConfig {
    /// Path of the translation source file generated for `locale`.
    pub fn ts_file(&self, locale: &str) -> String {
        format!("{}/{}-{}.ts", self.ts_dir, self.ts_stem, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discover_falls_back_to_defaults_when_absent() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::discover(dir.path());

        assert_eq!(config.prefix, None);
        assert_eq!(config.i18n.tool, "lupdate");
        assert_eq!(config.i18n.locales, vec!["zh_CN", "en_US"]);
        assert_eq!(config.i18n.ts_file("zh_CN"), "i18n/app-zh_CN.ts");
    }

    #[test]
    fn discover_falls_back_to_defaults_when_malformed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("qrcgen.config.json"), "not json").unwrap();

        let config = ProjectConfig::discover(dir.path());
        assert_eq!(config.i18n.sources.len(), 3);
    }

    #[test]
    fn parses_partial_configuration() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qrcgen.config.json");
        fs::write(
            &path,
            r#"{"prefix": "res", "i18n": {"locales": ["de_DE"], "tsStem": "client"}}"#,
        )
        .unwrap();

        let config = ProjectConfig::from_path(&path).expect("configuration should parse");
        assert_eq!(config.prefix.as_deref(), Some("res"));
        assert_eq!(config.i18n.locales, vec!["de_DE"]);
        assert_eq!(config.i18n.ts_file("de_DE"), "i18n/client-de_DE.ts");
        assert_eq!(config.i18n.tool, "lupdate");
    }

    #[test]
    fn from_path_is_none_for_missing_file() {
        let dir = tempdir().unwrap();
        assert!(ProjectConfig::from_path(&dir.path().join("absent.json")).is_none());
    }
}
