//! User configuration (`config.toml`).
//!
//! Everything here is optional. Problems are reported as warnings and the
//! affected settings fall back to their defaults; a bad config file never
//! stops the pager from starting.

use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tabview_input::TermCapabilities;

use crate::error::{Result, TabviewError};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB
const MAX_ENTRIES_PER_TABLE: usize = 256;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    term: Option<String>,
    extended_names: Option<bool>,
    capabilities: Option<HashMap<String, String>>,
    bindings: Option<HashMap<String, i32>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Terminal type to describe instead of `$TERM`.
    pub term: Option<String>,
    /// Allow lookups of extended capability names such as `kHOM5`.
    pub extended_names: bool,
    /// Capability name to escape sequence.
    pub capabilities: Vec<(String, String)>,
    /// Escape sequence to key code.
    pub bindings: Vec<(String, i32)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            term: None,
            extended_names: true,
            capabilities: Vec::new(),
            bindings: Vec::new(),
        }
    }
}

impl Config {
    /// Build the capability database for this session.
    ///
    /// `term_override` (from the command line) wins over the config file,
    /// which wins over `$TERM`.
    pub fn capability_database(&self, term_override: Option<&str>) -> TermCapabilities {
        let term = term_override
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .or(self.term.as_deref());
        let mut caps = match term {
            Some(term) => TermCapabilities::for_term(term),
            None => TermCapabilities::from_env(),
        };
        if !self.extended_names {
            caps = caps.without_extended_names();
        }
        for (capname, sequence) in &self.capabilities {
            caps.define(capname, sequence);
        }
        for (sequence, code) in &self.bindings {
            caps.bind(sequence, *code);
        }
        caps
    }
}

/// Load the config from `config_file`, or from the user config dir when no
/// file is given. Returns the config and any warnings.
pub fn load_config(config_file: Option<&PathBuf>) -> (Config, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = config_file.cloned().or_else(user_config_path) else {
        return (Config::default(), warnings);
    };

    if !path.exists() {
        if config_file.is_some() {
            warnings.push(format!("Config file not found: {}", path.display()));
        }
        return (Config::default(), warnings);
    }

    match read_config_file(&path) {
        Ok(file) => {
            let config = build_config(file, &mut warnings);
            (config, warnings)
        }
        Err(err) => {
            warnings.push(err.to_string());
            (Config::default(), warnings)
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "tabview")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_CONFIG_FILE_BYTES {
        return Err(TabviewError::Config {
            path: path.to_path_buf(),
            message: format!(
                "file too large ({} bytes, max {})",
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ),
        });
    }
    let content = std::fs::read_to_string(path)?;
    toml::from_str::<ConfigFile>(&content).map_err(|err| TabviewError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn build_config(file: ConfigFile, warnings: &mut Vec<String>) -> Config {
    let term = file
        .term
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let mut capabilities: Vec<(String, String)> =
        valid_entries("capabilities", file.capabilities, warnings)
            .into_iter()
            .filter(|(capname, sequence)| {
                if capname.trim().is_empty() || sequence.is_empty() {
                    warnings.push(format!(
                        "Ignoring capability '{}': name and sequence must be non-empty",
                        capname
                    ));
                    return false;
                }
                true
            })
            .collect();
    capabilities.sort();

    let mut bindings: Vec<(String, i32)> = valid_entries("bindings", file.bindings, warnings)
        .into_iter()
        .filter(|(sequence, code)| {
            if sequence.is_empty() || *code <= 0 {
                warnings.push(format!(
                    "Ignoring binding {:?} = {}: sequence must be non-empty and code positive",
                    sequence, code
                ));
                return false;
            }
            true
        })
        .collect();
    bindings.sort();

    Config {
        term,
        extended_names: file.extended_names.unwrap_or(true),
        capabilities,
        bindings,
    }
}

fn valid_entries<V>(
    table: &str,
    raw: Option<HashMap<String, V>>,
    warnings: &mut Vec<String>,
) -> Vec<(String, V)> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    if raw.len() > MAX_ENTRIES_PER_TABLE {
        warnings.push(format!(
            "Too many {} entries: {} (max {})",
            table,
            raw.len(),
            MAX_ENTRIES_PER_TABLE
        ));
        return Vec::new();
    }
    raw.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tabview_input::{CapabilityDatabase, KeycodeResolver, ResolvedKeycodes};
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn load_valid_config() {
        let file = write_config(
            r#"
term = "xterm-256color"
extended_names = true

[capabilities]
kHOM5 = "\u001b[1;7H"

[bindings]
"\u001b[1;7H" = 545
"#,
        );
        let (config, warnings) = load_config(Some(&file.path().to_path_buf()));
        assert!(warnings.is_empty(), "{warnings:?}");
        assert_eq!(config.term.as_deref(), Some("xterm-256color"));
        assert_eq!(
            config.capabilities,
            vec![("kHOM5".to_string(), "\x1b[1;7H".to_string())]
        );
        assert_eq!(config.bindings, vec![("\x1b[1;7H".to_string(), 545)]);

        let resolved = KeycodeResolver::new(config.capability_database(None)).initialize();
        assert_eq!(resolved, ResolvedKeycodes::new(545, 533));
    }

    #[test]
    fn missing_explicit_file_warns() {
        let path = PathBuf::from("/definitely/not/here/config.toml");
        let (config, warnings) = load_config(Some(&path));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("not found"));
    }

    #[test]
    fn malformed_file_warns_and_uses_defaults() {
        let file = write_config("term = [");
        let (config, warnings) = load_config(Some(&file.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Config error"));
    }

    #[test]
    fn unknown_fields_rejected() {
        let file = write_config("colour = \"blue\"\n");
        let (config, warnings) = load_config(Some(&file.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warnings[0].contains("colour"));
    }

    #[test]
    fn invalid_entries_are_skipped() {
        let file = write_config(
            r#"
[capabilities]
kEND5 = ""

[bindings]
"\u001b[1;5F" = 0
"\u001b[1;5H" = 560
"#,
        );
        let (config, warnings) = load_config(Some(&file.path().to_path_buf()));
        assert_eq!(warnings.len(), 2, "{warnings:?}");
        assert!(config.capabilities.is_empty());
        assert_eq!(config.bindings, vec![("\x1b[1;5H".to_string(), 560)]);
    }

    #[test]
    fn oversized_file_warns_and_uses_defaults() {
        let file = write_config(&"a".repeat(MAX_CONFIG_FILE_BYTES as usize + 1));
        let (config, warnings) = load_config(Some(&file.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("file too large"), "{warnings:?}");
    }

    #[test]
    fn too_many_entries_warns() {
        let mut content = String::from("[bindings]\n");
        for i in 0..300 {
            content.push_str(&format!("\"seq{}\" = {}\n", i, i + 1));
        }
        let file = write_config(&content);
        let (config, warnings) = load_config(Some(&file.path().to_path_buf()));
        assert!(config.bindings.is_empty());
        assert!(
            warnings
                .iter()
                .any(|w| w.contains("Too many bindings entries: 300 (max 256)")),
            "{warnings:?}"
        );
    }

    #[test]
    fn cli_term_wins_over_config() {
        let config = Config {
            term: Some("dumb".to_string()),
            ..Default::default()
        };
        let caps = config.capability_database(Some("xterm"));
        assert_eq!(caps.term(), "xterm");

        let caps = config.capability_database(None);
        assert_eq!(caps.term(), "dumb");
    }

    #[test]
    fn extended_names_can_be_disabled() {
        let config = Config {
            term: Some("xterm".to_string()),
            extended_names: false,
            ..Default::default()
        };
        let mut caps = config.capability_database(None);
        assert!(!caps.enable_extended_names());

        let resolved = KeycodeResolver::new(caps).initialize();
        assert_eq!(resolved, ResolvedKeycodes::FALLBACK);
    }
}
