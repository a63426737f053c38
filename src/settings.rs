//! Merged run configuration.
//!
//! Settings are built once at startup from `pyproject.toml` (the
//! `[tool.hintcheck]` table) and the command line, in that order:
//! list values concatenate with config entries first, and a command
//! line boolean overrides the config value only when explicitly set.
//! The result is read-only and passed by reference; there is no
//! process-wide mutable state.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::Error;

/// Config file consulted in the working directory.
pub const CONFIG_FILE: &str = "pyproject.toml";
/// Table name under `[tool]`.
const CONFIG_TABLE: &str = "hintcheck";

/// The merged, immutable run configuration.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Files and directories to check.
    pub paths: Vec<PathBuf>,
    /// Explicit exclusion patterns (config entries first).
    pub exclude: Vec<String>,
    /// Disable ignore-file auto-discovery.
    pub no_gitignore: bool,
    /// Exempt unannotated parameters that carry a default value.
    pub ignore_if_has_default: bool,
    /// Print nothing to stdout.
    pub quiet: bool,
    /// Print debugging information to stderr.
    pub verbose: bool,
}

impl Settings {
    /// Build the settings from the config file (if any) and the
    /// command line. Wrong-shaped config values fail here, at load
    /// time, rather than degrading silently.
    pub fn load(cli: &Cli, cwd: &Path) -> Result<Self, Error> {
        let file = load_file_config(cwd, cli.verbose)?.unwrap_or_default();
        Ok(Self::merge(file, cli))
    }

    fn merge(file: FileConfig, cli: &Cli) -> Self {
        let mut paths: Vec<PathBuf> = file
            .paths
            .map(StringOrList::into_vec)
            .unwrap_or_default()
            .into_iter()
            .map(PathBuf::from)
            .collect();
        paths.extend(cli.files.iter().cloned());

        let mut exclude = file.exclude.map(StringOrList::into_vec).unwrap_or_default();
        exclude.extend(cli.exclude.iter().cloned());

        Self {
            paths,
            exclude,
            no_gitignore: cli.no_gitignore || file.no_gitignore.unwrap_or(false),
            ignore_if_has_default: cli.ignore_if_has_default
                || file.ignore_if_has_default.unwrap_or(false),
            quiet: cli.quiet || file.quiet.unwrap_or(false),
            verbose: cli.verbose || file.verbose.unwrap_or(false),
        }
    }
}

/// The `[tool.hintcheck]` table as written in pyproject.toml.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FileConfig {
    #[serde(default, alias = "files")]
    paths: Option<StringOrList>,
    #[serde(default)]
    exclude: Option<StringOrList>,
    #[serde(default)]
    no_gitignore: Option<bool>,
    #[serde(default)]
    ignore_if_has_default: Option<bool>,
    #[serde(default)]
    quiet: Option<bool>,
    #[serde(default)]
    verbose: Option<bool>,
}

/// List-valued keys accept either a list of strings or one
/// space-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum StringOrList {
    String(String),
    List(Vec<String>),
}

impl StringOrList {
    fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::String(s) => s
                .split(' ')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect(),
            StringOrList::List(v) => v,
        }
    }
}

fn load_file_config(cwd: &Path, verbose: bool) -> Result<Option<FileConfig>, Error> {
    let path = cwd.join(CONFIG_FILE);
    if !path.is_file() {
        return Ok(None);
    }
    if verbose {
        eprintln!("Loading {}", path.display());
    }
    let text = fs::read_to_string(&path).map_err(|e| Error::Io {
        path: path.clone(),
        source: e,
    })?;
    file_config_from_str(&text)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
}

/// Extract the `[tool.hintcheck]` table from pyproject.toml text.
/// Returns `Ok(None)` when the table is absent.
fn file_config_from_str(text: &str) -> Result<Option<FileConfig>, toml::de::Error> {
    let value: toml::Value = text.parse()?;
    let Some(table) = value.get("tool").and_then(|t| t.get(CONFIG_TABLE)) else {
        return Ok(None);
    };
    table.clone().try_into().map(Some)
}
