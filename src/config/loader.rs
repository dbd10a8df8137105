//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TexmgrError, TexmgrResult};

use super::types::{ColorMode, Config};

/// Project config looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "texmgr.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TexmgrResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| TexmgrError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TexmgrError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load the first config file found, then apply environment overrides.
///
/// An explicit path must exist. Otherwise `./texmgr.toml` is tried, then the
/// user config, then built-in defaults.
pub fn discover(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> TexmgrResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    let project = working_dir.join(PROJECT_CONFIG_FILE);
    for path in std::iter::once(project).chain(user_config_path()) {
        if path.exists() {
            let (config, warnings) = load_with_warnings(&path)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("texmgr").join("config.toml"))
}

/// Apply environment variable overrides (TEXMGR_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // TEXMGR_TIMEOUT_SECS
    if let Some(secs) = get_env("TEXMGR_TIMEOUT_SECS").and_then(|v| v.trim().parse().ok()) {
        config.process.timeout_secs = secs;
    }

    // TEXMGR_POLL_INTERVAL_MS
    if let Some(ms) = get_env("TEXMGR_POLL_INTERVAL_MS").and_then(|v| v.trim().parse().ok()) {
        config.watch.poll_interval_ms = ms;
    }

    // TEXMGR_COLOR
    if let Some(color) = get_env("TEXMGR_COLOR").and_then(|v| ColorMode::parse(&v)) {
        config.output.color = color;
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(crate) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "commands",
        "tex",
        "bibtex",
        "editor",
        "viewer",
        "clean",
        "extensions",
        "folders",
        "watch",
        "poll_interval_ms",
        "process",
        "timeout_secs",
        "templates",
        "document",
        "beamer",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
