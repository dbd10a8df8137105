//! Tests for the config module

use super::loader::{suggest_key, with_env_overrides_from};
use super::types::*;
use crate::application::TemplateKind;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.commands.tex, DEFAULT_TEX_COMMAND);
    assert_eq!(config.commands.bibtex, "bibtex \"{file}\"");
    assert_eq!(config.timeout(), Duration::from_secs(10));
    assert_eq!(config.poll_interval(), Duration::from_secs(1));
    assert_eq!(config.clean.extensions.len(), 19);
    assert_eq!(config.clean.folders, vec!["{file_parent}/_minted-{name}"]);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_default_tex_command_keeps_shell_syntax() {
    assert!(DEFAULT_TEX_COMMAND.starts_with("TEXINPUTS=./packages//:$TEXINPUTS texfot"));
    assert!(DEFAULT_TEX_COMMAND.contains("\"{tex_file}\""));
    assert!(DEFAULT_TEX_COMMAND.ends_with("Emergency|Fatal|$\""));
}

#[test]
fn test_sequences_use_configured_commands() {
    let mut config = Config::default();
    config.commands.tex = "lualatex {tex_file}".to_string();
    config.commands.bibtex = "biber {file}".to_string();

    let full = config.full_sequence();
    assert_eq!(full.len(), 4);
    assert_eq!(full.steps()[0].command, "lualatex {tex_file}");
    assert_eq!(full.steps()[1].command, "biber {file}");
    assert!(full.steps()[1].tolerate_failure);

    let update = config.update_sequence();
    assert_eq!(update.len(), 1);
    assert_eq!(update.steps()[0].command, "lualatex {tex_file}");
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[commands]
viewer = "zathura {pdf_file} &"

[clean]
extensions = ["aux", "log"]

[watch]
poll_interval_ms = 250

[process]
timeout_secs = 60

[templates]
beamer = "~/tex/talk.tex"

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.commands.viewer, "zathura {pdf_file} &");
    assert_eq!(config.commands.editor, DEFAULT_EDITOR_COMMAND);
    assert_eq!(config.clean.extensions, vec!["aux", "log"]);
    assert_eq!(config.clean.folders, vec!["{file_parent}/_minted-{name}"]);
    assert_eq!(config.poll_interval(), Duration::from_millis(250));
    assert_eq!(config.timeout(), Duration::from_secs(60));
    assert_eq!(
        config.template_path(TemplateKind::Beamer),
        Some(Path::new("~/tex/talk.tex"))
    );
    assert_eq!(config.template_path(TemplateKind::Document), None);
    assert_eq!(config.output.color, ColorMode::Never);
}

#[test]
fn test_unknown_keys_warn_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texmgr.toml");
    fs::write(&path, "[process]\ntimeout_sec = 5\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.process.timeout_secs, 10);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "timeout_sec");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("timeout_secs"));
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texmgr.toml");
    fs::write(&path, "[process]\ntimeout_secs = \"soon\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("texmgr.toml"));
}

#[test]
fn test_discover_prefers_explicit_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("texmgr.toml"), "[process]\ntimeout_secs = 1\n").unwrap();
    let explicit = dir.path().join("ci.toml");
    fs::write(&explicit, "[process]\ntimeout_secs = 99\n").unwrap();

    let (config, _) = Config::discover(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.process.timeout_secs, 99);
}

#[test]
fn test_discover_reads_project_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("texmgr.toml"), "[watch]\npoll_interval_ms = 300\n").unwrap();

    let (config, warnings) = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config.watch.poll_interval_ms, 300);
    assert!(warnings.is_empty());
}

#[test]
fn test_discover_missing_explicit_path_fails() {
    let dir = tempdir().unwrap();
    assert!(Config::discover(Some(&dir.path().join("missing.toml")), dir.path()).is_err());
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(Config::default(), |key| match key {
        "TEXMGR_TIMEOUT_SECS" => Some("30".to_string()),
        "TEXMGR_POLL_INTERVAL_MS" => Some(" 200 ".to_string()),
        "TEXMGR_COLOR" => Some("ALWAYS".to_string()),
        _ => None,
    });

    assert_eq!(config.timeout(), Duration::from_secs(30));
    assert_eq!(config.poll_interval(), Duration::from_millis(200));
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_env_overrides_ignore_garbage() {
    let config = with_env_overrides_from(Config::default(), |key| match key {
        "TEXMGR_TIMEOUT_SECS" => Some("ten".to_string()),
        "TEXMGR_COLOR" => Some("rainbow".to_string()),
        _ => None,
    });

    assert_eq!(config.process.timeout_secs, 10);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_suggest_key() {
    assert_eq!(suggest_key("viewr").as_deref(), Some("viewer"));
    assert_eq!(suggest_key("completely_unrelated"), None);
}
