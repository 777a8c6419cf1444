use std::fs;

use serde_json::json;
use tempfile::tempdir;

use super::*;
use crate::application::MissingSourcePolicy;
use crate::domain::value_objects::{Agent, DeploymentMode};

#[test]
fn default_config() {
    let config = KitConfig::default();
    assert_eq!(config.mode(), DeploymentMode::Skip);
    assert_eq!(config.agents(), Agent::ALL.to_vec());
    assert!(config.vscode.enabled);
    assert_eq!(config.required_settings().len(), 2);
}

#[test]
fn load_full_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(
        &path,
        r#"
[install]
mode = "Overwrite"
agents = ["claude", "codex"]

[vscode]
enabled = false

[vscode.settings]
"editor.formatOnSave" = true
"files.eol" = "\n"
"#,
    )
    .unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.mode(), DeploymentMode::Overwrite);
    assert_eq!(config.agents(), vec![Agent::Claude, Agent::Codex]);
    assert!(!config.vscode.enabled);

    let settings = config.required_settings();
    let rendered: Vec<_> = settings.iter().map(|s| s.render()).collect();
    assert_eq!(
        rendered,
        vec![
            r#""github.copilot.chat.codeGeneration.useInstructionFiles": true"#,
            r#""chat.promptFiles": true"#,
            r#""editor.formatOnSave": true"#,
            r#""files.eol": "\n""#,
        ]
    );
    assert_eq!(settings.iter().nth(2).unwrap().value(), &json!(true));
}

#[test]
fn configured_setting_can_replace_builtin_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(&path, "[vscode.settings]\n\"chat.promptFiles\" = false\n").unwrap();

    let (config, _) = load_with_warnings(&path).unwrap();
    let settings = config.required_settings();

    assert_eq!(settings.len(), 2);
    assert_eq!(settings.iter().nth(1).unwrap().value(), &json!(false));
}

#[test]
fn unknown_keys_become_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(&path, "[install]\nmdoe = \"skip\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.mode(), DeploymentMode::Skip);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "mdoe");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("mode"));
    assert!(warnings[0].to_string().contains("did you mean 'mode'?"));
}

#[test]
fn invalid_mode_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(&path, "[install]\nmode = \"sometimes\"\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(err.to_string().starts_with("Invalid config"));
}

#[test]
fn unknown_agent_is_a_configuration_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(&path, "[install]\nagents = [\"cursor\"]\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(err.to_string().contains("Unknown agent ID: cursor"));
}

#[test]
fn missing_config_file_uses_defaults() {
    if std::env::var(MODE_VAR).is_ok() || std::env::var(AGENTS_VAR).is_ok() {
        return;
    }
    let dir = tempdir().unwrap();
    let (config, warnings) = load_or_default(dir.path()).unwrap();
    assert_eq!(config, KitConfig::default());
    assert!(warnings.is_empty());
}

#[test]
fn missing_source_policy_from_install_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(&path, "[install]\nmissing_source = \"warn\"\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(config.missing_source(), MissingSourcePolicy::Warn);
    assert_eq!(KitConfig::default().missing_source(), MissingSourcePolicy::Abort);
}

#[test]
fn invalid_missing_source_policy_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("rpi-kit.toml");
    fs::write(&path, "[install]\nmissing_source = \"ignore\"\n").unwrap();

    assert!(load_with_warnings(&path).is_err());
}
