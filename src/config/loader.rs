//! Configuration loading

use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::{ConfigWarning, KitConfig};
use crate::domain::value_objects::{Agent, DeploymentMode, CONFIG_FILE_NAME};
use crate::error::{KitError, KitResult};

/// Default conflict mode (`skip`, `overwrite`, `prompt`)
pub const MODE_VAR: &str = "RPI_KIT_MODE";

/// Default agents for `rpi-kit user`, comma-separated
pub const AGENTS_VAR: &str = "RPI_KIT_AGENTS";

/// Load a config file, collecting unknown keys as warnings
pub fn load_with_warnings(path: &Path) -> KitResult<(KitConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| KitError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: KitConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| {
        KitError::configuration(format!("Invalid config {}: {}", path.display(), e.message()))
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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<kit root>/rpi-kit.toml` if present, apply environment overrides
pub fn load_or_default(kit_root: &Path) -> KitResult<(KitConfig, Vec<ConfigWarning>)> {
    let path = kit_root.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        debug!(path = %path.display(), "loading kit config");
        load_with_warnings(&path)?
    } else {
        (KitConfig::default(), Vec::new())
    };

    Ok((with_env_overrides(config)?, warnings))
}

/// Apply environment variable overrides (`RPI_KIT_*` prefix)
pub fn with_env_overrides(mut config: KitConfig) -> KitResult<KitConfig> {
    if let Some(mode) = env_value(MODE_VAR) {
        let mode: DeploymentMode = mode.to_lowercase().parse().map_err(|_| {
            KitError::configuration(format!(
                "Invalid {MODE_VAR}: {mode}. Valid values: skip, overwrite, prompt"
            ))
        })?;
        config.install.mode = Some(mode);
    }

    if let Some(agents) = env_value(AGENTS_VAR) {
        let parsed = Agent::parse_list(&agents)?;
        if !parsed.is_empty() {
            config.install.agents = Some(parsed);
        }
    }

    Ok(config)
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "install",
        "mode",
        "agents",
        "missing_source",
        "vscode",
        "enabled",
        "settings",
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
