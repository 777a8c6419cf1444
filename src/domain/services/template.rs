//! Template extraction
//!
//! A deployable template looks like this:
//!
//! ```text
//! ---
//! target: .github/copilot-instructions.md
//! ---
//! # Anything outside the markers is documentation for kit maintainers
//! <!-- RPI:START -->
//! This is what gets deployed.
//! <!-- RPI:END -->
//! ```
//!
//! The frontmatter is not YAML; only `target:` lines are read.

use std::path::{Component, Path, PathBuf};

use crate::error::{KitError, KitResult};

/// Delimiter line for frontmatter sections
const FRONTMATTER_DELIMITER: &str = "---";

const TARGET_KEY: &str = "target:";

pub const SECTION_START: &str = "<!-- RPI:START -->";
pub const SECTION_END: &str = "<!-- RPI:END -->";

/// Split on `\n` with an optional preceding `\r`, keeping a trailing empty line
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Destination declared by a template's frontmatter, trimmed.
///
/// `file` is only used in error messages.
pub fn extract_target(content: &str, file: &Path) -> KitResult<String> {
    let mut lines = split_lines(content);

    if lines.next() != Some(FRONTMATTER_DELIMITER) {
        return Err(KitError::NoFrontmatter {
            file: file.to_path_buf(),
        });
    }

    let mut target: Option<&str> = None;
    let mut closed = false;
    for line in lines {
        if line == FRONTMATTER_DELIMITER {
            closed = true;
            break;
        }
        if target.is_none() {
            if let Some(value) = line.strip_prefix(TARGET_KEY) {
                target = Some(value.trim());
            }
        }
    }

    if !closed {
        return Err(KitError::UnclosedFrontmatter {
            file: file.to_path_buf(),
        });
    }

    match target {
        Some(target) if !target.is_empty() => Ok(target.to_string()),
        _ => Err(KitError::MissingTarget {
            file: file.to_path_buf(),
        }),
    }
}

/// Lines between the section markers, each followed by `\n`.
///
/// Marker lines are matched by substring and dropped. Several marked sections
/// are concatenated in order. A start marker never closed contributes nothing,
/// so without a balanced pair the result is `"\n"`.
pub fn extract_section(content: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let mut pending: Option<Vec<&str>> = None;

    for line in split_lines(content) {
        if line.contains(SECTION_START) {
            pending.get_or_insert_with(Vec::new);
            continue;
        }
        if line.contains(SECTION_END) {
            if let Some(lines) = pending.take() {
                output.extend(lines);
            }
            continue;
        }
        if let Some(lines) = pending.as_mut() {
            lines.push(line);
        }
    }

    let mut section = output.join("\n");
    section.push('\n');
    section
}

/// Join a template target onto `root`, refusing targets that leave it.
pub fn resolve_target(root: &Path, target: &str, file: &Path) -> KitResult<PathBuf> {
    let relative = Path::new(target);
    let escapes = relative.is_absolute()
        || relative
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)));

    if escapes {
        return Err(KitError::TargetEscape {
            target: target.to_string(),
            file: file.to_path_buf(),
        });
    }

    Ok(root.join(relative))
}

/// Parsed template: where it goes and what gets written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTemplate {
    pub target: String,
    pub body: String,
}

/// Extract target and section in one go
pub fn extract_template(content: &str, file: &Path) -> KitResult<ExtractedTemplate> {
    let target = extract_target(content, file)?;
    Ok(ExtractedTemplate {
        target,
        body: extract_section(content),
    })
}
