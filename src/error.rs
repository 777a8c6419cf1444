//! Error types for rpi-kit
//!
//! Library code returns [`KitResult`]; the binary wraps these in `anyhow`
//! at the command layer.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for rpi-kit operations
pub type KitResult<T> = Result<T, KitError>;

/// Main error type for rpi-kit operations
#[derive(Error, Debug)]
pub enum KitError {
    /// Invalid flag/mode/target combination, unknown tool, bad config file.
    ///
    /// Always raised before any artifact is touched.
    #[error("{message}")]
    Configuration { message: String },

    /// A source artifact is missing from the kit (packaging defect)
    #[error("source not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Template does not start with a `---` line
    #[error("template missing frontmatter: {}", file.display())]
    NoFrontmatter { file: PathBuf },

    /// Template frontmatter never closed
    #[error("template frontmatter not closed: {}", file.display())]
    UnclosedFrontmatter { file: PathBuf },

    /// Template frontmatter has no usable `target:` line
    #[error("template missing target: {}", file.display())]
    MissingTarget { file: PathBuf },

    /// Template target points outside the deployment root
    #[error("template target '{target}' escapes the deployment root: {}", file.display())]
    TargetEscape { target: String, file: PathBuf },

    /// Prompt mode was requested without an interactive terminal
    #[error("Non-interactive shell; cannot prompt. Use --mode skip or --mode overwrite.")]
    NonInteractive,

    /// Reading the answer to a prompt failed
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// IO error on a specific path
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl KitError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True for every variant raised by template frontmatter validation
    pub fn is_malformed_frontmatter(&self) -> bool {
        matches!(
            self,
            Self::NoFrontmatter { .. }
                | Self::UnclosedFrontmatter { .. }
                | Self::MissingTarget { .. }
                | Self::TargetEscape { .. }
        )
    }
}
