//! Terminal confirmer
//!
//! Asks yes/no questions on the terminal with `dialoguer`. Only constructed
//! when stdin is a terminal; otherwise the caller has no confirmer at all.

use dialoguer::Confirm;
use is_terminal::IsTerminal;

use crate::domain::ports::Confirmer;
use crate::error::KitResult;

/// Confirmer reading answers from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalConfirmer {
    _private: (),
}

impl TerminalConfirmer {
    /// A confirmer when stdin is interactive, `None` otherwise
    pub fn detect() -> Option<Self> {
        if std::io::stdin().is_terminal() {
            Some(Self::default())
        } else {
            None
        }
    }
}

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> KitResult<bool> {
        let answer = Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .show_default(true)
            .interact()?;
        Ok(answer)
    }
}
