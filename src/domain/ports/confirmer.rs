//! Confirmer port
//!
//! Yes/no questions asked while deploying. The capability is optional: the
//! CLI only provides one when stdin is a terminal, and the conflict policy
//! turns its absence into [`KitError::NonInteractive`].
//!
//! [`KitError::NonInteractive`]: crate::error::KitError::NonInteractive

use crate::error::KitResult;

pub trait Confirmer {
    /// Ask `prompt`; `Ok(true)` only on an explicit yes.
    fn confirm(&self, prompt: &str) -> KitResult<bool>;
}
