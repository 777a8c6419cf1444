//! Infrastructure implementations of the `Confirmer` port

mod interactive;

pub use interactive::TerminalConfirmer;
