//! Interactive chat module
//!
//! Provides a readline-based interactive chat with the companion.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
