//! Configuration for the pointcut lexer
//!
//! Split the same way the rest of the crate treats configuration: hard
//! security boundaries are compile-time constants in [`constants`], user
//! preferences are runtime values in [`runtime`] loaded from environment
//! variables or a TOML file.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{LexerPreferences, LoggingPreferences, Preferences};
