//! Lexer module.
//!
//! The lexer is split into small pieces:
//! - `core` - the [`Lexer`] itself: scan loop, putback, iteration
//! - `builder` - [`LexerBuilder`] for checked construction
//! - `config` - [`LexerConfig`] and its policies

mod builder;
mod config;
mod core;

pub use builder::LexerBuilder;
pub use config::{EofPolicy, LexerConfig, SkipPolicy};
pub use core::Lexer;
