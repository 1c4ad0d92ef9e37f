//! lexkit-lex - Pluggable tokenization engine
//!
//! This crate turns a stream of characters into a stream of tokens. What
//! counts as a token is decided by an ordered chain of small parsers, so the
//! same engine serves configuration files, command languages or toy
//! programming languages.
//!
//! # Example Usage
//!
//! ```
//! use lexkit_lex::{Lexer, LexerBuilder, NumberValue, ParserChain, TokenKind};
//!
//! // Default chain: identifiers, digit runs, quoted strings, `#` comments.
//! let mut lexer = Lexer::new("greeting = \"hello\" # trailing".chars());
//! for token in &mut lexer {
//!     println!("{}", token.unwrap());
//! }
//!
//! // C-style numbers with typed values.
//! let mut lexer = LexerBuilder::new()
//!     .source("0x1F 0755 2.5e3".chars())
//!     .chain(ParserChain::c_like())
//!     .build()
//!     .unwrap();
//! let values: Vec<_> = lexer.by_ref().map(|t| t.unwrap().value.unwrap()).collect();
//! assert_eq!(
//!     values,
//!     [NumberValue::Integer(31), NumberValue::Integer(493), NumberValue::Float(2500.0)]
//! );
//! assert_eq!(lexer.get_token().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`source`] - character sources, including a streaming UTF-8 reader
//! - [`cursor`] - one-character lookahead with line/column tracking
//! - [`buffer`] - token text accumulator
//! - [`token`] - token, kind and number value types
//! - [`parsers`] - the parser trait, built-in parsers and chains
//! - [`lexer`] - the lexer, its builder and configuration
//! - [`unicode`] - character classes used by the default parsers
//! - [`error`] - lexer errors and their diagnostics
//!
//! # Positions
//!
//! Lines are 1-based. Columns are 0-based byte offsets within the line.
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for tokens and configuration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
mod context;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parsers;
pub mod source;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use buffer::TokenBuffer;
pub use context::ScanContext;
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{EofPolicy, Lexer, LexerBuilder, LexerConfig, SkipPolicy};
pub use parsers::{ParseResult, ParserChain, TokenParser};
pub use source::{CharSource, Utf8Reader};
pub use token::{NumberType, NumberValue, Token, TokenKind};
