//! lexkit-util - Foundation types for the lexkit crates
//!
//! This crate holds the pieces every other lexkit crate leans on but that
//! carry no tokenization logic of their own:
//!
//! - [`span`] - byte ranges plus line/column for reporting
//! - [`diagnostic`] - severity levels, stable codes, the fluent
//!   [`DiagnosticBuilder`] and the collecting [`Handler`]
//! - [`error`] - error types for the operations above
//!
//! # Example
//!
//! ```
//! use lexkit_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("number literal out of range")
//!     .code(DiagnosticCode::E1004)
//!     .span(Span::point(3, 7))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use error::{DiagnosticError, DiagnosticResult, SpanError, SpanResult};
pub use span::Span;
