//! Shared plumbing for the lexing commands: reading inputs, driving the
//! lexer, and turning lexer errors into rendered diagnostics.

use std::io::Read;
use std::path::Path;

use lexkit_lex::{EofPolicy, LexError, LexerBuilder, Token, Utf8Reader};
use lexkit_util::{Diagnostic, Handler, SourceSnippet};
use tracing::debug;

use crate::config::LexerSection;
use crate::error::{CliError, Result};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Standard error message prefixes.
pub mod error_messages {
    /// Input file could not be read.
    pub const READ_FAILED: &str = "Cannot read";

    /// Target path exists but is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory:";

    /// Config file already present and `--force` not given.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force to overwrite):";
}

/// Standard output message prefixes.
pub mod output_messages {
    /// A file was written.
    pub const CREATED_FILE: &str = "Created";
}

/// One input, read fully into memory.
///
/// The bytes are lexed through [`Utf8Reader`], so malformed UTF-8 shows up
/// as replacement characters rather than aborting the command.
#[derive(Debug, Clone)]
pub struct Input {
    /// Name used in diagnostics.
    pub name: String,
    bytes: Vec<u8>,
}

impl Input {
    /// Reads a file, or standard input when `path` is `-`.
    pub fn read(path: &Path) -> Result<Self> {
        if path.as_os_str() == STDIN_PATH {
            let mut bytes = Vec::new();
            std::io::stdin().lock().read_to_end(&mut bytes)?;
            return Ok(Self::from_bytes("<stdin>", bytes));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            CliError::FileOperation(format!(
                "{} {}: {}",
                error_messages::READ_FAILED,
                path.display(),
                e
            ))
        })?;
        Ok(Self::from_bytes(path.display().to_string(), bytes))
    }

    /// Wraps bytes already in memory.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// The input as text, decoded exactly as the lexer sees it.
    pub fn text(&self) -> String {
        Utf8Reader::new(self.bytes.as_slice()).collect()
    }

    /// Line `number` (1-based) without its terminator.
    pub fn line(&self, number: u32) -> Option<String> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.text()
            .split('\n')
            .nth(index)
            .map(|line| line.trim_end_matches('\r').to_string())
    }
}

/// Counts gathered while lexing one or more inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexSummary {
    pub files: usize,
    pub tokens: usize,
    pub errors: usize,
}

impl LexSummary {
    /// True when no errors were reported.
    pub fn is_clean(&self) -> bool {
        self.errors == 0
    }

    /// Folds another summary into this one.
    pub fn absorb(&mut self, other: LexSummary) {
        self.files += other.files;
        self.tokens += other.tokens;
        self.errors += other.errors;
    }
}

/// Lexes `input` to completion, handing each token to `on_token` and each
/// error to `handler` as a diagnostic.
///
/// Scanning carries on after an error from wherever the failing parser left
/// the cursor. Under a strict end-of-input policy the final end-of-input
/// error is reported too.
pub fn lex_input(
    input: &Input,
    section: &LexerSection,
    handler: &Handler,
    mut on_token: impl FnMut(Token),
) -> Result<LexSummary> {
    let config = section.lexer_config();
    let mut lexer = LexerBuilder::new()
        .source(Utf8Reader::new(input.bytes.as_slice()))
        .chain(section.chain())
        .config(config)
        .build()?;

    let mut summary = LexSummary {
        files: 1,
        ..LexSummary::default()
    };

    for item in lexer.by_ref() {
        match item {
            Ok(token) => {
                summary.tokens += 1;
                on_token(token);
            },
            Err(err) => {
                summary.errors += 1;
                handler.emit_diagnostic(diagnostic_for(&err, input));
            },
        }
    }

    if config.eof == EofPolicy::Error && lexer.is_end() {
        if let Err(err) = lexer.get_token() {
            summary.errors += 1;
            handler.emit_diagnostic(diagnostic_for(&err, input));
        }
    }

    debug!(
        input = %input.name,
        tokens = summary.tokens,
        errors = summary.errors,
        "lexed"
    );
    Ok(summary)
}

/// The error's diagnostic, with the offending source line attached.
pub fn diagnostic_for(err: &LexError, input: &Input) -> Diagnostic {
    let diagnostic = err.to_diagnostic();
    let Some(span) = err.span() else {
        return diagnostic;
    };
    let Some(line) = input.line(span.line) else {
        return diagnostic;
    };

    // Token columns are byte offsets; snippets count characters from 1.
    let byte_column = span.column as usize;
    let start = line
        .get(..byte_column)
        .map_or(byte_column, |prefix| prefix.chars().count())
        + 1;
    let width = err.literal().map_or(1, |literal| literal.chars().count().max(1));
    let snippet = SourceSnippet::new(line, span.line as usize, start, start + width);
    diagnostic.with_snippet(snippet)
}

/// Writes every collected diagnostic to standard error.
pub fn print_diagnostics(handler: &Handler, origin: &str) {
    for diagnostic in handler.take() {
        eprintln!("{}\n", diagnostic.render(origin));
    }
}
