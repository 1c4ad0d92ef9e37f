//! `lexkit tokens`: print the token stream of one input.

use std::io::Write;
use std::path::PathBuf;

use lexkit_lex::Token;
use lexkit_util::Handler;
use tracing::debug;

use crate::commands::common::{lex_input, print_diagnostics, Input, LexSummary};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{LexerSection, OutputFormat, OutputSection};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to lex, or `-` for standard input.
    pub input: PathBuf,
    pub lexer: LexerSection,
    pub output: OutputSection,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lex the input and write the tokens to `out`.
    ///
    /// Errors inside the input go to standard error as diagnostics and are
    /// counted in the summary; they do not stop the stream.
    pub fn run_to(&self, out: &mut impl Write) -> Result<LexSummary> {
        let input = Input::read(&self.args.input)?;
        let handler = Handler::new();
        let show_values = self.args.output.show_values;

        let summary = match self.args.output.format {
            OutputFormat::Text => {
                let mut write_error = None;
                let summary = lex_input(&input, &self.args.lexer, &handler, |token| {
                    if write_error.is_none() {
                        write_error = writeln!(out, "{}", format_token(token, show_values)).err();
                    }
                })?;
                if let Some(err) = write_error {
                    return Err(err.into());
                }
                summary
            },
            OutputFormat::Json => {
                let mut tokens = Vec::new();
                let summary = lex_input(&input, &self.args.lexer, &handler, |token| {
                    tokens.push(strip_value(token, show_values));
                })?;
                serde_json::to_writer_pretty(&mut *out, &tokens)?;
                writeln!(out)?;
                summary
            },
        };
        out.flush()?;

        print_diagnostics(&handler, &input.name);
        Ok(summary)
    }
}

fn strip_value(mut token: Token, show_values: bool) -> Token {
    if !show_values {
        token.value = None;
    }
    token
}

/// `line:col KIND literal [= value]`
fn format_token(token: Token, show_values: bool) -> String {
    strip_value(token, show_values).to_string()
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = LexSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        self.run_to(&mut stdout.lock())
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the tokens of a file"
    }

    fn help() -> &'static str {
        "Lexes one file, or standard input when given `-`, and prints one \
         token per line or a JSON array. Number errors are reported on \
         standard error and lexing continues."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<LexSummary> {
    debug!(command = TokensCommand::name(), input = %args.input.display(), "starting");
    TokensCommand::new(args).execute()
}
