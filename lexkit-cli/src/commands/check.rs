//! `lexkit check`: lex files and report problems without printing tokens.

use std::path::PathBuf;

use lexkit_util::Handler;
use tracing::{debug, info};

use crate::commands::common::{lex_input, print_diagnostics, Input, LexSummary};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::LexerSection;
use crate::error::{CliError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files to lex, in order.
    pub inputs: Vec<PathBuf>,
    pub lexer: LexerSection,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    fn run(&self) -> Result<LexSummary> {
        if self.args.inputs.is_empty() {
            return Err(CliError::Validation("No input files specified".to_string()));
        }

        let mut total = LexSummary::default();
        for path in &self.args.inputs {
            let input = Input::read(path)?;
            let handler = Handler::new();
            let summary = lex_input(&input, &self.args.lexer, &handler, |_| {})?;
            print_diagnostics(&handler, &input.name);
            info!(input = %input.name, errors = summary.errors, "checked");
            total.absorb(summary);
        }

        println!("{}", summary_line(&total));
        Ok(total)
    }
}

/// `N error(s) in M file(s)`
pub fn summary_line(summary: &LexSummary) -> String {
    format!("{} error(s) in {} file(s)", summary.errors, summary.files)
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = LexSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report lexing errors in files"
    }

    fn help() -> &'static str {
        "Lexes every file given, prints a diagnostic for each error found \
         and finishes with a one-line summary."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<LexSummary> {
    debug!(command = CheckCommand::name(), files = args.inputs.len(), "starting");
    CheckCommand::new(args).execute()
}
