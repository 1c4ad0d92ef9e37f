//! Traits shared by every lexkit command.

use crate::error::Result;

/// A runnable subcommand.
///
/// `Args` is the plain argument struct the binary fills from clap;
/// `Output` is what the caller needs to pick an exit code.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// The subcommand name as typed on the command line.
    fn name() -> &'static str;
}

/// Human-readable help for a command.
pub trait CommandDescription {
    /// A brief one-line description.
    fn description() -> &'static str;

    /// Longer help text explaining usage.
    fn help() -> &'static str;
}
