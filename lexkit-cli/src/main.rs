//! lexkit - command-line front end for the lexkit tokenizer.
//!
//! Parses arguments with clap, sets up logging, loads `lexkit.toml` and
//! dispatches to a subcommand. Exits with status 1 when a command fails or
//! reports lexing errors.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_init, run_tokens, CheckArgs, InitArgs, TokensArgs};
use config::{Config, LexerOverrides, NumberStyle, OutputFormat};
use error::{CliError, Result};

/// lexkit - pluggable tokenizer
///
/// Turns text into a token stream using a configurable chain of token
/// parsers. Settings come from lexkit.toml and can be overridden per run.
#[derive(Parser, Debug)]
#[command(name = "lexkit")]
#[command(author = "Lexkit Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pluggable tokenizer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "LEXKIT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LEXKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "LEXKIT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a file
    ///
    /// Lexes FILE (or standard input for `-`) and prints one token per
    /// line, or a JSON array with --format json.
    Tokens(TokensCommand),

    /// Report lexing errors in files
    Check(CheckCommand),

    /// Write a default lexkit.toml
    Init(InitCommand),
}

/// Lexer settings shared by the lexing subcommands.
#[derive(Args, Debug, Default)]
struct LexerFlags {
    /// Number syntax
    #[arg(long, value_enum)]
    numbers: Option<NumberStyle>,

    /// Treat end of input as an error
    #[arg(long)]
    strict: bool,

    /// Continue down the chain after skipped text instead of restarting it
    #[arg(long)]
    no_rescan: bool,

    /// Character that starts a line comment
    #[arg(long, value_name = "C")]
    comment_marker: Option<char>,
}

#[derive(Parser, Debug)]
struct TokensCommand {
    /// File to lex, `-` for standard input
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[command(flatten)]
    lexer: LexerFlags,

    /// Output format
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit number values from the output
    #[arg(long)]
    no_values: bool,
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to lex
    #[arg(value_name = "FILE", required = true)]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    lexer: LexerFlags,
}

#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write lexkit.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing lexkit.toml
    #[arg(short, long)]
    force: bool,
}

impl From<&LexerFlags> for LexerOverrides {
    fn from(flags: &LexerFlags) -> Self {
        Self {
            numbers: flags.numbers,
            strict: flags.strict,
            no_rescan: flags.no_rescan,
            comment_marker: flags.comment_marker,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Runs the parsed command line. `Ok(false)` means the command finished but
/// reported errors.
fn run(cli: Cli) -> Result<bool> {
    init_logging(cli.verbose, cli.no_color)?;
    let config = load_config(cli.config.as_deref())?;
    execute_command(cli.command, cli.verbose, config)
}

/// Install the tracing subscriber. Logs go to stderr so stdout only carries
/// command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| CliError::Config(format!("Failed to initialize logging: {}", e)))
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<bool> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Init(args) => execute_init(args, verbose),
    }
}

fn execute_tokens(args: TokensCommand, config: Config) -> Result<bool> {
    let Config {
        mut lexer,
        mut output,
    } = config;
    lexer.apply(&LexerOverrides::from(&args.lexer));
    if let Some(format) = args.format {
        output.format = format;
    }
    if args.no_values {
        output.show_values = false;
    }

    let summary = run_tokens(TokensArgs {
        input: args.input,
        lexer,
        output,
    })?;
    Ok(summary.is_clean())
}

fn execute_check(args: CheckCommand, config: Config) -> Result<bool> {
    let mut lexer = config.lexer;
    lexer.apply(&LexerOverrides::from(&args.lexer));

    let summary = run_check(CheckArgs {
        inputs: args.inputs,
        lexer,
    })?;
    Ok(summary.is_clean())
}

fn execute_init(args: InitCommand, verbose: bool) -> Result<bool> {
    run_init(InitArgs {
        verbose,
        force: args.force,
        path: args.path,
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["lexkit", "tokens", "input.txt"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("input.txt"));
            assert!(args.format.is_none());
            assert!(!args.lexer.strict);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_stdin() {
        let cli = Cli::parse_from(["lexkit", "tokens", "-"]);
        assert!(matches!(cli.command, Commands::Tokens(ref args) if args.input == Path::new("-")));
    }

    #[test]
    fn test_cli_parse_tokens_with_lexer_flags() {
        let cli = Cli::parse_from([
            "lexkit",
            "tokens",
            "input.txt",
            "--numbers",
            "c",
            "--strict",
            "--no-rescan",
            "--comment-marker",
            ";",
        ]);
        if let Commands::Tokens(args) = cli.command {
            let overrides = LexerOverrides::from(&args.lexer);
            assert_eq!(overrides.numbers, Some(NumberStyle::C));
            assert!(overrides.strict);
            assert!(overrides.no_rescan);
            assert_eq!(overrides.comment_marker, Some(';'));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_format() {
        let cli = Cli::parse_from(["lexkit", "tokens", "input.txt", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_number_style() {
        let result = Cli::try_parse_from(["lexkit", "tokens", "x", "--numbers", "roman"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check_many() {
        let cli = Cli::parse_from(["lexkit", "check", "a.txt", "b.txt"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.inputs.len(), 2);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_files() {
        assert!(Cli::try_parse_from(["lexkit", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_init_with_path_and_force() {
        let cli = Cli::parse_from(["lexkit", "init", "--path", "/tmp/test", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/test")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "lexkit",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/lexkit.toml",
            "init",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/lexkit.toml")));
    }

    #[test]
    fn test_flags_override_config() {
        let flags = LexerFlags {
            numbers: Some(NumberStyle::C),
            ..LexerFlags::default()
        };
        let mut config = Config::default();
        config.lexer.apply(&LexerOverrides::from(&flags));
        assert_eq!(config.lexer.numbers, NumberStyle::C);
        assert!(config.lexer.rescan_after_skip);
    }
}
