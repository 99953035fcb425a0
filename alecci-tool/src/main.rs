//! alecci - command-line front end for the AlEcci lexer.
//!
//! Parses arguments with clap, sets up logging, loads `alecci.toml`, and
//! dispatches to the `tokens`, `check` and `init` subcommands.

mod commands;
mod config;
mod error;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use alecci_lex::LexerOptions;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::CheckCommand, common::OutputFormat, init::InitCommand, run_check, run_init,
    run_tokens, tokens::TokensCommand, traits::CommandDescription, CheckArgs, InitArgs,
    TokensArgs,
};
use config::{Config, StringsSetting};
use error::{Result, ToolError};

/// alecci - tokenize and check AlEcci pseudocode
#[derive(Parser, Debug)]
#[command(name = "alecci")]
#[command(author = "AlEcci Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check AlEcci pseudocode", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ALECCI_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ALECCI_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ALECCI_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the alecci CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = TokensCommand::description(), long_about = TokensCommand::help())]
    Tokens(TokensOpts),

    #[command(about = CheckCommand::description(), long_about = CheckCommand::help())]
    Check(CheckOpts),

    #[command(about = InitCommand::description(), long_about = InitCommand::help())]
    Init(InitOpts),
}

/// Lexer flags shared by `tokens` and `check`.
#[derive(clap::Args, Debug)]
struct LexerFlags {
    /// String style (default: from config)
    #[arg(long, value_enum)]
    strings: Option<StringsSetting>,

    /// Classify built-in function names before the naming convention
    #[arg(long)]
    builtins_first: bool,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensOpts {
    /// Source files to lex
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Include whitespace tokens
    #[arg(short, long)]
    whitespace: bool,

    #[command(flatten)]
    lexer: LexerFlags,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckOpts {
    /// Source files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    #[command(flatten)]
    lexer: LexerFlags,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitOpts {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing alecci.toml
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the default is `info`. Logs go to stderr so token output stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ToolError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Config settings with command-line flags applied on top.
fn lexer_options(config: &Config, flags: &LexerFlags) -> LexerOptions {
    let mut lexer = config.lexer.clone();
    if let Some(strings) = flags.strings {
        lexer.strings = strings;
    }
    lexer.builtins_first |= flags.builtins_first;
    lexer.to_options()
}

fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Check(args) => execute_check(args, no_color, config),
        Commands::Init(args) => execute_init(args),
    }
}

fn execute_tokens(args: TokensOpts, config: Config) -> Result<()> {
    let tokens_args = TokensArgs {
        options: lexer_options(&config, &args.lexer),
        files: args.files,
        format: args.format.unwrap_or(config.output.format),
        show_whitespace: args.whitespace || config.output.show_whitespace,
    };
    run_tokens(tokens_args)
}

fn execute_check(args: CheckOpts, no_color: bool, config: Config) -> Result<()> {
    let check_args = CheckArgs {
        options: lexer_options(&config, &args.lexer),
        files: args.files,
        color: !no_color && std::io::stderr().is_terminal(),
    };
    run_check(check_args)
}

fn execute_init(args: InitOpts) -> Result<()> {
    run_init(InitArgs {
        force: args.force,
        path: args.path,
    })
}
