//! Tokens command implementation.
//!
//! Lexes each input file and prints its token stream, either as text lines
//! or as JSON records.

use std::io::Write;
use std::path::{Path, PathBuf};

use alecci_lex::{Lexer, LexerOptions, Token};
use alecci_util::Handler;
use tracing::debug;

use crate::commands::common::{read_source, require_inputs, FileTokens, OutputFormat, TokenRecord};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Source files to lex.
    pub files: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Include whitespace tokens.
    pub show_whitespace: bool,
    /// Lexer settings.
    pub options: LexerOptions,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    /// Lex every input and write the result to `out`.
    pub fn write_to(&self, out: &mut impl Write) -> Result<()> {
        require_inputs(&self.args.files)?;

        let sources = self
            .args
            .files
            .iter()
            .map(|path| read_source(path).map(|source| (path, source)))
            .collect::<Result<Vec<_>>>()?;

        let lexed: Vec<(&PathBuf, Vec<Token<'_>>)> = sources
            .iter()
            .map(|(path, source)| (*path, self.lex(path, source)))
            .collect();

        match self.args.format {
            OutputFormat::Text => self.write_text(out, &lexed),
            OutputFormat::Json => self.write_json(out, &lexed),
        }
    }

    fn lex<'s>(&self, path: &Path, source: &'s str) -> Vec<Token<'s>> {
        let mut handler = Handler::new();
        let tokens: Vec<Token<'s>> = Lexer::with_options(source, &mut handler, self.args.options)
            .filter(|token| self.args.show_whitespace || !token.is_trivia())
            .collect();
        debug!(
            file = %path.display(),
            tokens = tokens.len(),
            warnings = handler.warning_count(),
            "lexed file"
        );
        tokens
    }

    fn write_text(&self, out: &mut impl Write, lexed: &[(&PathBuf, Vec<Token<'_>>)]) -> Result<()> {
        let with_headers = lexed.len() > 1;
        for (index, (path, tokens)) in lexed.iter().enumerate() {
            if with_headers {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "==> {} <==", path.display())?;
            }
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        }
        Ok(())
    }

    fn write_json(&self, out: &mut impl Write, lexed: &[(&PathBuf, Vec<Token<'_>>)]) -> Result<()> {
        let files: Vec<FileTokens<'_>> = lexed
            .iter()
            .map(|(path, tokens)| FileTokens {
                file: path.display().to_string(),
                tokens: tokens.iter().map(TokenRecord::from).collect(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &files)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of AlEcci sources"
    }

    fn help() -> &'static str {
        "Lexes each file and prints one line per token as \
         `line:col category \"lexeme\"`, or a JSON array with --format json."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    debug!(command = TokensCommand::name(), "running command");
    TokensCommand::new(args).execute()
}
