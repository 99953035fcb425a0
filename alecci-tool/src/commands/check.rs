//! Check command implementation.
//!
//! Lexes every input in parallel, reports unrecognized characters with
//! source snippets, and prints how many tokens of each category were seen.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use alecci_lex::{Lexer, LexerOptions, TokenCategory};
use alecci_util::{Diagnostic, Handler, Level, SourceFile, SourceMap, SourceSnippet};
use indexmap::IndexMap;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::commands::common::{error_messages, read_source, require_inputs};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::{Result, ToolError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Source files to check.
    pub files: Vec<PathBuf>,
    /// Lexer settings.
    pub options: LexerOptions,
    /// Color diagnostic headers.
    pub color: bool,
}

/// Outcome of checking a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub files: usize,
    pub tokens: usize,
    pub unrecognized: usize,
    /// Token counts in category order, categories never seen omitted
    pub summary: IndexMap<TokenCategory, usize>,
}

/// Lexing result of one file.
struct FileResult {
    counts: [usize; TokenCategory::ALL.len()],
    diagnostics: Vec<Diagnostic>,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Check every input, writing the summary to `out` and the diagnostics
    /// to `err`.
    pub fn write_to(&self, out: &mut impl Write, err: &mut impl Write) -> Result<CheckReport> {
        require_inputs(&self.args.files)?;

        let mut source_map = SourceMap::new();
        let mut ids = Vec::with_capacity(self.args.files.len());
        for path in &self.args.files {
            let source = read_source(path)?;
            ids.push(source_map.add_file(path.display().to_string(), source));
        }
        let files = ids
            .into_iter()
            .map(|id| source_map.get_file(id))
            .collect::<std::result::Result<Vec<Arc<SourceFile>>, _>>()?;
        debug!(files = source_map.file_count(), "registered sources");

        let options = self.args.options;
        let results: Vec<FileResult> = files
            .par_iter()
            .map(|file| lex_file(file, options))
            .collect();

        for diagnostic in results.iter().flat_map(|result| &result.diagnostics) {
            self.write_diagnostic(err, &source_map, diagnostic)?;
        }

        let report = summarize(&results);
        write_summary(out, &report)?;
        info!(
            files = report.files,
            tokens = report.tokens,
            unrecognized = report.unrecognized,
            "check finished"
        );
        Ok(report)
    }

    fn write_diagnostic(
        &self,
        err: &mut impl Write,
        source_map: &SourceMap,
        diagnostic: &Diagnostic,
    ) -> Result<()> {
        let file = source_map.get_file(diagnostic.span.file_id)?;
        writeln!(err, "{}", self.paint(diagnostic.level, &diagnostic.to_string()))?;
        writeln!(
            err,
            "  --> {}:{}:{}",
            file.name(),
            diagnostic.span.line,
            diagnostic.span.column
        )?;
        for snippet in &diagnostic.snippets {
            writeln!(err, "{}", snippet.format())?;
        }
        for note in &diagnostic.notes {
            writeln!(err, "  = {}: {}", self.paint(Level::Note, Level::Note.name()), note)?;
        }
        for help in &diagnostic.helps {
            writeln!(err, "  = {}: {}", self.paint(Level::Help, Level::Help.name()), help)?;
        }
        Ok(())
    }

    fn paint(&self, level: Level, text: &str) -> String {
        if self.args.color {
            format!("\x1b[{}m{}\x1b[0m", level.color_code(), text)
        } else {
            text.to_string()
        }
    }
}

fn lex_file(file: &SourceFile, options: LexerOptions) -> FileResult {
    let mut handler = Handler::new();
    let mut counts = [0; TokenCategory::ALL.len()];
    for token in Lexer::with_options(file.content(), &mut handler, options).with_file_id(file.id()) {
        counts[token.category as usize] += 1;
    }
    let diagnostics: Vec<Diagnostic> = handler
        .take_diagnostics()
        .into_iter()
        .map(|diagnostic| match SourceSnippet::from_span(file, diagnostic.span) {
            Some(snippet) => diagnostic.with_snippet(snippet.with_label("unrecognized")),
            None => diagnostic,
        })
        .collect();
    debug!(file = file.name(), warnings = diagnostics.len(), "checked file");
    FileResult {
        counts,
        diagnostics,
    }
}

fn summarize(results: &[FileResult]) -> CheckReport {
    let mut report = CheckReport {
        files: results.len(),
        ..Default::default()
    };
    for category in TokenCategory::ALL {
        let count: usize = results
            .iter()
            .map(|result| result.counts[category as usize])
            .sum();
        if count > 0 {
            report.summary.insert(category, count);
        }
        report.tokens += count;
    }
    report.unrecognized = report
        .summary
        .get(&TokenCategory::Unrecognized)
        .copied()
        .unwrap_or(0);
    report
}

fn write_summary(out: &mut impl Write, report: &CheckReport) -> Result<()> {
    for (category, count) in &report.summary {
        writeln!(out, "{:<24} {}", category.name(), count)?;
    }
    writeln!(
        out,
        "checked {} file(s): {} tokens, {} unrecognized",
        report.files, report.tokens, report.unrecognized
    )?;
    Ok(())
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let report = self.write_to(&mut stdout.lock(), &mut stderr.lock())?;

        if report.unrecognized > 0 {
            return Err(ToolError::Validation(format!(
                "{} {}",
                report.unrecognized,
                error_messages::UNRECOGNIZED_FOUND
            )));
        }
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Report unrecognized characters in AlEcci sources"
    }

    fn help() -> &'static str {
        "Lexes all files in parallel, prints a W1001 warning with a source \
         snippet for every unrecognized character and a per-category token \
         summary. Fails when any unrecognized character was found."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    debug!(command = CheckCommand::name(), "running command");
    CheckCommand::new(args).execute().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn source_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn check(files: Vec<PathBuf>) -> (CheckReport, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = CheckCommand::new(CheckArgs {
            files,
            ..Default::default()
        })
        .write_to(&mut out, &mut err)
        .unwrap();
        (
            report,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_clean_file() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "ok.algo", "x := 1\n");
        let (report, out, err) = check(vec![path]);

        assert_eq!(report.files, 1);
        assert_eq!(report.unrecognized, 0);
        assert_eq!(report.summary.get(&TokenCategory::VariableName), Some(&1));
        assert_eq!(report.summary.get(&TokenCategory::Whitespace), Some(&3));
        assert_eq!(report.tokens, 6);
        assert!(err.is_empty());
        assert!(out.ends_with("checked 1 file(s): 6 tokens, 0 unrecognized\n"));
    }

    #[test]
    fn test_summary_follows_category_order() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "a.algo", "x := 1");
        let (report, _, _) = check(vec![path]);

        let categories: Vec<_> = report.summary.keys().copied().collect();
        assert_eq!(
            categories,
            vec![
                TokenCategory::Whitespace,
                TokenCategory::IntegerLiteral,
                TokenCategory::Operator,
                TokenCategory::VariableName,
            ]
        );
    }

    #[test]
    fn test_unrecognized_characters_reported_with_snippet() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "bad.algo", "x := 1\ny := $\n");
        let (report, _, err) = check(vec![path]);

        assert_eq!(report.unrecognized, 1);
        assert!(err.contains("warning[W1001]: unrecognized character '$'"));
        assert!(err.contains("bad.algo:2:6"));
        assert!(err.contains("  2 | y := $"));
        assert!(err.contains("    |      ^ unrecognized"));
        assert!(err.contains("  = note: kept as a one-character token, lexing continues"));
        assert!(err.contains("  = help: no token can start with this character"));
    }

    #[test]
    fn test_counts_are_summed_across_files() {
        let dir = TempDir::new().unwrap();
        let first = source_file(&dir, "a.algo", "a $");
        let second = source_file(&dir, "b.algo", "b ;");
        let (report, _, err) = check(vec![first, second]);

        assert_eq!(report.files, 2);
        assert_eq!(report.unrecognized, 2);
        assert_eq!(report.summary.get(&TokenCategory::VariableName), Some(&2));
        assert!(err.contains("a.algo:1:3"));
        assert!(err.contains("b.algo:1:3"));
    }

    #[test]
    fn test_execute_fails_on_unrecognized() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "bad.algo", "$");
        let result = CheckCommand::new(CheckArgs {
            files: vec![path],
            ..Default::default()
        })
        .execute();

        match result {
            Err(ToolError::Validation(msg)) => assert!(msg.starts_with("1 unrecognized")),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_colored_header() {
        let dir = TempDir::new().unwrap();
        let path = source_file(&dir, "bad.algo", "$");
        let mut out = Vec::new();
        let mut err = Vec::new();
        CheckCommand::new(CheckArgs {
            files: vec![path],
            color: true,
            ..Default::default()
        })
        .write_to(&mut out, &mut err)
        .unwrap();

        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("\x1b[33mwarning[W1001]"));
    }
}
