use std::fmt::Write as _;
use std::io::{self, Write};

use camino::Utf8PathBuf;
use console::style;
use itertools::Itertools;

use crate::{
    error::Error,
    lex::{self, ScanOptions, Token},
    symbols::SymbolTable,
};

use super::Source;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub keep_comments: bool,
    pub symbols: bool,
    pub styled: bool,
}

/// Prints the token table (and optionally the symbol table) to stdout.
///
/// # Errors
///
/// Besides the errors of [`Source::load`] and [`Source::check`], returns
/// [`Error::Io`] when stdout is closed.
pub fn handle(path: Option<Utf8PathBuf>, options: Options) -> Result<(), Error> {
    let source = Source::load(path)?;
    log::info!("tokenizing {}", source.path);

    let scan_options = ScanOptions {
        keep_comments: options.keep_comments,
    };
    let scanned = lex::scan_with(&source.text, scan_options).into_scanned();

    let mut output = render_tokens(&scanned.tokens, options.styled);
    if options.symbols {
        output.push('\n');
        output.push_str(&render_symbols(
            &SymbolTable::from_tokens(&scanned.tokens),
            options.styled,
        ));
    }

    io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .map_err(|source| Error::Io {
            path: "<stdout>".into(),
            source,
        })?;

    source.check(scanned.errors)
}

#[must_use]
pub fn render_tokens(tokens: &[Token], styled: bool) -> String {
    let rows = tokens
        .iter()
        .map(|token| {
            vec![
                token.kind.name().to_owned(),
                token.category().to_string(),
                token.lexeme.escape_debug().to_string(),
                token.line().to_string(),
                token.column().to_string(),
                token
                    .literal_value()
                    .map(|value| value.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect_vec();

    render_table(&["Token", "Category", "Lexeme", "Line", "Column", "Value"], &rows, styled)
}

#[must_use]
pub fn render_symbols(table: &SymbolTable, styled: bool) -> String {
    if table.is_empty() {
        return "No identifiers found.\n".to_owned();
    }

    let rows = table
        .iter()
        .map(|(name, symbol)| {
            vec![
                name.to_string(),
                symbol.occurrences.to_string(),
                symbol.first_seen.to_string(),
            ]
        })
        .collect_vec();

    render_table(&["Identifier", "Occurrences", "First seen"], &rows, styled)
}

/// Github-flavoured markdown table with padded columns.
fn render_table(headers: &[&str], rows: &[Vec<String>], styled: bool) -> String {
    let widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .map(|row| row[index].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect_vec();

    let mut output = String::new();

    let header_line = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(header, width)| {
            style(format!("{header:<width$}"))
                .bold()
                .force_styling(styled)
                .to_string()
        })
        .join(" | ");
    let _ = writeln!(output, "| {header_line} |");

    let rule = widths.iter().map(|width| "-".repeat(width + 2)).join("|");
    let _ = writeln!(output, "|{rule}|");

    for row in rows {
        let line = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, width)| format!("{cell:<width$}"))
            .join(" | ");
        let _ = writeln!(output, "| {line} |");
    }

    output
}
