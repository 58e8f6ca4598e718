use camino::Utf8PathBuf;

use crate::{error::Error, lex};

use super::Source;

/// Scans a file and fails with every lexical error it contains.
///
/// # Errors
///
/// See [`Source::load`] and [`Source::check`].
pub fn handle(path: Option<Utf8PathBuf>) -> Result<(), Error> {
    let source = Source::load(path)?;
    log::info!("checking {}", source.path);

    let mut lexer = lex::scan(&source.text);
    let token_count = lexer.by_ref().count();
    let errors = lexer.into_errors();

    log::debug!(
        "{}: {token_count} token(s), {} error(s)",
        source.path,
        errors.len()
    );

    source.check(errors)
}
