use camino::Utf8PathBuf;
use ecow::EcoString;
use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};
use vec1::Vec1;

use crate::{
    diagnostic::{Diagnostic, Format},
    lex::LexicalError,
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{path}`: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read source from the editor: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("`{path}` has {} lexical error(s)", .errors.len())]
    Lexical {
        src: EcoString,
        path: Utf8PathBuf,
        errors: Vec1<LexicalError>,
    },
}

impl Error {
    /// Wraps the errors of a scan, or `None` when the scan was clean.
    #[must_use]
    pub fn lexical(src: EcoString, path: Utf8PathBuf, errors: Vec<LexicalError>) -> Option<Self> {
        let errors = Vec1::try_from_vec(errors).ok()?;

        Some(Self::Lexical { src, path, errors })
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Lexical { .. } => 1,
            Self::Io { .. } | Self::Prompt(_) => 2,
        }
    }

    #[must_use]
    pub fn pretty_string(&self, format: Format) -> String {
        let mut nocolor = Buffer::no_color();
        // Writes into an in-memory buffer cannot fail.
        let _ = self.pretty(&mut nocolor, format);
        String::from_utf8_lossy(nocolor.as_slice()).into_owned()
    }

    /// # Errors
    ///
    /// Fails only if `buffer` rejects the write.
    pub fn pretty(&self, buffer: &mut Buffer, format: Format) -> io::Result<()> {
        let diagnostics = self.to_diagnostics();

        if diagnostics.is_empty() {
            buffer.set_color(ColorSpec::new().set_bold(true).set_fg(Some(Color::Red)))?;
            write!(buffer, "error")?;
            buffer.reset()?;
            return writeln!(buffer, ": {self}");
        }

        for diagnostic in diagnostics {
            diagnostic.write(buffer, format)?;
            if format == Format::Rich {
                writeln!(buffer)?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Lexical { src, path, errors } => errors
                .iter()
                .map(|error| Diagnostic::from_lexical_error(src, path, error))
                .collect(),
            Error::Io { .. } | Error::Prompt(_) => Vec::new(),
        }
    }
}
