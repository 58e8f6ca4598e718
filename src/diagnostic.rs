use std::io::{self, Write};

use camino::Utf8PathBuf;
use codespan_reporting::diagnostic::{Label, LabelStyle, Severity};
use codespan_reporting::files::SimpleFiles;
use ecow::EcoString;
use termcolor::{Buffer, ColorSpec, WriteColor};

use crate::lex::{LexicalError, Position, Span};

/// How diagnostics are laid out.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// One `path:line:column: message` line per error.
    #[default]
    Short,
    /// Source snippet with the offending text underlined.
    Rich,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub src: EcoString,
    pub path: Utf8PathBuf,
    pub span: Span,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub location: Location,
    pub title: String,
    pub text: String,
}

impl Diagnostic {
    #[must_use]
    pub fn from_lexical_error(src: &EcoString, path: &Utf8PathBuf, error: &LexicalError) -> Self {
        Self {
            location: Location {
                src: src.clone(),
                path: path.clone(),
                span: error.span,
                position: error.position,
            },
            title: format!("lexical error: {}", error.get_description()),
            text: error.message(),
        }
    }

    /// # Errors
    ///
    /// Fails only if `buffer` rejects the write.
    pub fn write(&self, buffer: &mut Buffer, format: Format) -> io::Result<()> {
        match format {
            Format::Short => self.write_short(buffer),
            Format::Rich => self.write_location(buffer),
        }
    }

    fn write_short(&self, buffer: &mut Buffer) -> io::Result<()> {
        let Location { path, position, .. } = &self.location;

        buffer.set_color(ColorSpec::new().set_bold(true))?;
        write!(buffer, "{path}:{}:{}:", position.line, position.column)?;
        buffer.reset()?;
        writeln!(buffer, " {}", self.text)
    }

    fn write_location(&self, buffer: &mut Buffer) -> io::Result<()> {
        let mut files = SimpleFiles::new();
        let file_id = files.add(self.location.path.as_str(), self.location.src.as_str());

        let labels = vec![Label {
            style: LabelStyle::Primary,
            file_id,
            range: self.location.span.range(),
            message: self.text.clone(),
        }];

        let diagnostic = codespan_reporting::diagnostic::Diagnostic::new(Severity::Error)
            .with_labels(labels)
            .with_message(&self.title);
        let config = codespan_reporting::term::Config::default();

        codespan_reporting::term::emit(buffer, &config, &files, &diagnostic).map_err(io::Error::other)
    }
}
