pub mod check;
pub mod input;
pub mod panic;
pub mod tokens;

use camino::Utf8PathBuf;
use ecow::EcoString;

use crate::{error::Error, lex::LexicalError};

/// Path shown in diagnostics for text typed into the editor prompt.
pub const EDITOR_PATH: &str = "<editor>";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorArg {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for termcolor::ColorChoice {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Auto => termcolor::ColorChoice::Auto,
            ColorArg::Always => termcolor::ColorChoice::Always,
            ColorArg::Never => termcolor::ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: Utf8PathBuf,
    pub text: EcoString,
}

impl Source {
    /// Reads `path`, or asks for the text in an editor when there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Prompt`] when the editor prompt fails.
    pub fn load(path: Option<Utf8PathBuf>) -> Result<Self, Error> {
        let Some(path) = path else {
            let text = input::get_user_input()?;
            return Ok(Self {
                path: EDITOR_PATH.into(),
                text: text.into(),
            });
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Self {
                path,
                text: text.into(),
            }),
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Lexical`] carrying every error when there is at least one.
    pub fn check(self, errors: Vec<LexicalError>) -> Result<(), Error> {
        match Error::lexical(self.text, self.path, errors) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
