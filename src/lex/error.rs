use ecow::EcoString;

use super::location::{Position, Span};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexicalError {
    pub error: Type,
    pub offending_text: EcoString,
    pub position: Position,
    pub span: Span,
}

impl LexicalError {
    #[must_use]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[must_use]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[must_use]
    pub fn message(&self) -> String {
        match &self.error {
            Type::UnexpectedCharacter { character } => {
                format!("unexpected character '{character}'")
            }
            Type::MalformedNumber => {
                format!("malformed numeric literal '{}'", self.offending_text)
            }
            Type::UnterminatedString => "unterminated string literal".to_owned(),
            Type::UnterminatedChar => "unterminated character literal".to_owned(),
            Type::EmptyChar => "empty character literal".to_owned(),
            Type::UnterminatedComment => "unterminated block comment".to_owned(),
        }
    }

    #[must_use]
    pub fn get_description(&self) -> &'static str {
        match &self.error {
            Type::UnexpectedCharacter { .. } => "unexpected character",
            Type::MalformedNumber => "malformed numeric literal",
            Type::UnterminatedString => "unterminated string literal",
            Type::UnterminatedChar => "unterminated character literal",
            Type::EmptyChar => "empty character literal",
            Type::UnterminatedComment => "unterminated block comment",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Type {
    UnexpectedCharacter { character: char },
    MalformedNumber,
    UnterminatedString,
    UnterminatedChar,
    EmptyChar,
    UnterminatedComment,
}
