pub mod error;
pub mod lexer;
pub mod location;
pub mod token;


pub use error::LexicalError;
pub use lexer::{scan, scan_with, tokenize, Lexer, ScanOptions, Scanned};
pub use location::{Position, Span};
pub use token::{Category, Keyword, LiteralValue, Operator, Punctuation, Token, TokenKind};
