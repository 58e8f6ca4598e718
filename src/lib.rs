pub mod cli;
pub mod diagnostic;
pub mod error;
pub mod lex;
pub mod symbols;
