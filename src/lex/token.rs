use ecow::EcoString;
use std::fmt;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::location::{Position, Span};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: EcoString,
    pub position: Position,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[must_use]
    pub fn column(&self) -> u32 {
        self.position.column
    }

    #[must_use]
    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    #[must_use]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Parsed value of a number literal. `None` for other tokens and for
    /// integers that do not fit in a `u64`.
    #[must_use]
    pub fn literal_value(&self) -> Option<LiteralValue> {
        match self.kind {
            TokenKind::IntegerLiteral => self.lexeme.parse().ok().map(LiteralValue::Integer),
            TokenKind::FloatLiteral => self.lexeme.parse().ok().map(LiteralValue::Float),
            _ => None,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self.kind {
            TokenKind::Identifier => Category::Identifier,
            TokenKind::IntegerLiteral => Category::IntegerNumber,
            TokenKind::FloatLiteral => Category::DecimalNumber,
            TokenKind::CharLiteral => Category::CharConstant,
            TokenKind::StringLiteral => Category::StringConstant,
            TokenKind::Keyword(_) => Category::ReservedWord,
            TokenKind::Operator(operator) => operator.category(),
            TokenKind::Punctuation(_) => Category::SpecialSymbol,
            TokenKind::Comment => Category::Comment,
            TokenKind::Directive => Category::PreprocessorDirective,
            TokenKind::EndOfInput => Category::EndOfInput,
            TokenKind::Invalid => Category::LexicalError,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end_of_input() {
            return write!(formatter, "{}", self.kind.name());
        }

        write!(formatter, "{}({:?})", self.kind.name(), self.lexeme.as_str())
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LiteralValue {
    Integer(u64),
    Float(f64),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value:?}"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, IntoStaticStr)]
pub enum TokenKind {
    Identifier,
    IntegerLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    Keyword(Keyword),
    Operator(Operator),
    Punctuation(Punctuation),
    Comment,
    Directive,
    EndOfInput,
    Invalid,
}

impl TokenKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// Reserved words. Anything else matching the identifier rule is an identifier.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Keyword {
    Int,
    Float,
    Char,
    Double,
    Void,
    #[strum(serialize = "string")]
    Str,
    Return,
    If,
    Else,
    While,
    For,
    Do,
    Switch,
    Case,
    Default,
    Break,
    Continue,
    Struct,
    Typedef,
    Sizeof,
    Goto,
}

impl Keyword {
    #[must_use]
    pub fn lookup(word: &str) -> Option<Self> {
        word.parse().ok()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum Operator {
    #[strum(serialize = "=")]
    Equal,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Asterisk,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "&")]
    Ampersand,
    #[strum(serialize = "|")]
    Pipe,
    #[strum(serialize = "^")]
    Caret,
    #[strum(serialize = "~")]
    Tilde,
    #[strum(serialize = "?")]
    Question,
    #[strum(serialize = ":")]
    Colon,
    #[strum(serialize = "==")]
    EqualEqual,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = "<=")]
    LessEqual,
    #[strum(serialize = ">=")]
    GreaterEqual,
    #[strum(serialize = "&&")]
    AmpersandAmpersand,
    #[strum(serialize = "||")]
    PipePipe,
    #[strum(serialize = "->")]
    Arrow,
    #[strum(serialize = "++")]
    PlusPlus,
    #[strum(serialize = "--")]
    MinusMinus,
    #[strum(serialize = "+=")]
    PlusEqual,
    #[strum(serialize = "-=")]
    MinusEqual,
    #[strum(serialize = "*=")]
    AsteriskEqual,
    #[strum(serialize = "/=")]
    SlashEqual,
    #[strum(serialize = "%=")]
    PercentEqual,
    #[strum(serialize = "<<")]
    LessLess,
    #[strum(serialize = ">>")]
    GreaterGreater,
    #[strum(serialize = "<<=")]
    LessLessEqual,
    #[strum(serialize = ">>=")]
    GreaterGreaterEqual,
}

impl Operator {
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::EqualEqual
            | Self::NotEqual
            | Self::Less
            | Self::Greater
            | Self::LessEqual
            | Self::GreaterEqual => Category::ComparisonOperator,
            Self::Plus | Self::Minus | Self::Asterisk | Self::Slash | Self::Percent => {
                Category::ArithmeticOperator
            }
            Self::Equal
            | Self::PlusEqual
            | Self::MinusEqual
            | Self::AsteriskEqual
            | Self::SlashEqual
            | Self::PercentEqual
            | Self::LessLessEqual
            | Self::GreaterGreaterEqual
            | Self::PlusPlus
            | Self::MinusMinus => Category::AssignmentOperator,
            Self::AmpersandAmpersand | Self::PipePipe | Self::Bang => Category::LogicalOperator,
            Self::Ampersand
            | Self::Pipe
            | Self::Caret
            | Self::Tilde
            | Self::LessLess
            | Self::GreaterGreater => Category::BitwiseOperator,
            Self::Arrow => Category::AccessOperator,
            Self::Question | Self::Colon => Category::ConditionalOperator,
        }
    }
}

// No strum `Display`: it parses `serialize` as a format string and rejects `{`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum Punctuation {
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ".")]
    Dot,
    #[strum(serialize = "...")]
    Ellipsis,
    #[strum(serialize = "(")]
    LeftParenthesis,
    #[strum(serialize = ")")]
    RightParenthesis,
    #[strum(serialize = "{")]
    LeftBrace,
    #[strum(serialize = "}")]
    RightBrace,
    #[strum(serialize = "[")]
    LeftSquare,
    #[strum(serialize = "]")]
    RightSquare,
}

impl fmt::Display for Punctuation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.into())
    }
}

/// Human-readable class of a token, as shown in the token table.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display)]
pub enum Category {
    #[strum(serialize = "reserved word")]
    ReservedWord,
    #[strum(serialize = "identifier")]
    Identifier,
    #[strum(serialize = "integer number")]
    IntegerNumber,
    #[strum(serialize = "decimal number")]
    DecimalNumber,
    #[strum(serialize = "string constant")]
    StringConstant,
    #[strum(serialize = "character constant")]
    CharConstant,
    #[strum(serialize = "comparison operator")]
    ComparisonOperator,
    #[strum(serialize = "arithmetic operator")]
    ArithmeticOperator,
    #[strum(serialize = "assignment operator")]
    AssignmentOperator,
    #[strum(serialize = "logical operator")]
    LogicalOperator,
    #[strum(serialize = "bitwise operator")]
    BitwiseOperator,
    #[strum(serialize = "access operator")]
    AccessOperator,
    #[strum(serialize = "conditional operator")]
    ConditionalOperator,
    #[strum(serialize = "special symbol")]
    SpecialSymbol,
    #[strum(serialize = "preprocessor directive")]
    PreprocessorDirective,
    #[strum(serialize = "comment")]
    Comment,
    #[strum(serialize = "lexical error")]
    LexicalError,
    #[strum(serialize = "end of input")]
    EndOfInput,
}
