use crate::lex::error::{LexicalError, Type};
use crate::lex::token::{Keyword, Operator, Punctuation, Token, TokenKind};
use itertools::{peek_nth, Itertools, PeekNth};
use std::iter::FusedIterator;
use std::str::FromStr;

use super::location::{Position, Span};

/// Scans `input` lazily with the default options.
///
/// # Panics
///
/// This function will panic if the input string length exceeds the maximum value
/// of `u32`, as it is the largest supported character count. This would only occur
/// if a single source file is approximately 4 GB in size, which is highly unlikely.
#[must_use]
pub fn scan(input: &str) -> Lexer<'_> {
    Lexer::new(input, ScanOptions::default())
}

/// Same as [`scan`], with explicit options.
///
/// # Panics
///
/// See [`scan`].
#[must_use]
pub fn scan_with(input: &str, options: ScanOptions) -> Lexer<'_> {
    Lexer::new(input, options)
}

/// Scans the whole input eagerly, returning every token along with every error.
///
/// # Panics
///
/// See [`scan`].
#[must_use]
pub fn tokenize(input: &str) -> Scanned {
    scan(input).into_scanned()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Emit comments as [`TokenKind::Comment`] instead of skipping them.
    pub keep_comments: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexicalError>,
}

impl Scanned {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    NameStart,
    Digit,
    DoubleQuote,
    SingleQuote,
    Hash,
    Slash,
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        match ch {
            '_' | 'a'..='z' | 'A'..='Z' => Self::NameStart,
            '0'..='9' => Self::Digit,
            '"' => Self::DoubleQuote,
            '\'' => Self::SingleQuote,
            '#' => Self::Hash,
            '/' => Self::Slash,
            ch if ch.is_whitespace() => Self::Whitespace,
            _ => Self::Other,
        }
    }
}

#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    options: ScanOptions,
    input_chars: PeekNth<std::vec::IntoIter<(u32, char)>>,
    pending_tokens: Vec<Token>,
    errors: Vec<LexicalError>,
    current_char: Option<char>,
    current_location: u32,
    end_location: u32,
    position: Position,
    at_line_start: bool,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// # Panics
    ///
    /// Panics if `source` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn new(source: &'src str, options: ScanOptions) -> Self {
        let end_location = u32::try_from(source.len()).expect("Lex input string is too long");
        let chars = source
            .char_indices()
            .map(|(byte_index, char)| {
                let index = u32::try_from(byte_index).expect("Lex input string is too long");
                (index, char)
            })
            .collect_vec();

        let mut lexer = Lexer {
            source,
            options,
            input_chars: peek_nth(chars),
            pending_tokens: Vec::new(),
            errors: Vec::new(),
            current_char: None,
            current_location: 0,
            end_location,
            position: Position::default(),
            at_line_start: true,
            finished: false,
        };

        let _ = lexer.advance_char();

        lexer
    }

    /// Errors recorded for the tokens produced so far.
    #[must_use]
    pub fn errors(&self) -> &[LexicalError] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<LexicalError> {
        self.errors
    }

    /// Drains the remaining tokens and pairs them with all recorded errors.
    #[must_use]
    pub fn into_scanned(mut self) -> Scanned {
        let tokens = self.by_ref().collect_vec();

        Scanned {
            tokens,
            errors: self.errors,
        }
    }

    fn advance_char(&mut self) -> Option<char> {
        let char = self.current_char;

        if let Some(ch) = char {
            if ch == '\n' {
                self.position.line += 1;
                self.position.column = 1;
                self.at_line_start = true;
            } else {
                self.position.column += 1;
                if !matches!(ch, ' ' | '\t') {
                    self.at_line_start = false;
                }
            }
        }

        match self.next_input_char() {
            Some((location, ch)) => {
                self.current_location = location;
                self.current_char = Some(ch);
            }
            None => {
                self.current_location = self.end_location;
                self.current_char = None;
            }
        }

        char
    }

    /// Reads the next character, folding `\r\n` and a lone `\r` into one `\n`
    /// located at the `\r`. Offsets after it are untouched, so slicing the
    /// source by span still sees the carriage return.
    fn next_input_char(&mut self) -> Option<(u32, char)> {
        let (location, ch) = self.input_chars.next()?;
        if ch != '\r' {
            return Some((location, ch));
        }

        if matches!(self.input_chars.peek_nth(0), Some((_, '\n'))) {
            let _ = self.input_chars.next();
        }

        Some((location, '\n'))
    }

    fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            let _ = self.advance_char();
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.input_chars
            .peek_nth(0)
            .map(|&(_, ch)| if ch == '\r' { '\n' } else { ch })
    }

    fn inner_next(&mut self) -> Token {
        while self.pending_tokens.is_empty() {
            self.consume();
        }

        self.pending_tokens.remove(0)
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_location)
    }

    fn emit(&mut self, kind: TokenKind, start: u32, position: Position) {
        let span = self.span_from(start);
        let token = Token {
            kind,
            lexeme: self.source[span.range()].into(),
            position,
            span,
        };

        log::trace!("{token} at {position}");
        self.pending_tokens.push(token);
    }

    /// Emits an `Invalid` token for everything consumed since `start` and
    /// records the matching error at `error_position`.
    fn emit_invalid(&mut self, error: Type, start: u32, position: Position, error_position: Position) {
        self.emit(TokenKind::Invalid, start, position);

        let span = self.span_from(start);
        let error = LexicalError {
            error,
            offending_text: self.source[span.range()].into(),
            position: error_position,
            span,
        };

        log::debug!("lexical error at {}: {}", error.position, error.message());
        self.errors.push(error);
    }

    fn consume(&mut self) {
        let Some(ch) = self.current_char else {
            self.emit(TokenKind::EndOfInput, self.current_location, self.position);
            return;
        };

        match CharClass::of(ch) {
            CharClass::Whitespace => {
                let _ = self.advance_char();
            }
            CharClass::NameStart => self.lex_name(),
            CharClass::Digit => self.lex_number(),
            CharClass::DoubleQuote => self.lex_string(),
            CharClass::SingleQuote => self.lex_char(),
            CharClass::Hash if self.at_line_start => self.lex_directive(),
            CharClass::Slash if self.peek_char() == Some('/') => self.lex_line_comment(),
            CharClass::Slash if self.peek_char() == Some('*') => self.lex_block_comment(),
            CharClass::Hash | CharClass::Slash | CharClass::Other => self.lex_symbol(ch),
        }
    }

    fn lex_name(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        while self.is_name_continuation() {
            let _ = self.advance_char();
        }

        let name = &self.source[self.span_from(start_location).range()];
        let kind = match Keyword::lookup(name) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier,
        };

        self.emit(kind, start_location, start_position);
    }

    fn lex_number(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        self.skip_digits();

        let mut kind = TokenKind::IntegerLiteral;
        if self.current_char == Some('.') {
            let _ = self.advance_char();
            self.skip_digits();
            kind = TokenKind::FloatLiteral;
        }

        if self.is_name_continuation() {
            while self.is_name_continuation() {
                let _ = self.advance_char();
            }

            self.emit_invalid(
                Type::MalformedNumber,
                start_location,
                start_position,
                start_position,
            );
            return;
        }

        self.emit(kind, start_location, start_position);
    }

    fn skip_digits(&mut self) {
        while matches!(self.current_char, Some('0'..='9')) {
            let _ = self.advance_char();
        }
    }

    fn lex_string(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        let _ = self.advance_char();

        loop {
            match self.current_char {
                Some('"') => {
                    let _ = self.advance_char();
                    self.emit(TokenKind::StringLiteral, start_location, start_position);
                    return;
                }
                Some('\\') => {
                    let _ = self.advance_char();
                    if self.current_char.is_some() {
                        let _ = self.advance_char();
                    }
                }
                Some('\n') | None => {
                    self.emit_invalid(
                        Type::UnterminatedString,
                        start_location,
                        start_position,
                        start_position,
                    );
                    return;
                }
                Some(_) => {
                    let _ = self.advance_char();
                }
            }
        }
    }

    fn lex_char(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        let _ = self.advance_char();

        match self.current_char {
            Some('\'') => {
                let _ = self.advance_char();
                self.emit_invalid(Type::EmptyChar, start_location, start_position, start_position);
                return;
            }
            Some('\n') | None => {
                self.emit_invalid(
                    Type::UnterminatedChar,
                    start_location,
                    start_position,
                    start_position,
                );
                return;
            }
            Some('\\') => {
                let _ = self.advance_char();
                if !matches!(self.current_char, Some('\n') | None) {
                    let _ = self.advance_char();
                }
            }
            Some(_) => {
                let _ = self.advance_char();
            }
        }

        if self.current_char == Some('\'') {
            let _ = self.advance_char();
            self.emit(TokenKind::CharLiteral, start_location, start_position);
        } else {
            self.emit_invalid(
                Type::UnterminatedChar,
                start_location,
                start_position,
                start_position,
            );
        }
    }

    fn lex_directive(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        self.skip_to_line_end();
        self.emit(TokenKind::Directive, start_location, start_position);
    }

    fn lex_line_comment(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        self.skip_to_line_end();

        if self.options.keep_comments {
            self.emit(TokenKind::Comment, start_location, start_position);
        }
    }

    fn skip_to_line_end(&mut self) {
        while !matches!(self.current_char, Some('\n') | None) {
            let _ = self.advance_char();
        }
    }

    fn lex_block_comment(&mut self) {
        let start_location = self.current_location;
        let start_position = self.position;

        self.advance_n(2);

        loop {
            let next = self.peek_char();
            match self.current_char {
                Some('*') if next == Some('/') => {
                    self.advance_n(2);

                    if self.options.keep_comments {
                        self.emit(TokenKind::Comment, start_location, start_position);
                    }
                    return;
                }
                Some(_) => {
                    let _ = self.advance_char();
                }
                None => {
                    let end_position = self.position;
                    self.emit_invalid(
                        Type::UnterminatedComment,
                        start_location,
                        start_position,
                        end_position,
                    );
                    return;
                }
            }
        }
    }

    fn lex_symbol(&mut self, ch: char) {
        let start_location = self.current_location;
        let start_position = self.position;

        let rest = &self.source[start_location as usize..];
        let longest = (1..=3).rev().find_map(|length| {
            let candidate = rest.get(..length)?;
            symbol_kind(candidate).map(|kind| (kind, length))
        });

        if let Some((kind, length)) = longest {
            self.advance_n(length);
            self.emit(kind, start_location, start_position);
        } else {
            let _ = self.advance_char();
            self.emit_invalid(
                Type::UnexpectedCharacter { character: ch },
                start_location,
                start_position,
                start_position,
            );
        }
    }

    fn is_name_continuation(&self) -> bool {
        matches!(
            self.current_char,
            Some('_' | 'a'..='z' | 'A'..='Z' | '0'..='9')
        )
    }
}

fn symbol_kind(candidate: &str) -> Option<TokenKind> {
    Operator::from_str(candidate)
        .map(TokenKind::Operator)
        .or_else(|_| Punctuation::from_str(candidate).map(TokenKind::Punctuation))
        .ok()
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.inner_next();
        if token.is_end_of_input() {
            self.finished = true;
        }

        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
