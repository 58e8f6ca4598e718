use std::collections::BTreeMap;

use ecow::EcoString;

use crate::lex::{Position, Token, TokenKind};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Symbol {
    pub occurrences: usize,
    pub first_seen: Position,
}

/// Identifiers seen in a token stream, ordered by name.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct SymbolTable {
    symbols: BTreeMap<EcoString, Symbol>,
}

impl SymbolTable {
    #[must_use]
    pub fn from_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Self {
        let mut table = Self::default();

        for token in tokens {
            table.record(token);
        }

        table
    }

    pub fn record(&mut self, token: &Token) {
        if token.kind != TokenKind::Identifier {
            return;
        }

        self.symbols
            .entry(token.lexeme.clone())
            .and_modify(|symbol| symbol.occurrences += 1)
            .or_insert(Symbol {
                occurrences: 1,
                first_seen: token.position,
            });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EcoString, &Symbol)> {
        self.symbols.iter()
    }
}
