//! Tokenization of formulas written in the backslash notation.

use std::{fmt::Display, ops::Deref};

use itertools::Itertools;

/// The four connectives of the formula language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Negation `\neg`
    Not,
    /// Conjunction `\wedge`
    And,
    /// Disjunction `\vee`
    Or,
    /// Implication `\rightarrow`
    Imp,
}

impl Connective {
    /// All connectives, ordered from highest to lowest precedence.
    pub const ALL: [Connective; 4] = [
        Connective::Not,
        Connective::And,
        Connective::Or,
        Connective::Imp,
    ];

    /// The reserved marker of this connective in the textual notation.
    pub fn marker(&self) -> &'static str {
        match self {
            Connective::Not => r"\neg",
            Connective::And => r"\wedge",
            Connective::Or => r"\vee",
            Connective::Imp => r"\rightarrow",
        }
    }

    /// The glyph that is accepted as an alias of the marker.
    pub fn glyph(&self) -> char {
        match self {
            Connective::Not => '¬',
            Connective::And => '∧',
            Connective::Or => '∨',
            Connective::Imp => '⟶',
        }
    }

    /// The number of operands this connective takes.
    pub fn arity(&self) -> usize {
        match self {
            Connective::Not => 1,
            Connective::And | Connective::Or | Connective::Imp => 2,
        }
    }

    /// The binding strength of the connective. Higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            Connective::Not => 4,
            Connective::And => 3,
            Connective::Or => 2,
            Connective::Imp => 1,
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.glyph() == c)
    }
}

/// A single token of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A connective
    Op(Connective),
    /// An opening parenthesis
    Open,
    /// A closing parenthesis
    Close,
    /// Any other character
    Atom(char),
}

impl Symbol {
    pub fn is_atom(&self) -> bool {
        matches!(self, Symbol::Atom(_))
    }

    pub fn connective(&self) -> Option<Connective> {
        match self {
            Symbol::Op(op) => Some(*op),
            _ => None,
        }
    }
}

/// The ordered token sequence of a formula.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tokens(Vec<Symbol>);

impl Tokens {
    /// Returns the distinct atoms in order of first occurrence.
    pub fn atoms(&self) -> Vec<char> {
        self.0
            .iter()
            .filter_map(|s| match s {
                Symbol::Atom(c) => Some(*c),
                _ => None,
            })
            .unique()
            .collect()
    }
}

impl Deref for Tokens {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Symbol>> for Tokens {
    fn from(value: Vec<Symbol>) -> Self {
        Self(value)
    }
}

/// Splits a formula into tokens.
///
/// Whitespace is removed first, so markers may be interrupted by whitespace.
/// Each occurrence of a reserved marker (or its glyph) becomes a connective, parentheses become [`Symbol::Open`] and [`Symbol::Close`], every other character becomes an atom.
/// Tokenization never fails, rejecting unknown characters is left to the grammar.
pub fn tokenize(input: &str) -> Tokens {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::with_capacity(stripped.len());
    let mut rest = stripped.as_str();
    while let Some(c) = rest.chars().next() {
        if let Some(op) = Connective::ALL
            .into_iter()
            .find(|op| rest.starts_with(op.marker()))
        {
            tokens.push(Symbol::Op(op));
            rest = &rest[op.marker().len()..];
            continue;
        }
        let symbol = match c {
            '(' => Symbol::Open,
            ')' => Symbol::Close,
            c => match Connective::from_glyph(c) {
                Some(op) => Symbol::Op(op),
                None => Symbol::Atom(c),
            },
        };
        tokens.push(symbol);
        rest = &rest[c.len_utf8()..];
    }
    log::trace!("Tokenized '{}' into {} tokens", input, tokens.len());
    Tokens(tokens)
}

/* Pretty Printing */

impl Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Op(op) => write!(f, "{}", op),
            Symbol::Open => write!(f, "("),
            Symbol::Close => write!(f, ")"),
            Symbol::Atom(c) => write!(f, "{}", c),
        }
    }
}

impl Display for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
