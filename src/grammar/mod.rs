//! The context-free grammar of well-formed formulas.
//!
//! The grammar is kept in a form where every production is either a single terminal rule or a sequence of exactly two nonterminals, as required by the CYK recognizer in [`cyk`].

use std::fmt::Display;

use indexmap::IndexMap;

use crate::token::{Connective, Symbol, Tokens};

pub mod cyk;

pub use cyk::CykTable;

/// The nonterminals of the formula grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    /// A complete expression, the start symbol
    E,
    /// An expression followed by an implication
    EArrow,
    /// An expression followed by a disjunction
    EOr,
    /// An expression followed by a conjunction
    EAnd,
    /// An opening parenthesis followed by an expression
    OpenE,
    Arrow,
    Or,
    And,
    Not,
    Open,
    Close,
}

/// A rule that matches a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalRule {
    /// Matches exactly the given connective
    Connective(Connective),
    Open,
    Close,
    /// Matches any token that is neither a connective nor a parenthesis
    Atom,
}

impl TerminalRule {
    pub fn matches(&self, symbol: &Symbol) -> bool {
        match (self, symbol) {
            (TerminalRule::Connective(c), Symbol::Op(op)) => c == op,
            (TerminalRule::Open, Symbol::Open) => true,
            (TerminalRule::Close, Symbol::Close) => true,
            (TerminalRule::Atom, s) => s.is_atom(),
            _ => false,
        }
    }
}

/// A production of a nonterminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Production {
    Terminal(TerminalRule),
    Binary(NonTerminal, NonTerminal),
}

/// A grammar with binary productions and terminal rules only.
#[derive(Debug, Clone)]
pub struct Grammar {
    start: NonTerminal,
    rules: IndexMap<NonTerminal, Vec<Production>>,
}

impl Grammar {
    /// Creates a grammar from its start symbol and rules.
    pub fn new(start: NonTerminal, rules: IndexMap<NonTerminal, Vec<Production>>) -> Self {
        Self { start, rules }
    }

    /// The grammar of well-formed formulas:
    ///
    /// ```text
    /// E -> E Arrow E | E Or E | E And E | Not E | ( E ) | atom
    /// ```
    ///
    /// with the binary forms and the parenthesization factored through helper nonterminals.
    pub fn formulas() -> Self {
        use NonTerminal::*;
        use Production::{Binary, Terminal};

        let mut rules = IndexMap::new();
        rules.insert(
            E,
            vec![
                Binary(EArrow, E),
                Binary(EOr, E),
                Binary(EAnd, E),
                Binary(Not, E),
                Binary(OpenE, Close),
                Terminal(TerminalRule::Atom),
            ],
        );
        rules.insert(EArrow, vec![Binary(E, Arrow)]);
        rules.insert(EOr, vec![Binary(E, Or)]);
        rules.insert(EAnd, vec![Binary(E, And)]);
        rules.insert(OpenE, vec![Binary(Open, E)]);
        rules.insert(
            Arrow,
            vec![Terminal(TerminalRule::Connective(Connective::Imp))],
        );
        rules.insert(Or, vec![Terminal(TerminalRule::Connective(Connective::Or))]);
        rules.insert(And, vec![Terminal(TerminalRule::Connective(Connective::And))]);
        rules.insert(Not, vec![Terminal(TerminalRule::Connective(Connective::Not))]);
        rules.insert(Open, vec![Terminal(TerminalRule::Open)]);
        rules.insert(Close, vec![Terminal(TerminalRule::Close)]);
        Self::new(E, rules)
    }

    pub fn start(&self) -> NonTerminal {
        self.start
    }

    /// Iterates over all nonterminals together with their productions.
    pub fn rules(&self) -> impl Iterator<Item = (&NonTerminal, &Vec<Production>)> {
        self.rules.iter()
    }

    /// Iterates over all binary productions `A -> B C` as triples `(A, B, C)`.
    pub fn binary_productions(
        &self,
    ) -> impl Iterator<Item = (NonTerminal, NonTerminal, NonTerminal)> + '_ {
        self.rules.iter().flat_map(|(lhs, prods)| {
            prods.iter().filter_map(move |p| match p {
                Production::Binary(b, c) => Some((*lhs, *b, *c)),
                Production::Terminal(_) => None,
            })
        })
    }

    /// Returns the nonterminals that derive the given token directly.
    pub fn derives_terminal<'a>(
        &'a self,
        symbol: &'a Symbol,
    ) -> impl Iterator<Item = NonTerminal> + 'a {
        self.rules.iter().filter_map(move |(lhs, prods)| {
            prods
                .iter()
                .any(|p| matches!(p, Production::Terminal(t) if t.matches(symbol)))
                .then_some(*lhs)
        })
    }

    /// Builds the CYK table of the given tokens.
    pub fn table(&self, tokens: &Tokens) -> CykTable {
        CykTable::build(self, tokens)
    }

    /// Returns `true` iff the tokens are derivable from the start symbol.
    /// The empty sequence is never accepted.
    pub fn recognize(&self, tokens: &Tokens) -> bool {
        if tokens.is_empty() {
            log::debug!("Rejecting empty input");
            return false;
        }
        let accepted = self.table(tokens).derives(0, tokens.len() - 1, self.start);
        log::debug!(
            "{} formula: {}",
            if accepted { "Accepted" } else { "Rejected" },
            tokens
        );
        accepted
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::formulas()
    }
}

/// Returns `true` iff the tokens form a well-formed formula.
pub fn is_well_formed(tokens: &Tokens) -> bool {
    Grammar::formulas().recognize(tokens)
}

/* Pretty Printing */

impl Display for TerminalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalRule::Connective(c) => write!(f, "{}", c),
            TerminalRule::Open => write!(f, "("),
            TerminalRule::Close => write!(f, ")"),
            TerminalRule::Atom => write!(f, "atom"),
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Production::Terminal(t) => write!(f, "{}", t),
            Production::Binary(b, c) => write!(f, "{:?} {:?}", b, c),
        }
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (lhs, prods) in &self.rules {
            write!(f, "{:?} ->", lhs)?;
            let mut first = true;
            for p in prods {
                if !first {
                    write!(f, " |")?;
                }
                write!(f, " {}", p)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
