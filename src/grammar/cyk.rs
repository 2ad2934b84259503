//! CYK recognition.

use std::fmt::Display;

use smallvec::SmallVec;

use crate::token::Tokens;

use super::{Grammar, NonTerminal};

type Cell = SmallVec<[NonTerminal; 4]>;

/// The upper-triangular table of the CYK algorithm.
/// The cell `(i, j)` holds the nonterminals deriving the tokens `i..=j`.
#[derive(Debug, Clone)]
pub struct CykTable {
    n: usize,
    cells: Vec<Cell>,
}

impl CykTable {
    fn empty(n: usize) -> Self {
        Self {
            n,
            cells: vec![Cell::new(); n * n],
        }
    }

    /// Fills the table bottom-up.
    ///
    /// Cells on the diagonal are populated from terminal rules only.
    /// A cell `(i, j)` with `i < j` is populated from binary productions `A -> B C` with `B` in `(i, k)` and `C` in `(k + 1, j)` for some `i <= k < j`.
    /// Runs in `O(n³ · |G|)`.
    pub fn build(grammar: &Grammar, tokens: &Tokens) -> Self {
        let n = tokens.len();
        let mut table = Self::empty(n);
        for (i, symbol) in tokens.iter().enumerate() {
            for nt in grammar.derives_terminal(symbol) {
                table.insert(i, i, nt);
            }
        }

        let binaries: Vec<_> = grammar.binary_productions().collect();
        for l in 1..n {
            for i in 0..n - l {
                let j = i + l;
                for k in i..j {
                    for &(a, b, c) in &binaries {
                        if table.derives(i, k, b) && table.derives(k + 1, j, c) {
                            table.insert(i, j, a);
                        }
                    }
                }
            }
        }
        table
    }

    /// The number of tokens this table was built for.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The nonterminals deriving the tokens `i..=j`.
    /// Empty if `i > j` or out of bounds.
    pub fn get(&self, i: usize, j: usize) -> &[NonTerminal] {
        if i > j || j >= self.n {
            return &[];
        }
        &self.cells[i * self.n + j]
    }

    /// Returns `true` if `nt` derives the tokens `i..=j`.
    pub fn derives(&self, i: usize, j: usize, nt: NonTerminal) -> bool {
        self.get(i, j).contains(&nt)
    }

    fn insert(&mut self, i: usize, j: usize, nt: NonTerminal) {
        let cell = &mut self.cells[i * self.n + j];
        if !cell.contains(&nt) {
            cell.push(nt);
        }
    }
}

impl Display for CykTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n {
            for j in i..self.n {
                let cell = self.get(i, j);
                if !cell.is_empty() {
                    writeln!(f, "[{}, {}]: {:?}", i, j, cell)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn diagonal_from_terminals() {
        let tokens = tokenize(r"(p \wedge q)");
        let table = Grammar::formulas().table(&tokens);
        assert_eq!(table.get(0, 0), &[NonTerminal::Open]);
        assert_eq!(table.get(1, 1), &[NonTerminal::E]);
        assert_eq!(table.get(2, 2), &[NonTerminal::And]);
        assert_eq!(table.get(4, 4), &[NonTerminal::Close]);
    }

    #[test]
    fn spans_from_binary_productions() {
        let tokens = tokenize(r"(p \wedge q)");
        let table = Grammar::formulas().table(&tokens);
        assert!(table.derives(1, 2, NonTerminal::EAnd));
        assert!(table.derives(1, 3, NonTerminal::E));
        assert!(table.derives(0, 3, NonTerminal::OpenE));
        assert!(table.derives(0, 4, NonTerminal::E));
        assert!(!table.derives(0, 3, NonTerminal::E));
    }

    #[test]
    fn cells_hold_no_duplicates() {
        // `p ∧ q ∧ r` has two derivations of the whole span
        let tokens = tokenize(r"p \wedge q \wedge r");
        let table = Grammar::formulas().table(&tokens);
        assert_eq!(table.get(0, 4), &[NonTerminal::E]);
    }

    #[test]
    fn lower_triangle_is_empty() {
        let tokens = tokenize(r"p \vee q");
        let table = Grammar::formulas().table(&tokens);
        assert!(table.get(2, 0).is_empty());
        assert!(table.get(0, 3).is_empty());
        assert_eq!(table.len(), 3);
    }
}
