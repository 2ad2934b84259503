//! Truth-functional evaluation of trees.

use std::{collections::HashMap, fmt::Display};

use indexmap::IndexSet;
use itertools::Itertools;

use super::{Node, NodeKind};

/// An assignment of truth values to atoms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    values: HashMap<char, bool>,
}

impl Assignment {
    /// Create a new assignment that maps no atoms
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the value of an atom, overwriting any previous value.
    pub fn set(&mut self, atom: char, value: bool) {
        self.values.insert(atom, value);
    }

    pub fn get(&self, atom: char) -> Option<bool> {
        self.values.get(&atom).copied()
    }

    /// Enumerates all `2ⁿ` assignments of the given atoms.
    pub fn all(atoms: &IndexSet<char>) -> impl Iterator<Item = Assignment> + '_ {
        (0..1u64 << atoms.len()).map(move |bits| {
            atoms
                .iter()
                .enumerate()
                .map(|(i, a)| (*a, bits & (1 << i) != 0))
                .collect()
        })
    }
}

impl FromIterator<(char, bool)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (char, bool)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Node {
    /// Evaluate the tree under the given assignment.
    /// Returns None if the assignment is partial and the value of the tree depends on the missing atoms.
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        match self.kind {
            NodeKind::Atom(c) => assignment.get(c),
            NodeKind::Not => self.children[0].evaluate(assignment).map(|v| !v),
            NodeKind::And => {
                match (
                    self.children[0].evaluate(assignment),
                    self.children[1].evaluate(assignment),
                ) {
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    (Some(true), Some(true)) => Some(true),
                    _ => None,
                }
            }
            NodeKind::Or => {
                match (
                    self.children[0].evaluate(assignment),
                    self.children[1].evaluate(assignment),
                ) {
                    (Some(true), _) | (_, Some(true)) => Some(true),
                    (Some(false), Some(false)) => Some(false),
                    _ => None,
                }
            }
            NodeKind::Imp => {
                match (
                    self.children[0].evaluate(assignment),
                    self.children[1].evaluate(assignment),
                ) {
                    (Some(false), _) | (_, Some(true)) => Some(true),
                    (Some(true), Some(false)) => Some(false),
                    _ => None,
                }
            }
        }
    }

    /// Returns `true` if both trees have the same truth value under every assignment of their atoms.
    ///
    /// Checks all `2ⁿ` assignments of the `n` atoms occurring in either tree.
    pub fn is_equivalent(&self, other: &Node) -> bool {
        let atoms: IndexSet<char> = self.atoms().union(&other.atoms()).copied().collect();
        let equivalent = Assignment::all(&atoms).all(|a| self.evaluate(&a) == other.evaluate(&a));
        equivalent
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}]",
            self.values
                .iter()
                .sorted()
                .map(|(a, v)| format!("{}: {}", a, v))
                .join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment(values: &[(char, bool)]) -> Assignment {
        values.iter().copied().collect()
    }

    #[test]
    fn evaluate_connectives() {
        let p = Node::atom('p');
        let q = Node::atom('q');
        let a = assignment(&[('p', true), ('q', false)]);
        assert_eq!(p.evaluate(&a), Some(true));
        assert_eq!(Node::not(p.clone()).evaluate(&a), Some(false));
        assert_eq!(Node::and(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Node::or(p.clone(), q.clone()).evaluate(&a), Some(true));
        assert_eq!(Node::imp(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Node::imp(q, p).evaluate(&a), Some(true));
    }

    #[test]
    fn evaluate_partial() {
        let p = Node::atom('p');
        let q = Node::atom('q');
        let a = assignment(&[('p', false)]);
        assert_eq!(q.evaluate(&a), None);
        assert_eq!(Node::and(p.clone(), q.clone()).evaluate(&a), Some(false));
        assert_eq!(Node::or(p.clone(), q.clone()).evaluate(&a), None);
        assert_eq!(Node::imp(p, q).evaluate(&a), Some(true));
    }

    #[test]
    fn all_assignments() {
        let atoms: IndexSet<char> = ['p', 'q', 'r'].into_iter().collect();
        let all: Vec<_> = Assignment::all(&atoms).collect();
        assert_eq!(all.len(), 8);
        assert_eq!(all.iter().map(|a| a.to_string()).unique().count(), 8);
    }

    #[test]
    fn equivalence() {
        let p = Node::atom('p');
        let q = Node::atom('q');
        assert!(Node::imp(p.clone(), q.clone()).is_equivalent(&Node::or(Node::not(p.clone()), q.clone())));
        assert!(!Node::imp(p.clone(), q.clone()).is_equivalent(&Node::imp(q.clone(), p.clone())));
        // atoms missing on one side are still enumerated
        assert!(!p.is_equivalent(&Node::and(p.clone(), q)));
    }

    #[test]
    fn equivalence_of_disjoint_atoms() {
        let p = Node::atom('p');
        let q = Node::atom('q');
        let taut_p = Node::or(p.clone(), Node::not(p));
        let taut_q = Node::imp(q.clone(), q);
        assert!(taut_p.is_equivalent(&taut_q));
        assert!(taut_q.is_equivalent(&taut_p));
    }

    #[test]
    fn display() {
        let a = assignment(&[('q', false), ('p', true)]);
        assert_eq!(a.to_string(), "[p: true, q: false]");
    }
}
