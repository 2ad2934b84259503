//! Parse trees of propositional formulas.

use std::fmt::Display;

use indexmap::IndexSet;
use quickcheck::{Arbitrary, Gen};

use crate::token::Connective;

mod builder;
mod eval;
pub mod normal;

pub use builder::build_tree;
pub use eval::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A propositional atom
    Atom(char),
    /// Negation
    Not,
    /// Conjunction
    And,
    /// Disjunction
    Or,
    /// Implication
    Imp,
}

impl NodeKind {
    /// The number of children a node of this kind has.
    pub fn arity(&self) -> usize {
        match self {
            NodeKind::Atom(_) => 0,
            NodeKind::Not => 1,
            NodeKind::And | NodeKind::Or | NodeKind::Imp => 2,
        }
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, NodeKind::Atom(_))
    }
}

impl From<Connective> for NodeKind {
    fn from(op: Connective) -> Self {
        match op {
            Connective::Not => NodeKind::Not,
            Connective::And => NodeKind::And,
            Connective::Or => NodeKind::Or,
            Connective::Imp => NodeKind::Imp,
        }
    }
}

/// A node of a parse tree.
/// Every node owns its children, the number of children always equals the arity of its kind.
///
/// Nodes should be created through the constructors [Node::atom], [Node::not], [Node::and], [Node::or], and [Node::imp].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
}

impl Node {
    pub fn atom(c: char) -> Self {
        Self {
            kind: NodeKind::Atom(c),
            children: Vec::new(),
        }
    }

    pub fn not(child: Node) -> Self {
        Self {
            kind: NodeKind::Not,
            children: vec![child],
        }
    }

    pub fn and(lhs: Node, rhs: Node) -> Self {
        Self::binary(NodeKind::And, lhs, rhs)
    }

    pub fn or(lhs: Node, rhs: Node) -> Self {
        Self::binary(NodeKind::Or, lhs, rhs)
    }

    pub fn imp(lhs: Node, rhs: Node) -> Self {
        Self::binary(NodeKind::Imp, lhs, rhs)
    }

    fn binary(kind: NodeKind, lhs: Node, rhs: Node) -> Self {
        Self {
            kind,
            children: vec![lhs, rhs],
        }
    }

    /// Returns [`NodeKind`] of the node
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Returns the children of the node
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Consumes the node and returns its kind and children.
    pub fn into_parts(self) -> (NodeKind, Vec<Node>) {
        (self.kind, self.children)
    }

    /// Counts the nodes of this tree.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Returns the atoms of this tree in order of first occurrence.
    pub fn atoms(&self) -> IndexSet<char> {
        let mut atoms = IndexSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms(&self, atoms: &mut IndexSet<char>) {
        match self.kind {
            NodeKind::Atom(c) => {
                atoms.insert(c);
            }
            _ => self.children.iter().for_each(|ch| ch.collect_atoms(atoms)),
        }
    }

    /// Returns `true` if this node is an atom or a negated atom.
    pub fn is_literal(&self) -> bool {
        match self.kind {
            NodeKind::Atom(_) => true,
            NodeKind::Not => self.children[0].kind.is_atom(),
            _ => false,
        }
    }

    /// Returns `true` if no implication occurs in this tree.
    pub fn is_implication_free(&self) -> bool {
        self.kind != NodeKind::Imp && self.children.iter().all(Node::is_implication_free)
    }

    /// Returns `true` if this tree is in negation normal form, i.e., it is implication free and negation is only applied to atoms.
    pub fn is_nnf(&self) -> bool {
        match self.kind {
            NodeKind::Atom(_) => true,
            NodeKind::Not => self.is_literal(),
            NodeKind::And | NodeKind::Or => self.children.iter().all(Node::is_nnf),
            NodeKind::Imp => false,
        }
    }

    /// Returns `true` if this tree is a disjunction of literals.
    pub fn is_clause(&self) -> bool {
        match self.kind {
            NodeKind::Or => self.children.iter().all(Node::is_clause),
            _ => self.is_literal(),
        }
    }

    /// Returns `true` if this tree is in conjunctive normal form, i.e., it is a conjunction of clauses.
    pub fn is_cnf(&self) -> bool {
        match self.kind {
            NodeKind::And => self.children.iter().all(Node::is_cnf),
            _ => self.is_clause(),
        }
    }
}

/* Pretty */

/// Renders the tree in the backslash notation.
/// Binary connectives are always parenthesized, negation is prefixed with `" \neg "`.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            NodeKind::Atom(c) => write!(f, "{}", c),
            NodeKind::Not => write!(f, " {} {}", Connective::Not, self.children[0]),
            NodeKind::And | NodeKind::Or | NodeKind::Imp => {
                let op = match self.kind {
                    NodeKind::And => Connective::And,
                    NodeKind::Or => Connective::Or,
                    _ => Connective::Imp,
                };
                write!(f, "({} {} {})", self.children[0], op, self.children[1])
            }
        }
    }
}

/* Arbitrary */

const ARBITRARY_ATOMS: [char; 5] = ['p', 'q', 'r', 's', 't'];
const ARBITRARY_MAX_DEPTH: usize = 4;

impl Node {
    fn arbitrary_with_depth(g: &mut Gen, depth: usize) -> Self {
        let atom = *g.choose(&ARBITRARY_ATOMS).unwrap_or(&'p');
        if depth == 0 {
            return Node::atom(atom);
        }
        match g.choose(&[0, 1, 2, 3, 4]) {
            Some(&1) => Node::not(Self::arbitrary_with_depth(g, depth - 1)),
            Some(&2) => Node::and(
                Self::arbitrary_with_depth(g, depth - 1),
                Self::arbitrary_with_depth(g, depth - 1),
            ),
            Some(&3) => Node::or(
                Self::arbitrary_with_depth(g, depth - 1),
                Self::arbitrary_with_depth(g, depth - 1),
            ),
            Some(&4) => Node::imp(
                Self::arbitrary_with_depth(g, depth - 1),
                Self::arbitrary_with_depth(g, depth - 1),
            ),
            _ => Node::atom(atom),
        }
    }
}

impl Arbitrary for Node {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = usize::arbitrary(g) % (ARBITRARY_MAX_DEPTH + 1);
        Self::arbitrary_with_depth(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.children.clone().into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Node {
        Node::atom('p')
    }

    fn q() -> Node {
        Node::atom('q')
    }

    #[test]
    fn arity_matches_children() {
        for n in [
            p(),
            Node::not(p()),
            Node::and(p(), q()),
            Node::or(p(), q()),
            Node::imp(p(), q()),
        ] {
            assert_eq!(n.children().len(), n.kind().arity());
        }
    }

    #[test]
    fn display_atom() {
        assert_eq!(p().to_string(), "p");
    }

    #[test]
    fn display_binary() {
        assert_eq!(Node::and(p(), q()).to_string(), r"(p \wedge q)");
        assert_eq!(Node::imp(p(), q()).to_string(), r"(p \rightarrow q)");
    }

    #[test]
    fn display_negation() {
        assert_eq!(Node::or(Node::not(p()), q()).to_string(), r"( \neg p \vee q)");
        assert_eq!(
            Node::not(Node::and(p(), q())).to_string(),
            r" \neg (p \wedge q)"
        );
        assert_eq!(
            Node::or(Node::not(p()), Node::not(q())).to_string(),
            r"( \neg p \vee  \neg q)"
        );
    }

    #[test]
    fn atoms_first_occurrence() {
        let n = Node::and(Node::or(q(), p()), Node::not(q()));
        assert_eq!(n.atoms().into_iter().collect::<Vec<_>>(), vec!['q', 'p']);
    }

    #[test]
    fn size() {
        assert_eq!(Node::and(Node::not(p()), q()).size(), 4);
    }

    #[test]
    fn normal_form_predicates() {
        let clause = Node::or(Node::not(p()), q());
        assert!(clause.is_clause());
        assert!(clause.is_cnf());
        assert!(clause.is_nnf());

        let cnf = Node::and(clause.clone(), p());
        assert!(cnf.is_cnf());
        assert!(!cnf.is_clause());

        let not_cnf = Node::or(p(), Node::and(p(), q()));
        assert!(not_cnf.is_nnf());
        assert!(!not_cnf.is_cnf());

        let not_nnf = Node::not(Node::and(p(), q()));
        assert!(!not_nnf.is_nnf());
        assert!(not_nnf.is_implication_free());

        let imp = Node::imp(p(), q());
        assert!(!imp.is_implication_free());
        assert!(!imp.is_nnf());
        assert!(!Node::not(Node::not(p())).is_nnf());
    }

    #[test]
    fn shrink_to_children() {
        let n = Node::and(p(), q());
        assert_eq!(n.shrink().collect::<Vec<_>>(), vec![p(), q()]);
    }
}
