//! Normal form transformations: implication elimination, negation normal form (NNF), and conjunctive normal form (CNF).
//!
//! All transformations consume a tree and return a new, equivalent tree.

use super::{Node, NodeKind};

/// Rewrites every implication `a → b` into `¬a ∨ b`.
pub fn eliminate_implications(node: Node) -> Node {
    let (kind, children) = node.into_parts();
    let mut children = children.into_iter().map(eliminate_implications);
    match kind {
        NodeKind::Atom(c) => Node::atom(c),
        NodeKind::Not => match children.next() {
            Some(child) => Node::not(child),
            None => unreachable!("negation without operand"),
        },
        NodeKind::And | NodeKind::Or | NodeKind::Imp => match (children.next(), children.next()) {
            (Some(lhs), Some(rhs)) => match kind {
                // Implication: a -> b is transformed into ¬a ∨ b
                NodeKind::Imp => Node::or(Node::not(lhs), rhs),
                NodeKind::And => Node::and(lhs, rhs),
                _ => Node::or(lhs, rhs),
            },
            _ => unreachable!("binary connective without two operands"),
        },
    }
}

/// Converts a tree to *Negation Normal Form* (NNF).
/// A tree is in NNF if it is implication free and negations only occur in front of atoms.
///
/// Double negations are removed, negations are pushed through conjunctions and disjunctions using De Morgan's laws.
/// Implications are eliminated first if present.
pub fn to_nnf(node: Node) -> Node {
    if node.is_implication_free() {
        push_negations(node)
    } else {
        push_negations(eliminate_implications(node))
    }
}

fn push_negations(node: Node) -> Node {
    let (kind, children) = node.into_parts();
    match kind {
        NodeKind::Atom(c) => Node::atom(c),
        NodeKind::And | NodeKind::Or => {
            let [lhs, rhs] = binary_operands(children);
            match kind {
                NodeKind::And => Node::and(push_negations(lhs), push_negations(rhs)),
                _ => Node::or(push_negations(lhs), push_negations(rhs)),
            }
        }
        NodeKind::Not => {
            let [child] = unary_operand(children);
            let child_kind = *child.kind();
            match child_kind {
                // Literal, keep it as is
                NodeKind::Atom(_) => Node::not(child),
                // Double negation: ¬¬a is equivalent to a
                NodeKind::Not => {
                    let [inner] = unary_operand(child.into_parts().1);
                    push_negations(inner)
                }
                // De Morgan: ¬(a ∧ b) is equivalent to ¬a ∨ ¬b, ¬(a ∨ b) to ¬a ∧ ¬b
                NodeKind::And | NodeKind::Or => {
                    let (inner_kind, inner) = child.into_parts();
                    let [lhs, rhs] = binary_operands(inner);
                    let lhs = push_negations(Node::not(lhs));
                    let rhs = push_negations(Node::not(rhs));
                    match inner_kind {
                        NodeKind::And => Node::or(lhs, rhs),
                        _ => Node::and(lhs, rhs),
                    }
                }
                NodeKind::Imp => unreachable!("implications are eliminated before"),
            }
        }
        NodeKind::Imp => unreachable!("implications are eliminated before"),
    }
}

/// Converts a tree in NNF to *Conjunctive Normal Form* (CNF).
/// Trees that are not in NNF are converted to NNF first.
///
/// Conjunctions are converted structurally, disjunctions are distributed over conjunctions using [`distribute`].
/// The result is a conjunction of clauses.
///
/// The size of the result can be exponential in the size of the input.
/// For example, `(a₁ ∧ b₁) ∨ ... ∨ (aₙ ∧ bₙ)` yields `2ⁿ` clauses.
/// Use [`cnf_clause_count`] to compute the number of clauses in advance.
pub fn to_cnf(node: Node) -> Node {
    if !node.is_nnf() {
        return to_cnf(to_nnf(node));
    }
    cnf_of_nnf(node)
}

fn cnf_of_nnf(node: Node) -> Node {
    let (kind, children) = node.into_parts();
    match kind {
        NodeKind::And => {
            let [lhs, rhs] = binary_operands(children);
            Node::and(cnf_of_nnf(lhs), cnf_of_nnf(rhs))
        }
        NodeKind::Or => {
            let [lhs, rhs] = binary_operands(children);
            distribute(cnf_of_nnf(lhs), cnf_of_nnf(rhs))
        }
        kind => Node { kind, children },
    }
}

/// Distributes the disjunction of two trees in CNF over their conjunctions.
///
/// If `lhs` is `x ∧ y`, the result is `distribute(x, rhs) ∧ distribute(y, rhs)`, symmetrically if `rhs` is a conjunction.
/// Otherwise the result is `lhs ∨ rhs`.
pub fn distribute(lhs: Node, rhs: Node) -> Node {
    if *lhs.kind() == NodeKind::And {
        let [x, y] = binary_operands(lhs.into_parts().1);
        Node::and(distribute(x, rhs.clone()), distribute(y, rhs))
    } else if *rhs.kind() == NodeKind::And {
        let [x, y] = binary_operands(rhs.into_parts().1);
        Node::and(distribute(lhs.clone(), x), distribute(lhs, y))
    } else {
        Node::or(lhs, rhs)
    }
}

/// Returns the number of clauses [`to_cnf`] produces for the given tree in NNF.
/// Saturates at [`usize::MAX`].
///
/// A literal is one clause, the clauses of a conjunction add up, the clauses of a disjunction multiply.
/// Trees that are not in NNF are counted after conversion to NNF.
pub fn cnf_clause_count(node: &Node) -> usize {
    match node.kind() {
        NodeKind::And => cnf_clause_count(&node.children()[0])
            .saturating_add(cnf_clause_count(&node.children()[1])),
        NodeKind::Or => cnf_clause_count(&node.children()[0])
            .saturating_mul(cnf_clause_count(&node.children()[1])),
        NodeKind::Atom(_) => 1,
        NodeKind::Not if node.is_literal() => 1,
        NodeKind::Not | NodeKind::Imp => cnf_clause_count(&to_nnf(node.clone())),
    }
}

fn unary_operand(children: Vec<Node>) -> [Node; 1] {
    match <[Node; 1]>::try_from(children) {
        Ok(ops) => ops,
        Err(children) => unreachable!("expected one operand, got {}", children.len()),
    }
}

fn binary_operands(children: Vec<Node>) -> [Node; 2] {
    match <[Node; 2]>::try_from(children) {
        Ok(ops) => ops,
        Err(children) => unreachable!("expected two operands, got {}", children.len()),
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    fn p() -> Node {
        Node::atom('p')
    }

    fn q() -> Node {
        Node::atom('q')
    }

    fn r() -> Node {
        Node::atom('r')
    }

    #[test]
    fn eliminate_implication() {
        let res = eliminate_implications(Node::imp(p(), q()));
        assert_eq!(res, Node::or(Node::not(p()), q()));
    }

    #[test]
    fn eliminate_nested_implications() {
        // (p -> q) -> r becomes ¬(¬p ∨ q) ∨ r
        let res = eliminate_implications(Node::imp(Node::imp(p(), q()), r()));
        assert_eq!(
            res,
            Node::or(Node::not(Node::or(Node::not(p()), q())), r())
        );
    }

    #[test]
    fn eliminate_keeps_other_connectives() {
        let n = Node::and(Node::not(p()), Node::or(q(), r()));
        assert_eq!(eliminate_implications(n.clone()), n);
    }

    #[test]
    fn nnf_atom() {
        assert_eq!(to_nnf(p()), p());
        assert_eq!(to_nnf(Node::not(p())), Node::not(p()));
    }

    #[test]
    fn nnf_double_negation() {
        assert_eq!(to_nnf(Node::not(Node::not(p()))), p());
        assert_eq!(to_nnf(Node::not(Node::not(Node::not(p())))), Node::not(p()));
    }

    #[test]
    fn nnf_negation_of_and() {
        let res = to_nnf(Node::not(Node::and(p(), q())));
        assert_eq!(res, Node::or(Node::not(p()), Node::not(q())));
    }

    #[test]
    fn nnf_negation_of_or() {
        let res = to_nnf(Node::not(Node::or(p(), q())));
        assert_eq!(res, Node::and(Node::not(p()), Node::not(q())));
    }

    #[test]
    fn nnf_nested_de_morgan() {
        // ¬(p ∧ ¬(q ∨ ¬r)) becomes ¬p ∨ (q ∨ ¬r)
        let n = Node::not(Node::and(p(), Node::not(Node::or(q(), Node::not(r())))));
        assert_eq!(
            to_nnf(n),
            Node::or(Node::not(p()), Node::or(q(), Node::not(r())))
        );
    }

    #[test]
    fn nnf_eliminates_implications() {
        let res = to_nnf(Node::not(Node::imp(p(), q())));
        assert_eq!(res, Node::and(p(), Node::not(q())));
    }

    #[test]
    fn cnf_keeps_clauses() {
        let n = Node::and(Node::or(p(), q()), Node::not(r()));
        assert_eq!(to_cnf(n.clone()), n);
    }

    #[test]
    fn cnf_distributes_right() {
        // p ∨ (q ∧ r) becomes (p ∨ q) ∧ (p ∨ r)
        let res = to_cnf(Node::or(p(), Node::and(q(), r())));
        assert_eq!(res, Node::and(Node::or(p(), q()), Node::or(p(), r())));
    }

    #[test]
    fn cnf_distributes_left() {
        // (p ∧ q) ∨ r becomes (p ∨ r) ∧ (q ∨ r)
        let res = to_cnf(Node::or(Node::and(p(), q()), r()));
        assert_eq!(res, Node::and(Node::or(p(), r()), Node::or(q(), r())));
    }

    #[test]
    fn cnf_distributes_both() {
        let s = Node::atom('s');
        let res = to_cnf(Node::or(Node::and(p(), q()), Node::and(r(), s.clone())));
        assert_eq!(
            res,
            Node::and(
                Node::and(Node::or(p(), r()), Node::or(p(), s.clone())),
                Node::and(Node::or(q(), r()), Node::or(q(), s))
            )
        );
    }

    #[test]
    fn clause_count() {
        assert_eq!(cnf_clause_count(&p()), 1);
        assert_eq!(cnf_clause_count(&Node::or(p(), q())), 1);
        assert_eq!(cnf_clause_count(&Node::and(p(), q())), 2);
        assert_eq!(cnf_clause_count(&Node::or(p(), Node::and(q(), r()))), 2);
        // ¬(p ∨ q) is ¬p ∧ ¬q
        assert_eq!(cnf_clause_count(&Node::not(Node::or(p(), q()))), 2);
    }

    #[test]
    fn clause_count_grows_exponentially() {
        let pair = |a, b| Node::and(Node::atom(a), Node::atom(b));
        let mut n = pair('a', 'b');
        for (a, b) in [('c', 'd'), ('e', 'f'), ('g', 'h'), ('i', 'j')] {
            n = Node::or(n, pair(a, b));
        }
        assert_eq!(cnf_clause_count(&n), 32);
    }

    #[quickcheck]
    fn implication_free_is_equivalent(n: Node) -> bool {
        let res = eliminate_implications(n.clone());
        res.is_implication_free() && res.is_equivalent(&n)
    }

    #[quickcheck]
    fn nnf_is_equivalent(n: Node) -> bool {
        let res = to_nnf(n.clone());
        res.is_nnf() && res.is_equivalent(&n)
    }

    #[quickcheck]
    fn cnf_is_equivalent(n: Node) -> bool {
        let res = to_cnf(n.clone());
        res.is_cnf() && res.is_equivalent(&n)
    }

    #[quickcheck]
    fn clause_count_is_exact(n: Node) -> bool {
        let count = cnf_clause_count(&n);
        let cnf = to_cnf(n);
        let mut clauses = 0;
        let mut stack = vec![&cnf];
        while let Some(c) = stack.pop() {
            if *c.kind() == NodeKind::And {
                stack.extend(c.children());
            } else {
                clauses += 1;
            }
        }
        clauses == count
    }

    #[quickcheck]
    fn cnf_of_cnf_is_equivalent(n: Node) -> bool {
        let once = to_cnf(n);
        let twice = to_cnf(once.clone());
        twice.is_cnf() && twice.is_equivalent(&once)
    }
}
