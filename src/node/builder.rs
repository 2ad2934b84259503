use crate::{error::FormulaError, postfix::Postfix, token::Symbol};

use super::{Node, NodeKind};

/// Builds the parse tree of a postfix sequence.
///
/// Atoms are pushed as leaves. A connective pops as many nodes as its arity, the node popped last becomes the leftmost child.
/// Fails if a connective lacks operands, if the sequence contains parentheses, or if not exactly one tree remains.
pub fn build_tree(postfix: &Postfix) -> Result<Node, FormulaError> {
    let mut stack: Vec<Node> = Vec::with_capacity(postfix.len());
    for symbol in postfix.iter() {
        match symbol {
            Symbol::Atom(c) => stack.push(Node::atom(*c)),
            Symbol::Op(op) => {
                let arity = op.arity();
                if stack.len() < arity {
                    return Err(FormulaError::MalformedPostfix(format!(
                        "{} expects {} operands but only {} are available",
                        op,
                        arity,
                        stack.len()
                    )));
                }
                let children = stack.split_off(stack.len() - arity);
                stack.push(Node {
                    kind: NodeKind::from(*op),
                    children,
                });
            }
            Symbol::Open | Symbol::Close => {
                return Err(FormulaError::MalformedPostfix(format!(
                    "unexpected parenthesis in {}",
                    postfix
                )))
            }
        }
    }
    match (stack.pop(), stack.is_empty()) {
        (Some(root), true) => Ok(root),
        (None, _) => Err(FormulaError::MalformedPostfix(
            "empty sequence".to_string(),
        )),
        (Some(_), false) => Err(FormulaError::MalformedPostfix(format!(
            "{} operands left without connective",
            stack.len() + 1
        ))),
    }
}
