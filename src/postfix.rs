//! Conversion of infix token sequences into postfix (Reverse-Polish) order.

use std::{fmt::Display, ops::Deref};

use itertools::Itertools;
use smallvec::SmallVec;

use crate::token::{Connective, Symbol, Tokens};

/// A token sequence in postfix order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix(Vec<Symbol>);

impl Deref for Postfix {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Symbol>> for Postfix {
    fn from(value: Vec<Symbol>) -> Self {
        Self(value)
    }
}

/// Entries of the operator stack. Parentheses are kept only until they are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    Op(Connective),
    Open,
}

/// Returns `true` if `op` binds strictly weaker than the operator on top of the stack.
/// An opening parenthesis on top of the stack never compares as stronger.
///
/// Operators of equal precedence are not popped, so chains of the same connective group to the right.
pub fn less_precedence(op: Connective, top: Pending) -> bool {
    match top {
        Pending::Open => false,
        Pending::Op(top) => op.precedence() < top.precedence(),
    }
}

/// Converts a well-formed infix token sequence into postfix order.
///
/// The tokens must have been accepted by the grammar (see [`crate::grammar::is_well_formed`]).
/// On other input the result is unspecified, but conversion never panics.
/// Use [`crate::Formula::postfix`] for a checked conversion.
pub fn to_postfix(tokens: &Tokens) -> Postfix {
    let mut stack: SmallVec<[Pending; 16]> = SmallVec::new();
    let mut output = Vec::with_capacity(tokens.len());
    for token in tokens.iter() {
        match token {
            Symbol::Op(op) => {
                while let Some(&top) = stack.last() {
                    if !less_precedence(*op, top) {
                        break;
                    }
                    stack.pop();
                    if let Pending::Op(top) = top {
                        output.push(Symbol::Op(top));
                    }
                }
                stack.push(Pending::Op(*op));
            }
            Symbol::Open => stack.push(Pending::Open),
            Symbol::Close => {
                while let Some(top) = stack.pop() {
                    match top {
                        Pending::Open => break,
                        Pending::Op(op) => output.push(Symbol::Op(op)),
                    }
                }
            }
            Symbol::Atom(_) => output.push(*token),
        }
    }
    while let Some(top) = stack.pop() {
        if let Pending::Op(op) = top {
            output.push(Symbol::Op(op));
        }
    }
    let postfix = Postfix(output);
    log::trace!("Postfix: {}", postfix);
    postfix
}

impl Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}
