//! Well-formedness checking and conjunctive normal form conversion for propositional formulas.
//!
//! Formulas are written in a backslash notation with the connectives `\neg`, `\wedge`, `\vee`, and `\rightarrow`, explicit parentheses, and single-character atoms.
//! A formula passes through the following stages:
//! tokens, CYK validation, postfix order, parse tree, implication-free tree, negation normal form, conjunctive normal form.
//!
//! ```
//! let res = wffcnf::evaluate(r"\neg(p \wedge q)");
//! assert!(res.well_formed);
//! assert_eq!(res.cnf.as_deref(), Some(r"( \neg p \vee  \neg q)"));
//! ```

mod engine;
mod error;
pub mod grammar;
pub mod node;
mod options;
pub mod postfix;
pub mod token;

pub use engine::{evaluate, evaluate_with, Evaluation, Formula};
pub use error::FormulaError;
pub use node::{Assignment, Node, NodeKind};
pub use options::Options;
