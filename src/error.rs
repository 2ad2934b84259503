use thiserror::Error;

/// The error type of the formula pipeline.
///
/// Note that a malformed input string is not an error: it is reported through [`crate::Evaluation`].
/// These errors signal that a stage was requested out of order or that a configured limit was hit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormulaError {
    /// A stage past validation was requested for a formula the grammar rejects.
    #[error("This is not a well-formed formula: {0}")]
    NotWellFormed(String),

    /// The postfix sequence does not describe exactly one tree.
    #[error("malformed postfix sequence: {0}")]
    MalformedPostfix(String),

    /// The CNF would exceed the configured number of clauses.
    #[error("CNF would contain {clauses} clauses, exceeding the limit of {limit}")]
    CnfTooLarge { clauses: usize, limit: usize },
}
