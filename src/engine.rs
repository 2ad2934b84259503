use std::{fmt::Display, time::Instant};

use crate::{
    error::FormulaError,
    grammar::Grammar,
    node::{
        build_tree,
        normal::{cnf_clause_count, eliminate_implications, to_cnf, to_nnf},
        Node,
    },
    options::Options,
    postfix::{to_postfix, Postfix},
    token::{tokenize, Tokens},
};

/// A formula given in the backslash notation.
///
/// The input is tokenized and validated once on construction.
/// Every stage past validation is available as a method and fails with [`FormulaError::NotWellFormed`] if the input was rejected.
#[derive(Debug, Clone)]
pub struct Formula {
    text: String,
    tokens: Tokens,
    well_formed: bool,
}

impl Formula {
    pub fn new(text: &str) -> Self {
        let t = Instant::now();
        let tokens = tokenize(text);
        let well_formed = Grammar::formulas().recognize(&tokens);
        log::debug!(
            "Validated {} tokens in {:?} (well-formed: {})",
            tokens.len(),
            t.elapsed(),
            well_formed
        );
        Self {
            text: text.to_string(),
            tokens,
            well_formed,
        }
    }

    /// The input this formula was created from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &Tokens {
        &self.tokens
    }

    pub fn is_well_formed(&self) -> bool {
        self.well_formed
    }

    /// The tokens in postfix order.
    pub fn postfix(&self) -> Result<Postfix, FormulaError> {
        if !self.well_formed {
            return Err(FormulaError::NotWellFormed(self.text.clone()));
        }
        Ok(to_postfix(&self.tokens))
    }

    pub fn parse_tree(&self) -> Result<Node, FormulaError> {
        build_tree(&self.postfix()?)
    }

    /// The parse tree with all implications eliminated.
    pub fn implication_free(&self) -> Result<Node, FormulaError> {
        Ok(eliminate_implications(self.parse_tree()?))
    }

    /// The parse tree in negation normal form.
    pub fn nnf(&self) -> Result<Node, FormulaError> {
        Ok(to_nnf(self.implication_free()?))
    }

    /// The parse tree in conjunctive normal form.
    /// The conversion is unbounded, see [`Formula::cnf_with`].
    pub fn cnf(&self) -> Result<Node, FormulaError> {
        self.cnf_with(&Options::default())
    }

    /// The parse tree in conjunctive normal form, subject to the limits set in `options`.
    pub fn cnf_with(&self, options: &Options) -> Result<Node, FormulaError> {
        let nnf = self.nnf()?;
        if let Some(limit) = options.max_clauses {
            let clauses = cnf_clause_count(&nnf);
            log::debug!("CNF will contain {} clauses (limit {})", clauses, limit);
            if clauses > limit {
                return Err(FormulaError::CnfTooLarge { clauses, limit });
            }
        }
        let t = Instant::now();
        let cnf = to_cnf(nnf);
        log::debug!("Converted to CNF in {:?} ({} nodes)", t.elapsed(), cnf.size());
        log::trace!("CNF: {}", cnf);
        Ok(cnf)
    }

    /// The conjunctive normal form rendered in the backslash notation.
    pub fn cnf_string(&self) -> Result<String, FormulaError> {
        Ok(self.cnf()?.to_string())
    }
}

/// The outcome of [`evaluate`].
/// The CNF is present iff the formula is well-formed and the conversion succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub well_formed: bool,
    pub cnf: Option<String>,
}

impl Evaluation {
    fn accepted(cnf: String) -> Self {
        Self {
            well_formed: true,
            cnf: Some(cnf),
        }
    }

    fn rejected() -> Self {
        Self {
            well_formed: false,
            cnf: None,
        }
    }
}

/// Checks whether `text` is a well-formed formula and, if so, converts it into conjunctive normal form.
pub fn evaluate(text: &str) -> Evaluation {
    let formula = Formula::new(text);
    evaluation_of(&formula, formula.cnf_string())
}

fn evaluation_of(formula: &Formula, cnf: Result<String, FormulaError>) -> Evaluation {
    match cnf {
        Ok(cnf) => Evaluation::accepted(cnf),
        Err(FormulaError::NotWellFormed(text)) => {
            log::debug!("Rejected: {}", text);
            Evaluation::rejected()
        }
        Err(err) => {
            // Validation and tree construction disagree
            log::error!("Error: {}", err);
            Evaluation {
                well_formed: formula.is_well_formed(),
                cnf: None,
            }
        }
    }
}

/// Same as [`evaluate`] but subject to the limits set in `options`.
/// A malformed formula is not an error, only exceeding a limit is.
pub fn evaluate_with(text: &str, options: &Options) -> Result<Evaluation, FormulaError> {
    let formula = Formula::new(text);
    if !formula.is_well_formed() {
        return Ok(Evaluation::rejected());
    }
    let cnf = formula.cnf_with(options)?;
    Ok(Evaluation::accepted(cnf.to_string()))
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cnf {
            Some(cnf) => write!(f, "{}", cnf),
            None => write!(f, "not well-formed"),
        }
    }
}
