const DEFAULT_MAX_CLAUSES: Option<usize> = None;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// The maximum number of clauses the CNF may contain.
    /// Distribution of disjunction over conjunction can grow the formula exponentially.
    /// If set, the number of clauses is computed before the CNF is built and the conversion fails with [`crate::FormulaError::CnfTooLarge`] if it exceeds the limit.
    /// If `None`, the conversion is unbounded.
    pub max_clauses: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_clauses: DEFAULT_MAX_CLAUSES,
        }
    }
}

impl Options {
    pub fn set_max_clauses(&mut self, limit: usize) {
        self.max_clauses = Some(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded() {
        assert_eq!(Options::default().max_clauses, None);
    }

    #[test]
    fn set_max_clauses() {
        let mut opts = Options::default();
        opts.set_max_clauses(8);
        assert_eq!(opts.max_clauses, Some(8));
    }
}
