//! Circuit analysis: truth tables, classification, mutation and equivalence.
//!
//! An [`Analyzer`] owns the configuration shared by every circuit it looks
//! at (the variable set and the NOT associativity rule). Each circuit goes
//! through the same pipeline:
//!
//! ```text
//! infix --convert--> postfix --evaluate x 2^n--> truth table --> classification
//!                                                              \-> mutation (if degenerate)
//! ```
//!
//! Analyses are independent: an evaluation error in one circuit is recorded
//! in its [`CircuitReport`] and does not stop the other circuit of a
//! [`Comparison`].

use log::{debug, warn};

use crate::convert::{Associativity, Converter};
use crate::error::{Error, EvaluationError, SyntaxError};
use crate::mutate::flip_first_junction;
use crate::postfix::Postfix;
use crate::truth_table::{Classification, TruthTable};
use crate::types::VarSet;

/// A truth table together with its classification.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Evaluation {
    pub table: TruthTable,
    pub classification: Classification,
}

impl Evaluation {
    pub fn new(table: TruthTable) -> Self {
        let classification = table.classify();
        Self { table, classification }
    }
}

/// The modified circuit proposed for a degenerate one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Mutation {
    pub postfix: Postfix,
    pub outcome: Result<Evaluation, EvaluationError>,
}

/// Everything computed for one circuit.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CircuitReport {
    pub postfix: Postfix,
    pub outcome: Result<Evaluation, EvaluationError>,
    /// Present only when the circuit is unsatisfiable or a tautology.
    pub mutation: Option<Mutation>,
}

impl CircuitReport {
    pub fn table(&self) -> Option<&TruthTable> {
        self.outcome.as_ref().ok().map(|e| &e.table)
    }

    pub fn classification(&self) -> Option<Classification> {
        self.outcome.as_ref().ok().map(|e| e.classification)
    }

    pub fn error(&self) -> Option<&EvaluationError> {
        self.outcome.as_ref().err()
    }

    pub fn mutated(&self) -> Option<&Postfix> {
        self.mutation.as_ref().map(|m| &m.postfix)
    }
}

/// Result of analyzing two circuits side by side.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Comparison {
    pub first: CircuitReport,
    pub second: CircuitReport,
    /// `None` when either circuit failed to evaluate.
    pub equivalent: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    converter: Converter,
}

impl Analyzer {
    pub fn new(vars: VarSet) -> Self {
        Self {
            converter: Converter::new(vars),
        }
    }

    pub fn with_not_associativity(mut self, associativity: Associativity) -> Self {
        self.converter = self.converter.with_not_associativity(associativity);
        self
    }

    pub fn vars(&self) -> &VarSet {
        self.converter.vars()
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn convert(&self, infix: &str) -> Result<Postfix, SyntaxError> {
        self.converter.convert(infix)
    }

    /// Evaluates `postfix` under every assignment, in enumeration order.
    ///
    /// Stops at the first failing assignment: evaluation errors are structural
    /// and would repeat on every row.
    pub fn truth_table(&self, postfix: &Postfix) -> Result<TruthTable, EvaluationError> {
        TruthTable::try_from_fn(self.vars().clone(), |assignment| postfix.eval(assignment))
    }

    pub fn evaluate(&self, postfix: &Postfix) -> Result<Evaluation, EvaluationError> {
        self.truth_table(postfix).map(Evaluation::new)
    }

    /// Analyzes one circuit given in postfix form.
    pub fn analyze(&self, postfix: &Postfix) -> CircuitReport {
        let outcome = self.evaluate(postfix);
        let mutation = match &outcome {
            Ok(evaluation) if evaluation.classification.is_degenerate() => {
                let mutated = flip_first_junction(postfix);
                let mutated_outcome = self.evaluate(&mutated);
                Some(Mutation {
                    postfix: mutated,
                    outcome: mutated_outcome,
                })
            }
            _ => None,
        };

        match &outcome {
            Ok(evaluation) => debug!(
                "circuit {} is {} ({} of {} rows true)",
                postfix,
                evaluation.classification,
                evaluation.table.count_models(),
                evaluation.table.len()
            ),
            Err(e) => warn!("circuit {} failed to evaluate: {}", postfix, e),
        }

        CircuitReport {
            postfix: postfix.clone(),
            outcome,
            mutation,
        }
    }

    /// Converts and analyzes one circuit given in infix form.
    pub fn analyze_infix(&self, infix: &str) -> Result<CircuitReport, SyntaxError> {
        let postfix = self.convert(infix)?;
        Ok(self.analyze(&postfix))
    }

    /// Analyzes two circuits and checks them for equivalence.
    pub fn compare(&self, first: &Postfix, second: &Postfix) -> Comparison {
        let first = self.analyze(first);
        let second = self.analyze(second);
        let equivalent = match (first.table(), second.table()) {
            (Some(a), Some(b)) => Some(a.equivalent(b)),
            _ => None,
        };
        debug!("{} vs {}: equivalent = {:?}", first.postfix, second.postfix, equivalent);
        Comparison {
            first,
            second,
            equivalent,
        }
    }

    /// Converts both circuits, then compares them.
    ///
    /// Syntax errors are reported before anything is evaluated.
    pub fn compare_infix(&self, first: &str, second: &str) -> Result<Comparison, Error> {
        let first = self.convert(first)?;
        let second = self.convert(second)?;
        Ok(self.compare(&first, &second))
    }
}
