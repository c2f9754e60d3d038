//! Truth tables and their classification.
//!
//! A truth table stores one boolean per assignment of its [`VarSet`], indexed
//! by the enumeration order of [`VarSet::assignments`]. Two tables over the
//! same variable set can therefore be compared row by row.

use std::fmt;

use crate::assignment::Assignment;
use crate::bitset::BitSet;
use crate::types::VarSet;

/// Satisfiability class of a boolean function.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Classification {
    /// False under every assignment.
    Unsatisfiable,
    /// True under every assignment.
    Tautology,
    /// True under some, but not all, assignments.
    Satisfiable,
}

impl Classification {
    /// Unsatisfiable and tautological functions are degenerate.
    pub fn is_degenerate(self) -> bool {
        !matches!(self, Classification::Satisfiable)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Unsatisfiable => "Unsatisfiable",
            Classification::Tautology => "Tautology",
            Classification::Satisfiable => "Satisfiable",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete input-to-output mapping of a boolean function.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    vars: VarSet,
    /// Indices of the rows that evaluate to `true`.
    ones: BitSet,
}

impl TruthTable {
    /// Builds a table by calling `f` on every assignment, in enumeration order.
    pub fn from_fn(vars: VarSet, mut f: impl FnMut(&Assignment<'_>) -> bool) -> Self {
        Self::try_from_fn(vars, |a| Ok::<_, std::convert::Infallible>(f(a))).unwrap_or_else(|e| match e {})
    }

    /// Builds a table by calling `f` on every assignment, stopping at the first error.
    pub fn try_from_fn<E>(
        vars: VarSet,
        mut f: impl FnMut(&Assignment<'_>) -> Result<bool, E>,
    ) -> Result<Self, E> {
        let mut ones = BitSet::new(vars.num_assignments());
        for assignment in vars.assignments() {
            if f(&assignment)? {
                ones.insert(assignment.index());
            }
        }
        Ok(Self { vars, ones })
    }

    /// Builds a table from explicit row values.
    ///
    /// Returns `None` unless `values.len() == 2^n`.
    pub fn from_values(vars: VarSet, values: &[bool]) -> Option<Self> {
        if values.len() != vars.num_assignments() {
            return None;
        }
        let mut ones = BitSet::new(values.len());
        for (i, &value) in values.iter().enumerate() {
            if value {
                ones.insert(i);
            }
        }
        Some(Self { vars, ones })
    }

    pub fn vars(&self) -> &VarSet {
        &self.vars
    }

    /// Number of rows (`2^n`).
    pub fn len(&self) -> usize {
        self.vars.num_assignments()
    }

    /// Always `false`: a table has at least two rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len(), "Row {} out of range for a table of {} rows", index, self.len());
        self.ones.contains(index)
    }

    /// Row values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.ones.contains(i))
    }

    /// `(assignment, value)` pairs in enumeration order.
    pub fn rows(&self) -> impl Iterator<Item = (Assignment<'_>, bool)> + '_ {
        self.vars.assignments().map(move |a| {
            let value = self.ones.contains(a.index());
            (a, value)
        })
    }

    /// Returns `true` if every row is false.
    pub fn is_zero(&self) -> bool {
        self.ones.is_empty()
    }

    /// Returns `true` if every row is true.
    pub fn is_one(&self) -> bool {
        self.ones.len() == self.len()
    }

    pub fn classify(&self) -> Classification {
        if self.is_zero() {
            Classification::Unsatisfiable
        } else if self.is_one() {
            Classification::Tautology
        } else {
            Classification::Satisfiable
        }
    }

    /// Number of satisfying assignments.
    pub fn count_models(&self) -> usize {
        self.ones.len()
    }

    /// The first satisfying assignment in enumeration order, if any.
    pub fn first_model(&self) -> Option<Assignment<'_>> {
        self.ones.first().map(|i| Assignment::from_index(&self.vars, i))
    }

    /// The first falsifying assignment in enumeration order, if any.
    pub fn first_counter_model(&self) -> Option<Assignment<'_>> {
        self.ones
            .first_unset(self.len())
            .map(|i| Assignment::from_index(&self.vars, i))
    }

    /// Two tables are equivalent when they range over the same variables and agree on every row.
    pub fn equivalent(&self, other: &TruthTable) -> bool {
        self == other
    }

    /// The first assignment on which the two tables disagree.
    ///
    /// Returns `None` for equivalent tables and for tables over different variable sets.
    pub fn first_difference(&self, other: &TruthTable) -> Option<Assignment<'_>> {
        if self.vars != other.vars {
            return None;
        }
        self.ones
            .first_difference(&other.ones, self.len())
            .map(|i| Assignment::from_index(&self.vars, i))
    }
}

impl fmt::Display for TruthTable {
    /// Row values as a bit string, first row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.values() {
            write!(f, "{}", value as u8)?;
        }
        Ok(())
    }
}
