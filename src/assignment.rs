//! Variable assignments and their enumeration.
//!
//! An assignment over `n` variables is identified by an index `i` in
//! `0..2^n`, read as an `n`-bit binary number: the most significant bit is
//! the value of the first declared variable, the least significant bit the
//! value of the last one.
//!
//! For `A B C`:
//!
//! ```text
//! index  A B C
//!   0    0 0 0
//!   1    0 0 1
//!   2    0 1 0
//!   ...
//!   7    1 1 1
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::types::{Var, VarSet};

/// A mapping from each variable of a [`VarSet`] to a boolean value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Assignment<'a> {
    vars: &'a VarSet,
    index: usize,
}

impl<'a> Assignment<'a> {
    /// Returns the assignment with the given enumeration index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 2^n`.
    pub fn from_index(vars: &'a VarSet, index: usize) -> Self {
        assert!(
            index < vars.num_assignments(),
            "Assignment index {} out of range for {} variables",
            index,
            vars.len()
        );
        Self { vars, index }
    }

    /// Builds an assignment from one value per variable, in declaration order.
    ///
    /// Returns `None` if the number of values does not match the number of variables.
    pub fn from_values(vars: &'a VarSet, values: &[bool]) -> Option<Self> {
        if values.len() != vars.len() {
            return None;
        }
        let index = values.iter().fold(0usize, |acc, &b| (acc << 1) | b as usize);
        Some(Self { vars, index })
    }

    pub fn vars(&self) -> &'a VarSet {
        self.vars
    }

    /// Position of this assignment in the enumeration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of the variable declared at `position`.
    pub fn value_at(&self, position: usize) -> bool {
        let shift = self.vars.len() - 1 - position;
        (self.index >> shift) & 1 == 1
    }

    /// Value of `var`, or `None` if `var` is not declared.
    pub fn get(&self, var: Var) -> Option<bool> {
        self.vars.position(var).map(|pos| self.value_at(pos))
    }

    /// Values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.vars.len()).map(move |pos| self.value_at(pos))
    }

    /// `(variable, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Var, bool)> + '_ {
        self.vars.iter().enumerate().map(move |(pos, var)| (var, self.value_at(pos)))
    }
}

impl fmt::Display for Assignment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (var, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", var, value as u8)?;
        }
        Ok(())
    }
}

/// Lazy iterator over all `2^n` assignments in enumeration order.
///
/// [`VarSet::assignments`] always starts a fresh pass, so both circuits of a
/// comparison see the same order.
#[derive(Debug, Clone)]
pub struct Assignments<'a> {
    vars: &'a VarSet,
    next: usize,
    end: usize,
}

impl VarSet {
    /// Enumerates every assignment of this variable set, in a fixed order.
    pub fn assignments(&self) -> Assignments<'_> {
        Assignments {
            vars: self,
            next: 0,
            end: self.num_assignments(),
        }
    }
}

impl<'a> Iterator for Assignments<'a> {
    type Item = Assignment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let assignment = Assignment {
            vars: self.vars,
            index: self.next,
        };
        self.next += 1;
        Some(assignment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Assignments<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(Assignment {
            vars: self.vars,
            index: self.end,
        })
    }
}

impl ExactSizeIterator for Assignments<'_> {}

impl FusedIterator for Assignments<'_> {}
