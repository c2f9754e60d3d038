//! Type-safe wrappers for circuit variables.
//!
//! A [`Var`] is a single-character variable name, and a [`VarSet`] is the
//! ordered set of variables a circuit is analyzed over. The declaration order
//! of a [`VarSet`] fixes the bit order used when enumerating assignments.
use std::fmt;

use crate::error::ConfigError;

/// A variable name: one ASCII alphanumeric character.
///
/// # Invariants
///
/// - The wrapped character is always ASCII alphanumeric
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(char);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not ASCII alphanumeric.
    pub fn new(name: char) -> Self {
        assert!(Self::is_valid_name(name), "Variable names must be ASCII alphanumeric, got {:?}", name);
        Var(name)
    }

    /// Returns `true` if `name` may be used as a variable.
    pub fn is_valid_name(name: char) -> bool {
        name.is_ascii_alphanumeric()
    }

    /// Returns the variable name.
    pub fn name(self) -> char {
        self.0
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Var> for char {
    fn from(var: Var) -> Self {
        var.0
    }
}

impl TryFrom<char> for Var {
    type Error = ConfigError;

    fn try_from(name: char) -> Result<Self, Self::Error> {
        if Var::is_valid_name(name) {
            Ok(Var(name))
        } else {
            Err(ConfigError::InvalidName(name))
        }
    }
}

/// An ordered, duplicate-free set of variables.
///
/// The first declared variable is the most significant bit of an assignment
/// index, the last declared one is the least significant bit.
///
/// # Invariants
///
/// - Non-empty
/// - No duplicates
/// - At most [`VarSet::MAX_VARS`] variables
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct VarSet {
    vars: Vec<Var>,
}

impl VarSet {
    /// Upper bound on the number of variables, keeping truth tables at most `2^16` rows.
    pub const MAX_VARS: usize = 16;

    /// Creates a variable set from the given variables, in declaration order.
    pub fn new(vars: impl IntoIterator<Item = Var>) -> Result<Self, ConfigError> {
        let mut result: Vec<Var> = Vec::new();
        for var in vars {
            if result.contains(&var) {
                return Err(ConfigError::Duplicate(var));
            }
            result.push(var);
        }
        if result.is_empty() {
            return Err(ConfigError::Empty);
        }
        if result.len() > Self::MAX_VARS {
            return Err(ConfigError::TooMany {
                count: result.len(),
                max: Self::MAX_VARS,
            });
        }
        Ok(Self { vars: result })
    }

    /// Parses a variable set from a string of names, e.g. `"ABC"`.
    ///
    /// Whitespace and commas between names are ignored.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let vars = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(Var::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(vars)
    }

    /// Returns the number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Always `false`: a variable set is never empty.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the number of distinct assignments (`2^n`).
    pub fn num_assignments(&self) -> usize {
        1usize << self.vars.len()
    }

    /// Returns the declaration position of `var`, if it is declared.
    pub fn position(&self, var: Var) -> Option<usize> {
        self.vars.iter().position(|&v| v == var)
    }

    pub fn contains(&self, var: Var) -> bool {
        self.position(var).is_some()
    }

    /// Looks up a declared variable by name.
    pub fn lookup(&self, name: char) -> Option<Var> {
        self.vars.iter().copied().find(|v| v.name() == name)
    }

    pub fn get(&self, index: usize) -> Option<Var> {
        self.vars.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Var> + '_ {
        self.vars.iter().copied()
    }

    pub fn as_slice(&self) -> &[Var] {
        &self.vars
    }
}

impl Default for VarSet {
    fn default() -> Self {
        Self {
            vars: vec![Var('A'), Var('B'), Var('C')],
        }
    }
}

impl fmt::Display for VarSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", var)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let a = Var::new('A');
        let b = Var::new('B');
        assert_eq!(a.name(), 'A');
        assert_eq!(b.to_string(), "B");
        assert!(a < b);
    }

    #[test]
    #[should_panic(expected = "Variable names must be ASCII alphanumeric")]
    fn test_var_invalid_panics() {
        Var::new('&');
    }

    #[test]
    fn test_var_try_from() {
        assert_eq!(Var::try_from('x'), Ok(Var::new('x')));
        assert_eq!(Var::try_from('('), Err(ConfigError::InvalidName('(')));
    }

    #[test]
    fn test_default_set() {
        let vars = VarSet::default();
        assert_eq!(vars.len(), 3);
        assert_eq!(vars.num_assignments(), 8);
        assert_eq!(vars.to_string(), "A B C");
        assert_eq!(vars.position(Var::new('C')), Some(2));
        assert_eq!(vars.position(Var::new('D')), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(VarSet::parse("ABC"), Ok(VarSet::default()));
        assert_eq!(VarSet::parse("A, B, C"), Ok(VarSet::default()));
        let vars = VarSet::parse("xy").unwrap();
        assert_eq!(vars.lookup('y'), Some(Var::new('y')));
        assert_eq!(vars.lookup('A'), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(VarSet::parse(""), Err(ConfigError::Empty));
        assert_eq!(VarSet::parse("ABA"), Err(ConfigError::Duplicate(Var::new('A'))));
        assert_eq!(VarSet::parse("A-B"), Err(ConfigError::InvalidName('-')));
        assert_eq!(
            VarSet::parse("abcdefghijklmnopq"),
            Err(ConfigError::TooMany { count: 17, max: 16 })
        );
    }
}
