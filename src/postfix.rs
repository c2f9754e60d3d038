use std::fmt;

use crate::error::{EvaluationError, SyntaxError};
use crate::token::{Symbol, Token};
use crate::types::{Var, VarSet};

/// A postfix (Reverse Polish) expression: operands and operators, no grouping.
///
/// `Display` gives the compact form (`AB&C!|`); the alternate form `{:#}`
/// separates tokens with spaces (`A B & C ! |`).
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parses postfix text in either compact or space-separated form.
    ///
    /// Every operand must be declared in `vars`. Parentheses are rejected.
    pub fn parse(text: &str, vars: &VarSet) -> Result<Self, SyntaxError> {
        let mut tokens = Vec::with_capacity(text.len());
        for (position, c) in text.char_indices() {
            match Symbol::classify(c) {
                Symbol::Whitespace => {}
                Symbol::Operand(name) => match vars.lookup(name) {
                    Some(var) => tokens.push(Token::Operand(var)),
                    None => {
                        return Err(SyntaxError::UnknownVariable {
                            var: Var::new(name),
                            position,
                        })
                    }
                },
                Symbol::Operator(op) => tokens.push(op.into()),
                Symbol::Open | Symbol::Close => return Err(SyntaxError::InvalidToken { symbol: c, position }),
                Symbol::Unknown(symbol) => return Err(SyntaxError::UnrecognizedSymbol { symbol, position }),
            }
        }
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Returns the distinct variables in order of first occurrence.
    pub fn variables(&self) -> Vec<Var> {
        let mut vars = Vec::new();
        for token in &self.tokens {
            if let Token::Operand(var) = *token {
                if !vars.contains(&var) {
                    vars.push(var);
                }
            }
        }
        vars
    }

    /// Checks that the expression is well-formed without evaluating it.
    ///
    /// Simulates the evaluation stack depth and reports the same structural
    /// errors that [`evaluate`][crate::eval::evaluate] would.
    pub fn check(&self) -> Result<(), EvaluationError> {
        let mut depth = 0usize;
        for (index, token) in self.tokens.iter().enumerate() {
            if depth < token.arity() {
                return Err(EvaluationError::InsufficientOperands { index });
            }
            depth = depth + 1 - token.arity();
        }
        match depth {
            0 => Err(EvaluationError::Empty),
            1 => Ok(()),
            remaining => Err(EvaluationError::ExcessOperands { remaining }),
        }
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spaced = f.alternate();
        for (i, token) in self.tokens.iter().enumerate() {
            if spaced && i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

impl FromIterator<Token> for Postfix {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<Postfix> for Vec<Token> {
    fn from(postfix: Postfix) -> Self {
        postfix.tokens
    }
}
