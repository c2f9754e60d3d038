//! Error types for conversion, evaluation and configuration.

use std::fmt;

use crate::types::Var;

/// Error raised while turning text into a postfix expression.
///
/// Positions are byte offsets into the input string.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SyntaxError {
    /// A `)` with no matching `(`.
    UnmatchedClose { position: usize },
    /// A `(` still open at the end of the input.
    UnmatchedOpen { position: usize },
    /// A character that is neither operand, operator, grouping nor whitespace.
    UnrecognizedSymbol { symbol: char, position: usize },
    /// An operand character that is not a declared variable.
    UnknownVariable { var: Var, position: usize },
    /// A grouping marker found in postfix text.
    InvalidToken { symbol: char, position: usize },
}

impl SyntaxError {
    pub fn position(&self) -> usize {
        match *self {
            SyntaxError::UnmatchedClose { position }
            | SyntaxError::UnmatchedOpen { position }
            | SyntaxError::UnrecognizedSymbol { position, .. }
            | SyntaxError::UnknownVariable { position, .. }
            | SyntaxError::InvalidToken { position, .. } => position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::UnmatchedClose { position } => {
                write!(f, "unmatched closing parenthesis at {}", position)
            }
            SyntaxError::UnmatchedOpen { position } => {
                write!(f, "unmatched opening parenthesis at {}", position)
            }
            SyntaxError::UnrecognizedSymbol { symbol, position } => {
                write!(f, "unrecognized symbol {:?} at {}", symbol, position)
            }
            SyntaxError::UnknownVariable { var, position } => {
                write!(f, "unknown variable '{}' at {}", var, position)
            }
            SyntaxError::InvalidToken { symbol, position } => {
                write!(f, "invalid postfix token {:?} at {}", symbol, position)
            }
        }
    }
}

impl std::error::Error for SyntaxError {}

/// Error raised while evaluating a postfix expression.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EvaluationError {
    /// The operator at token `index` found too few values on the stack.
    InsufficientOperands { index: usize },
    /// More than one value was left on the stack.
    ExcessOperands { remaining: usize },
    /// The expression has no tokens.
    Empty,
    /// An operand that the assignment has no value for.
    UnboundVariable(Var),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::InsufficientOperands { index } => {
                write!(f, "insufficient operands for operator at token {}", index)
            }
            EvaluationError::ExcessOperands { remaining } => {
                write!(f, "excess operands: {} values left on the stack", remaining)
            }
            EvaluationError::Empty => write!(f, "empty expression"),
            EvaluationError::UnboundVariable(var) => write!(f, "unbound variable '{}'", var),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Error raised while building a variable set.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    Empty,
    Duplicate(Var),
    InvalidName(char),
    TooMany { count: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Empty => write!(f, "variable set is empty"),
            ConfigError::Duplicate(var) => write!(f, "duplicate variable '{}'", var),
            ConfigError::InvalidName(name) => write!(f, "invalid variable name {:?}", name),
            ConfigError::TooMany { count, max } => {
                write!(f, "too many variables: {} (at most {} supported)", count, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Crate-level error.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    Syntax(SyntaxError),
    Evaluation(EvaluationError),
    Config(ConfigError),
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Error::Syntax(e)
    }
}

impl From<EvaluationError> for Error {
    fn from(e: EvaluationError) -> Self {
        Error::Evaluation(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Syntax(e) => write!(f, "Syntax error: {}", e),
            Error::Evaluation(e) => write!(f, "Evaluation error: {}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Syntax(e) => Some(e),
            Error::Evaluation(e) => Some(e),
            Error::Config(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
