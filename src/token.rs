//! Tokens, operator precedence and character classification.
//!
//! Precedence is `NOT (3) > AND (2) > OR (1)`. Only the recognized operator
//! symbols `!`, `&` and `|` have a precedence; every other character is
//! classified separately by [`Symbol::classify`].

use std::fmt;

use crate::types::Var;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOp::Not => !value,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            UnaryOp::Not => '!',
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    And,
    Or,
}

impl BinaryOp {
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            BinaryOp::And => lhs && rhs,
            BinaryOp::Or => lhs || rhs,
        }
    }

    /// Returns the dual operator: AND becomes OR and vice versa.
    pub fn flip(self) -> Self {
        match self {
            BinaryOp::And => BinaryOp::Or,
            BinaryOp::Or => BinaryOp::And,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::And => '&',
            BinaryOp::Or => '|',
        }
    }
}

/// An operator as it sits on the converter's stack.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Operator {
    pub const NOT: Operator = Operator::Unary(UnaryOp::Not);
    pub const AND: Operator = Operator::Binary(BinaryOp::And);
    pub const OR: Operator = Operator::Binary(BinaryOp::Or);

    /// Returns the operator for a symbol, or `None` if the symbol is not an operator.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '!' => Some(Operator::NOT),
            '&' => Some(Operator::AND),
            '|' => Some(Operator::OR),
            _ => None,
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Unary(UnaryOp::Not) => 3,
            Operator::Binary(BinaryOp::And) => 2,
            Operator::Binary(BinaryOp::Or) => 1,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Unary(_))
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Unary(op) => op.symbol(),
            Operator::Binary(op) => op.symbol(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A postfix token. Arity is part of the variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Token {
    Operand(Var),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Token {
    /// Net change in evaluation stack depth after this token.
    pub fn stack_effect(self) -> isize {
        match self {
            Token::Operand(_) => 1,
            Token::Unary(_) => 0,
            Token::Binary(_) => -1,
        }
    }

    /// Number of values this token pops.
    pub fn arity(self) -> usize {
        match self {
            Token::Operand(_) => 0,
            Token::Unary(_) => 1,
            Token::Binary(_) => 2,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Token::Operand(var) => var.name(),
            Token::Unary(op) => op.symbol(),
            Token::Binary(op) => op.symbol(),
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Unary(op) => Token::Unary(op),
            Operator::Binary(op) => Token::Binary(op),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Lexical class of a single input character.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Symbol {
    Whitespace,
    Operand(char),
    Operator(Operator),
    Open,
    Close,
    Unknown(char),
}

impl Symbol {
    pub fn classify(c: char) -> Self {
        if c.is_whitespace() {
            return Symbol::Whitespace;
        }
        if Var::is_valid_name(c) {
            return Symbol::Operand(c);
        }
        match c {
            '(' => Symbol::Open,
            ')' => Symbol::Close,
            _ => match Operator::from_symbol(c) {
                Some(op) => Symbol::Operator(op),
                None => Symbol::Unknown(c),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(Operator::NOT.precedence() > Operator::AND.precedence());
        assert!(Operator::AND.precedence() > Operator::OR.precedence());
        assert_eq!(Operator::OR.precedence(), 1);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(Operator::from_symbol('!'), Some(Operator::NOT));
        assert_eq!(Operator::from_symbol('&'), Some(Operator::AND));
        assert_eq!(Operator::from_symbol('|'), Some(Operator::OR));
        assert_eq!(Operator::from_symbol('^'), None);
        assert_eq!(Operator::from_symbol('('), None);
    }

    #[test]
    fn test_classify() {
        assert_eq!(Symbol::classify(' '), Symbol::Whitespace);
        assert_eq!(Symbol::classify('\t'), Symbol::Whitespace);
        assert_eq!(Symbol::classify('A'), Symbol::Operand('A'));
        assert_eq!(Symbol::classify('7'), Symbol::Operand('7'));
        assert_eq!(Symbol::classify('('), Symbol::Open);
        assert_eq!(Symbol::classify(')'), Symbol::Close);
        assert_eq!(Symbol::classify('&'), Symbol::Operator(Operator::AND));
        assert_eq!(Symbol::classify('^'), Symbol::Unknown('^'));
    }

    #[test]
    fn test_binary_ops() {
        assert!(BinaryOp::And.apply(true, true));
        assert!(!BinaryOp::And.apply(true, false));
        assert!(BinaryOp::Or.apply(false, true));
        assert!(!BinaryOp::Or.apply(false, false));
        assert_eq!(BinaryOp::And.flip(), BinaryOp::Or);
        assert_eq!(BinaryOp::Or.flip(), BinaryOp::And);
    }

    #[test]
    fn test_token_shape() {
        let a = Token::Operand(Var::new('A'));
        assert_eq!(a.arity(), 0);
        assert_eq!(Token::from(Operator::NOT).arity(), 1);
        assert_eq!(Token::from(Operator::OR).stack_effect(), -1);
        assert_eq!(a.to_string(), "A");
        assert_eq!(Token::Binary(BinaryOp::And).to_string(), "&");
    }
}
