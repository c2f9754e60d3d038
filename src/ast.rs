//! Boolean expression trees.
//!
//! [`Expr`] is the recursive counterpart of a [`Postfix`] expression. It is
//! used to evaluate expressions directly, to render them back as fully
//! parenthesized infix, and to enumerate small expression spaces.

use std::fmt;

use crate::assignment::Assignment;
use crate::error::EvaluationError;
use crate::postfix::Postfix;
use crate::token::{BinaryOp, Token, UnaryOp};
use crate::types::{Var, VarSet};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Expr {
    Var(Var),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(var: Var) -> Self {
        Expr::Var(var)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn binary(op: BinaryOp, lhs: Self, rhs: Self) -> Self {
        match op {
            BinaryOp::And => Expr::and(lhs, rhs),
            BinaryOp::Or => Expr::or(lhs, rhs),
        }
    }

    /// Depth of the expression tree (0 for variables).
    pub fn depth(&self) -> usize {
        match self {
            Expr::Var(_) => 0,
            Expr::Not(e) => 1 + e.depth(),
            Expr::And(l, r) | Expr::Or(l, r) => 1 + l.depth().max(r.depth()),
        }
    }

    /// Number of nodes in the expression tree.
    pub fn size(&self) -> usize {
        match self {
            Expr::Var(_) => 1,
            Expr::Not(e) => 1 + e.size(),
            Expr::And(l, r) | Expr::Or(l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Evaluates the tree recursively.
    pub fn eval(&self, assignment: &Assignment<'_>) -> Result<bool, EvaluationError> {
        Ok(match self {
            Expr::Var(var) => assignment.get(*var).ok_or(EvaluationError::UnboundVariable(*var))?,
            Expr::Not(e) => !e.eval(assignment)?,
            Expr::And(l, r) => l.eval(assignment)? && r.eval(assignment)?,
            Expr::Or(l, r) => l.eval(assignment)? || r.eval(assignment)?,
        })
    }

    /// Flattens the tree into postfix (post-order).
    pub fn to_postfix(&self) -> Postfix {
        let mut tokens = Vec::with_capacity(self.size());
        self.push_postfix(&mut tokens);
        Postfix::new(tokens)
    }

    fn push_postfix(&self, tokens: &mut Vec<Token>) {
        match self {
            Expr::Var(var) => tokens.push(Token::Operand(*var)),
            Expr::Not(e) => {
                e.push_postfix(tokens);
                tokens.push(Token::Unary(UnaryOp::Not));
            }
            Expr::And(l, r) => {
                l.push_postfix(tokens);
                r.push_postfix(tokens);
                tokens.push(Token::Binary(BinaryOp::And));
            }
            Expr::Or(l, r) => {
                l.push_postfix(tokens);
                r.push_postfix(tokens);
                tokens.push(Token::Binary(BinaryOp::Or));
            }
        }
    }

    /// Rebuilds a tree from a well-formed postfix expression.
    ///
    /// Fails with the same errors as evaluation would on malformed input.
    pub fn from_postfix(postfix: &Postfix) -> Result<Self, EvaluationError> {
        let mut stack: Vec<Expr> = Vec::new();
        for (index, token) in postfix.iter().enumerate() {
            match *token {
                Token::Operand(var) => stack.push(Expr::Var(var)),
                Token::Unary(UnaryOp::Not) => {
                    let e = stack.pop().ok_or(EvaluationError::InsufficientOperands { index })?;
                    stack.push(Expr::not(e));
                }
                Token::Binary(op) => {
                    // Operand order is preserved: the first popped value is the right operand.
                    let rhs = stack.pop().ok_or(EvaluationError::InsufficientOperands { index })?;
                    let lhs = stack.pop().ok_or(EvaluationError::InsufficientOperands { index })?;
                    stack.push(Expr::binary(op, lhs, rhs));
                }
            }
        }
        let root = stack.pop().ok_or(EvaluationError::Empty)?;
        if !stack.is_empty() {
            return Err(EvaluationError::ExcessOperands {
                remaining: stack.len() + 1,
            });
        }
        Ok(root)
    }

    /// Enumerates every expression over `vars` of depth at most `max_depth`.
    ///
    /// The count grows doubly exponentially; keep `max_depth` small.
    pub fn enumerate(vars: &VarSet, max_depth: usize) -> Vec<Expr> {
        let mut exprs: Vec<Expr> = vars.iter().map(Expr::Var).collect();
        for _ in 0..max_depth {
            let mut next: Vec<Expr> = vars.iter().map(Expr::Var).collect();
            for e in &exprs {
                next.push(Expr::not(e.clone()));
            }
            for l in &exprs {
                for r in &exprs {
                    next.push(Expr::and(l.clone(), r.clone()));
                    next.push(Expr::or(l.clone(), r.clone()));
                }
            }
            exprs = next;
        }
        exprs
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized infix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Var(var) => write!(f, "{}", var),
            Expr::Not(e) => write!(f, "(!{})", e),
            Expr::And(l, r) => write!(f, "({} & {})", l, r),
            Expr::Or(l, r) => write!(f, "({} | {})", l, r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Expr {
        Expr::var(Var::new('A'))
    }

    fn b() -> Expr {
        Expr::var(Var::new('B'))
    }

    fn c() -> Expr {
        Expr::var(Var::new('C'))
    }

    #[test]
    fn test_display() {
        let e = Expr::or(Expr::and(a(), b()), Expr::not(c()));
        assert_eq!(e.to_string(), "((A & B) | (!C))");
        assert_eq!(e.depth(), 2);
        assert_eq!(e.size(), 6);
    }

    #[test]
    fn test_to_postfix() {
        let e = Expr::or(Expr::and(a(), b()), Expr::not(c()));
        assert_eq!(e.to_postfix().to_string(), "AB&C!|");
    }

    #[test]
    fn test_from_postfix() {
        let vars = VarSet::default();
        let postfix = Postfix::parse("AB&C!|", &vars).unwrap();
        let e = Expr::from_postfix(&postfix).unwrap();
        assert_eq!(e, Expr::or(Expr::and(a(), b()), Expr::not(c())));
        assert_eq!(e.to_postfix(), postfix);
    }

    #[test]
    fn test_from_postfix_errors() {
        let vars = VarSet::default();
        let parse = |s: &str| Postfix::parse(s, &vars).unwrap();
        assert_eq!(
            Expr::from_postfix(&parse("!A!")),
            Err(EvaluationError::InsufficientOperands { index: 0 })
        );
        assert_eq!(
            Expr::from_postfix(&parse("AB")),
            Err(EvaluationError::ExcessOperands { remaining: 2 })
        );
        assert_eq!(Expr::from_postfix(&parse("")), Err(EvaluationError::Empty));
    }

    #[test]
    fn test_eval() {
        let vars = VarSet::default();
        let e = Expr::or(Expr::and(a(), b()), Expr::not(c()));
        let t = Assignment::from_values(&vars, &[true, true, false]).unwrap();
        let f = Assignment::from_values(&vars, &[false, true, true]).unwrap();
        assert_eq!(e.eval(&t), Ok(true));
        assert_eq!(e.eval(&f), Ok(false));
    }

    #[test]
    fn test_enumerate_counts() {
        let vars = VarSet::default();
        assert_eq!(Expr::enumerate(&vars, 0).len(), 3);
        // 3 vars + 3 nots + 2 * 3 * 3 binaries
        assert_eq!(Expr::enumerate(&vars, 1).len(), 24);
        assert!(Expr::enumerate(&vars, 2).iter().all(|e| e.depth() <= 2));
    }
}
