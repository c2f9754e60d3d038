use log::trace;

use crate::assignment::Assignment;
use crate::error::EvaluationError;
use crate::postfix::Postfix;
use crate::token::Token;

/// Evaluates a postfix expression under one assignment.
///
/// Tokens are executed left to right on a value stack. Operands push their
/// value, NOT replaces the top value, AND/OR pop two values and push the
/// result. The expression must leave exactly one value on the stack.
pub fn evaluate(postfix: &Postfix, assignment: &Assignment<'_>) -> Result<bool, EvaluationError> {
    let mut stack: Vec<bool> = Vec::with_capacity(postfix.len());

    for (index, token) in postfix.iter().enumerate() {
        match *token {
            Token::Operand(var) => {
                let value = assignment.get(var).ok_or(EvaluationError::UnboundVariable(var))?;
                stack.push(value);
            }
            Token::Unary(op) => {
                let value = stack.pop().ok_or(EvaluationError::InsufficientOperands { index })?;
                stack.push(op.apply(value));
            }
            Token::Binary(op) => {
                let v1 = stack.pop().ok_or(EvaluationError::InsufficientOperands { index })?;
                let v2 = stack.pop().ok_or(EvaluationError::InsufficientOperands { index })?;
                stack.push(op.apply(v1, v2));
            }
        }
    }

    let result = match stack.as_slice() {
        [] => Err(EvaluationError::Empty),
        [value] => Ok(*value),
        values => Err(EvaluationError::ExcessOperands { remaining: values.len() }),
    };
    trace!("eval {} at [{}] = {:?}", postfix, assignment, result);
    result
}

impl Postfix {
    pub fn eval(&self, assignment: &Assignment<'_>) -> Result<bool, EvaluationError> {
        evaluate(self, assignment)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    use crate::types::{Var, VarSet};

    fn eval_at(text: &str, values: &[bool]) -> Result<bool, EvaluationError> {
        let vars = VarSet::default();
        let postfix = Postfix::parse(text, &vars).unwrap();
        let assignment = Assignment::from_values(&vars, values).unwrap();
        evaluate(&postfix, &assignment)
    }

    #[test]
    fn test_eval_var() {
        assert_eq!(eval_at("A", &[true, false, false]), Ok(true));
        assert_eq!(eval_at("B", &[true, false, false]), Ok(false));
    }

    #[test]
    fn test_eval_not() {
        assert_eq!(eval_at("A!", &[true, false, false]), Ok(false));
        assert_eq!(eval_at("A!!", &[true, false, false]), Ok(true));
    }

    #[test]
    fn test_eval_and_or() {
        assert_eq!(eval_at("AB&", &[true, true, false]), Ok(true));
        assert_eq!(eval_at("AB&", &[true, false, false]), Ok(false));
        assert_eq!(eval_at("AB|", &[false, true, false]), Ok(true));
        assert_eq!(eval_at("AB|", &[false, false, true]), Ok(false));
    }

    #[test]
    fn test_eval_compound() {
        // (A & B) | !C
        assert_eq!(eval_at("AB&C!|", &[true, true, false]), Ok(true));
        assert_eq!(eval_at("AB&C!|", &[false, true, true]), Ok(false));
        assert_eq!(eval_at("AB&C!|", &[false, false, false]), Ok(true));
    }

    #[test]
    fn test_insufficient_operands() {
        assert_eq!(
            eval_at("A&", &[true, true, true]),
            Err(EvaluationError::InsufficientOperands { index: 1 })
        );
        assert_eq!(
            eval_at("!A!", &[true, true, true]),
            Err(EvaluationError::InsufficientOperands { index: 0 })
        );
        assert_eq!(
            eval_at("|", &[false, false, false]),
            Err(EvaluationError::InsufficientOperands { index: 0 })
        );
    }

    #[test]
    fn test_excess_and_empty() {
        assert_eq!(
            eval_at("ABC&", &[true, true, true]),
            Err(EvaluationError::ExcessOperands { remaining: 2 })
        );
        assert_eq!(eval_at("", &[true, true, true]), Err(EvaluationError::Empty));
    }

    #[test]
    fn test_unbound_variable() {
        let vars = VarSet::default();
        let other = VarSet::parse("AD").unwrap();
        let postfix = Postfix::parse("AD|", &other).unwrap();
        let assignment = Assignment::from_index(&vars, 0);
        assert_eq!(
            postfix.eval(&assignment),
            Err(EvaluationError::UnboundVariable(Var::new('D')))
        );
    }

    #[test]
    fn test_check_agrees_with_eval() {
        let vars = VarSet::default();
        for text in ["AB&C!|", "A&", "!A!", "AB", "", "AA!&", "AB!C&|"] {
            let postfix = Postfix::parse(text, &vars).unwrap();
            let assignment = Assignment::from_index(&vars, 5);
            assert_eq!(postfix.check(), postfix.eval(&assignment).map(|_| ()), "on {:?}", text);
        }
    }
}
