//! Infix to postfix conversion (shunting-yard).
//!
//! The converter scans the infix text once, left to right, keeping an
//! operator stack and an output token sequence:
//!
//! - operands go straight to the output;
//! - `(` is pushed, `)` pops operators to the output until the matching `(`;
//! - an incoming operator first pops every stacked operator of greater or
//!   equal precedence (up to the nearest `(`), then is pushed;
//! - at the end, the remaining operators are popped to the output.
//!
//! # Associativity of NOT
//!
//! The `>=` comparison above makes every operator left-associative,
//! including the unary NOT. That is the default ([`Associativity::Left`]).
//! One consequence is that consecutive NOTs such as `!!A` convert to `!A!`,
//! which fails to evaluate. [`Associativity::Right`] makes an incoming NOT
//! pop only operators of strictly greater precedence, so `!!A` converts to
//! `A!!`.

use log::{debug, trace};

use crate::error::SyntaxError;
use crate::postfix::Postfix;
use crate::token::{Operator, Symbol, Token};
use crate::types::{Var, VarSet};

/// Tie-break rule for operators of equal precedence.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Associativity {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Copy, Clone)]
enum StackEntry {
    Open { position: usize },
    Op(Operator),
}

/// Shunting-yard converter over a fixed variable set.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    vars: VarSet,
    not_associativity: Associativity,
}

impl Converter {
    pub fn new(vars: VarSet) -> Self {
        Self {
            vars,
            not_associativity: Associativity::Left,
        }
    }

    pub fn with_not_associativity(mut self, associativity: Associativity) -> Self {
        self.not_associativity = associativity;
        self
    }

    pub fn vars(&self) -> &VarSet {
        &self.vars
    }

    pub fn not_associativity(&self) -> Associativity {
        self.not_associativity
    }

    /// Whether `top` must be popped before pushing `incoming`.
    fn should_pop(&self, top: Operator, incoming: Operator) -> bool {
        if incoming.is_unary() && self.not_associativity == Associativity::Right {
            top.precedence() > incoming.precedence()
        } else {
            top.precedence() >= incoming.precedence()
        }
    }

    /// Converts an infix expression to postfix.
    ///
    /// Grouping errors, unrecognized symbols and undeclared variables are
    /// reported here, before any evaluation.
    pub fn convert(&self, infix: &str) -> Result<Postfix, SyntaxError> {
        let mut stack: Vec<StackEntry> = Vec::new();
        let mut output: Vec<Token> = Vec::with_capacity(infix.len());

        for (position, c) in infix.char_indices() {
            match Symbol::classify(c) {
                Symbol::Whitespace => {}
                Symbol::Operand(name) => {
                    let var = self.vars.lookup(name).ok_or(SyntaxError::UnknownVariable {
                        var: Var::new(name),
                        position,
                    })?;
                    trace!("operand {} -> output", var);
                    output.push(Token::Operand(var));
                }
                Symbol::Open => {
                    trace!("'(' at {} -> stack", position);
                    stack.push(StackEntry::Open { position });
                }
                Symbol::Close => loop {
                    match stack.pop() {
                        Some(StackEntry::Open { .. }) => break,
                        Some(StackEntry::Op(op)) => {
                            trace!("pop {} -> output (closing group)", op);
                            output.push(op.into());
                        }
                        None => return Err(SyntaxError::UnmatchedClose { position }),
                    }
                },
                Symbol::Operator(incoming) => {
                    while let Some(&StackEntry::Op(top)) = stack.last() {
                        if !self.should_pop(top, incoming) {
                            break;
                        }
                        trace!("pop {} -> output (before {})", top, incoming);
                        stack.pop();
                        output.push(top.into());
                    }
                    trace!("{} -> stack", incoming);
                    stack.push(StackEntry::Op(incoming));
                }
                Symbol::Unknown(symbol) => {
                    return Err(SyntaxError::UnrecognizedSymbol { symbol, position });
                }
            }
        }

        while let Some(entry) = stack.pop() {
            match entry {
                StackEntry::Op(op) => output.push(op.into()),
                StackEntry::Open { position } => return Err(SyntaxError::UnmatchedOpen { position }),
            }
        }

        let postfix = Postfix::new(output);
        debug!("converted {:?} to postfix {}", infix, postfix);
        Ok(postfix)
    }
}

/// Converts `infix` to postfix over `vars` with the default (left) NOT associativity.
pub fn infix_to_postfix(infix: &str, vars: &VarSet) -> Result<Postfix, SyntaxError> {
    Converter::new(vars.clone()).convert(infix)
}
