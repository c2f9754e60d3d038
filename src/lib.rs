//! # circuit-rs: boolean circuit compiler and evaluator
//!
//! **`circuit-rs`** turns infix boolean expressions over a small set of
//! single-letter variables into postfix (Reverse Polish) form, evaluates them
//! under every variable assignment, classifies the resulting boolean function,
//! and compares two functions for equivalence.
//!
//! ## Pipeline
//!
//! 1. **Convert**: the shunting-yard [`Converter`][crate::convert::Converter]
//!    turns `(A & B) | (!C)` into the postfix `AB&C!|`. Operators are `!`
//!    (NOT), `&` (AND) and `|` (OR), in decreasing precedence.
//! 2. **Evaluate**: [`evaluate`][crate::eval::evaluate] runs a postfix
//!    expression on a value stack for one [`Assignment`][crate::assignment::Assignment].
//! 3. **Enumerate**: [`VarSet::assignments`][crate::types::VarSet::assignments]
//!    lists all `2^n` assignments, first variable as the most significant bit.
//! 4. **Analyze**: the [`Analyzer`][crate::analysis::Analyzer] builds a
//!    [`TruthTable`][crate::truth_table::TruthTable], classifies it as
//!    unsatisfiable, tautology or satisfiable, and proposes a one-operator
//!    [mutation][crate::mutate::flip_first_junction] for degenerate circuits.
//!
//! ## Basic Usage
//!
//! ```rust
//! use circuit_rs::analysis::Analyzer;
//! use circuit_rs::truth_table::Classification;
//!
//! let analyzer = Analyzer::default(); // variables A, B, C
//!
//! let cmp = analyzer
//!     .compare_infix("((A & B) | (!C)) & ((A & B) | (!C))", "(A & B) | (!C)")
//!     .unwrap();
//! assert_eq!(cmp.second.postfix.to_string(), "AB&C!|");
//! assert_eq!(cmp.equivalent, Some(true));
//!
//! let report = analyzer.analyze_infix("A & !A").unwrap();
//! assert_eq!(report.classification(), Some(Classification::Unsatisfiable));
//! assert_eq!(report.mutated().unwrap().to_string(), "AA!|");
//! ```
//!
//! ## Errors
//!
//! Malformed grouping, unrecognized symbols and undeclared variables are
//! [`SyntaxError`][crate::error::SyntaxError]s, reported at conversion time.
//! Operators without enough operands are
//! [`EvaluationError`][crate::error::EvaluationError]s, reported per circuit.

pub mod analysis;
pub mod assignment;
pub mod ast;
pub mod bitset;
pub mod convert;
pub mod error;
pub mod eval;
pub mod mutate;
pub mod postfix;
pub mod token;
pub mod truth_table;
pub mod types;
