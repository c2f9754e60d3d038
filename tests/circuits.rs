//! End-to-end tests: conversion, evaluation, classification and comparison.

use circuit_rs::analysis::Analyzer;
use circuit_rs::assignment::Assignment;
use circuit_rs::ast::Expr;
use circuit_rs::convert::infix_to_postfix;
use circuit_rs::error::{Error, SyntaxError};
use circuit_rs::eval::evaluate;
use circuit_rs::postfix::Postfix;
use circuit_rs::truth_table::Classification;
use circuit_rs::types::VarSet;

// ─── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn grouped_expression_converts_and_evaluates() {
    let vars = VarSet::default();
    let postfix = infix_to_postfix("(A & B) | (!C)", &vars).unwrap();
    assert_eq!(postfix.to_string(), "AB&C!|");

    let a = Assignment::from_values(&vars, &[true, true, false]).unwrap();
    assert_eq!(evaluate(&postfix, &a), Ok(true));
    let a = Assignment::from_values(&vars, &[false, true, true]).unwrap();
    assert_eq!(evaluate(&postfix, &a), Ok(false));
}

#[test]
fn doubled_circuit_is_equivalent() {
    let analyzer = Analyzer::default();
    let cmp = analyzer
        .compare_infix("((A&B)|(!C)) & ((A&B)|(!C))", "(A&B)|(!C)")
        .unwrap();
    let first = cmp.first.table().unwrap();
    let second = cmp.second.table().unwrap();
    assert_eq!(first.len(), 8);
    assert_eq!(second.len(), 8);
    assert_eq!(first.values().collect::<Vec<_>>(), second.values().collect::<Vec<_>>());
    assert_eq!(cmp.equivalent, Some(true));
}

#[test]
fn contradiction_is_unsatisfiable_and_mutates_to_tautology() {
    let analyzer = Analyzer::default();
    let postfix = analyzer.convert("A & !A").unwrap();
    assert_eq!(format!("{:#}", postfix), "A A ! &");

    let report = analyzer.analyze(&postfix);
    assert!(report.table().unwrap().values().all(|v| !v));
    assert_eq!(report.classification(), Some(Classification::Unsatisfiable));

    let mutation = report.mutation.unwrap();
    assert_eq!(format!("{:#}", mutation.postfix), "A A ! |");
    let evaluation = mutation.outcome.unwrap();
    assert!(evaluation.table.values().all(|v| v));
    assert_eq!(evaluation.classification, Classification::Tautology);
}

#[test]
fn excluded_middle_is_tautology() {
    let report = Analyzer::default().analyze_infix("A | !A").unwrap();
    assert_eq!(report.classification(), Some(Classification::Tautology));
    assert!(report.mutated().is_some());
}

#[test]
fn missing_close_paren_is_syntax_error() {
    let vars = VarSet::default();
    assert_eq!(
        infix_to_postfix("(A & B", &vars),
        Err(SyntaxError::UnmatchedOpen { position: 0 })
    );
    assert_eq!(
        Analyzer::default().compare_infix("A", "(A & B").unwrap_err(),
        Error::Syntax(SyntaxError::UnmatchedOpen { position: 0 })
    );
}

// ─── Properties ────────────────────────────────────────────────────────────────

#[test]
fn postfix_evaluation_matches_tree_evaluation() {
    let vars = VarSet::default();
    for expr in Expr::enumerate(&vars, 2) {
        let infix = expr.to_string();
        let postfix = infix_to_postfix(&infix, &vars).unwrap();
        assert_eq!(postfix, expr.to_postfix(), "on {}", infix);
        for assignment in vars.assignments() {
            assert_eq!(
                evaluate(&postfix, &assignment),
                expr.eval(&assignment),
                "on {} at {}",
                infix,
                assignment
            );
        }
    }
}

#[test]
fn conversion_is_deterministic() {
    let vars = VarSet::default();
    for infix in ["(A & B) | (!C)", "A | B & !C", "!(A | B) & (C | !A)", "!!A"] {
        assert_eq!(infix_to_postfix(infix, &vars), infix_to_postfix(infix, &vars));
    }
}

#[test]
fn every_circuit_is_equivalent_to_itself() {
    let analyzer = Analyzer::default();
    let vars = analyzer.vars().clone();
    for expr in Expr::enumerate(&vars, 1) {
        let postfix = expr.to_postfix();
        let cmp = analyzer.compare(&postfix, &postfix);
        assert_eq!(cmp.equivalent, Some(true), "on {}", expr);
    }
}

#[test]
fn postfix_text_round_trips_through_tree() {
    let vars = VarSet::default();
    let postfix = Postfix::parse("A B & C ! | A C | &", &vars).unwrap();
    let expr = Expr::from_postfix(&postfix).unwrap();
    assert_eq!(expr.to_string(), "(((A & B) | (!C)) & (A | C))");
    assert_eq!(infix_to_postfix(&expr.to_string(), &vars).unwrap(), postfix);
}

// ─── Other variable sets ───────────────────────────────────────────────────────

#[test]
fn custom_variable_set() {
    let vars = VarSet::parse("pqrs").unwrap();
    let analyzer = Analyzer::new(vars);
    let report = analyzer.analyze_infix("(p | q) & (r | !s)").unwrap();
    let table = report.table().unwrap();
    assert_eq!(table.len(), 16);
    // p|q is true on 12 rows, r|!s on 3 of every 4
    assert_eq!(table.count_models(), 9);
    assert_eq!(report.classification(), Some(Classification::Satisfiable));
}

#[test]
fn undeclared_variable_is_rejected() {
    let analyzer = Analyzer::new(VarSet::parse("AB").unwrap());
    assert!(matches!(
        analyzer.analyze_infix("A & C"),
        Err(SyntaxError::UnknownVariable { position: 4, .. })
    ));
}
