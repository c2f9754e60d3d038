//! Compare two boolean circuits given as infix expressions.
//!
//! Run with:
//! ```bash
//! cargo run --example compare -- "(A & B) | (!C)" "!(!A | !B) | !C"
//! ```

use clap::Parser;

use circuit_rs::analysis::{Analyzer, CircuitReport};
use circuit_rs::convert::Associativity;
use circuit_rs::truth_table::TruthTable;
use circuit_rs::types::VarSet;

#[derive(Debug, Parser)]
#[command(author, version, about = "Truth tables, classification and equivalence of two circuits")]
struct Cli {
    /// First circuit (infix).
    #[arg(value_name = "EXPR", default_value = "( (A & B) | (!C) ) & ( (A & B) | (!C) )")]
    first: String,

    /// Second circuit (infix).
    #[arg(value_name = "EXPR", default_value = "(A & B) | (!C)")]
    second: String,

    /// Variables, in enumeration order (first is the most significant bit).
    #[arg(long, value_name = "NAMES", default_value = "ABC")]
    vars: String,

    /// Treat consecutive NOTs as right-associative (`!!A` becomes `A!!`).
    #[arg(long)]
    right_assoc_not: bool,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn print_table(index: usize, report: &CircuitReport, table: &TruthTable) {
    println!();
    println!("Truth Table for Circuit {}: {}", index, report.postfix);
    println!("{} | Result", table.vars());
    println!("{}", "-".repeat(2 * table.vars().len() + 9));
    for (assignment, value) in table.rows() {
        let inputs: Vec<String> = assignment.values().map(|v| (v as u8).to_string()).collect();
        println!("{} | {}", inputs.join(" "), value as u8);
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let vars = VarSet::parse(&args.vars)?;
    let associativity = if args.right_assoc_not {
        Associativity::Right
    } else {
        Associativity::Left
    };
    let analyzer = Analyzer::new(vars).with_not_associativity(associativity);

    let first = analyzer.convert(&args.first)?;
    let second = analyzer.convert(&args.second)?;
    println!("Converted Circuit 1 {} to Postfix: {}", args.first, first);
    println!("Converted Circuit 2 {} to Postfix: {}", args.second, second);

    let cmp = analyzer.compare(&first, &second);
    let reports = [&cmp.first, &cmp.second];

    for (i, report) in reports.iter().enumerate() {
        match &report.outcome {
            Ok(evaluation) => print_table(i + 1, report, &evaluation.table),
            Err(e) => {
                println!();
                println!("Circuit {} ({}) cannot be evaluated: {}", i + 1, report.postfix, e);
            }
        }
    }

    println!();
    match cmp.equivalent {
        Some(true) => println!("The two circuits are equivalent."),
        Some(false) => {
            println!("The two circuits are not equivalent.");
            if let (Some(a), Some(b)) = (cmp.first.table(), cmp.second.table()) {
                if let Some(witness) = a.first_difference(b) {
                    println!("They differ at {}", witness);
                }
            }
        }
        None => println!("Equivalence is unknown: a circuit failed to evaluate."),
    }

    println!();
    for (i, report) in reports.iter().enumerate() {
        if let Some(classification) = report.classification() {
            println!("Circuit {} is: {}", i + 1, classification);
        }
    }
    for (i, report) in reports.iter().enumerate() {
        if let Some(mutated) = report.mutated() {
            println!("Modified Circuit {} to: {}", i + 1, mutated);
        }
    }

    Ok(())
}
