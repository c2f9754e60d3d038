use log::debug;

use crate::postfix::Postfix;
use crate::token::Token;

/// Flips the first binary operator of `postfix`: AND becomes OR, OR becomes AND.
///
/// Tokens are scanned left to right and exactly one operator is flipped.
/// An expression without binary operators is returned unchanged.
///
/// This is a heuristic nudge for degenerate circuits. The result may still be
/// unsatisfiable or a tautology, or flip from one to the other.
pub fn flip_first_junction(postfix: &Postfix) -> Postfix {
    let mut result = postfix.clone();
    for token in result.tokens_mut() {
        if let Token::Binary(op) = token {
            *op = op.flip();
            break;
        }
    }
    debug!("mutated {} to {}", postfix, result);
    result
}
