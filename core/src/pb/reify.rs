//! Implication and reification builders
//!
//! Coefficients and bounds are derived from operand counts only. A "right
//! reification" is `proxy => body`, a "left reification" is `body => proxy`.

use super::constraint::{Constraint, Term};
use super::literal::Literal;

/// `(a_1 ∧ ... ∧ a_n) => (c_1 ∨ ... ∨ c_m)` as the clause `Σ ~a + Σ c >= 1`
pub fn implies_disjunction(antecedent: &[Literal], consequent: &[Literal]) -> Constraint {
    Constraint::clause(
        antecedent
            .iter()
            .map(Literal::negate)
            .chain(consequent.iter().cloned()),
    )
}

/// `u => (c_1 ∧ ... ∧ c_n)` as `n ~u + Σ c >= n`
pub fn unit_implies_conjunction(antecedent: &Literal, consequent: &[Literal]) -> Constraint {
    let n = consequent.len();
    let mut terms = Vec::with_capacity(n + 1);
    terms.push(Term::new(n, antecedent.negate()));
    terms.extend(consequent.iter().cloned().map(Term::unit));
    Constraint::new(terms, n)
}

/// `u => (c_1 ∨ ... ∨ c_n)` as `~u + Σ c >= 1`
pub fn unit_implies_disjunction(antecedent: &Literal, consequent: &[Literal]) -> Constraint {
    implies_disjunction(std::slice::from_ref(antecedent), consequent)
}

/// `(a_1 ∨ ... ∨ a_n) => u` as `n u + Σ ~a >= n`
pub fn disjunction_implies_unit(antecedent: &[Literal], consequent: &Literal) -> Constraint {
    let n = antecedent.len();
    let mut terms = Vec::with_capacity(n + 1);
    terms.push(Term::new(n, consequent.clone()));
    terms.extend(antecedent.iter().map(Literal::negate).map(Term::unit));
    Constraint::new(terms, n)
}

/// `proxy <=> (c_1 ∧ ... ∧ c_n)`
///
/// Returns `(right, left)`: `proxy => ∧ c` and `∧ c => proxy`, the latter
/// written as `proxy + Σ ~c >= 1`.
pub fn bi_reify_conjunction(proxy: &Literal, conjuncts: &[Literal]) -> (Constraint, Constraint) {
    let right = unit_implies_conjunction(proxy, conjuncts);
    let left = Constraint::clause(
        std::iter::once(proxy.clone()).chain(conjuncts.iter().map(Literal::negate)),
    );
    (right, left)
}
