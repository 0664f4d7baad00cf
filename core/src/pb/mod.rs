//! Pseudo-Boolean constraints and reification builders
//!
//! - **literal**: signed identifiers (`x` / `~x`)
//! - **constraint**: weighted inequalities `<coeff> <lit> ... >= <bound> ;`
//! - **reify**: implication and bi-implication builders used by the encoder

mod constraint;
mod literal;
pub mod reify;

pub use constraint::{Constraint, Term};
pub use literal::Literal;
pub use reify::{
    bi_reify_conjunction, disjunction_implies_unit, implies_disjunction,
    unit_implies_conjunction, unit_implies_disjunction,
};
