//! Cost certificate: bit-decomposed spent-cost register
//!
//! The register `R = Σ 2^i c_i` counts the cost spent so far; `R'` is its
//! next-state copy. For an operator cost `c` the threshold flags are defined as
//!
//! - `delta_cost_geq_c <=> R' >= R + c`
//! - `delta_cost_leq_c <=> R' <= R + (maxint - c)`
//! - `delta_cost_eq_c  <=> delta_cost_geq_c ∧ delta_cost_leq_c`
//!
//! Each reification is written over `R'` and the complement `maxint - R`, so
//! every coefficient and bound stays non-negative.

use crate::naming::{self, CostRelation};
use crate::pb::{bi_reify_conjunction, Constraint, Literal, Term};
use num_bigint::BigUint;
use num_traits::One;

/// Fixed-width unsigned register of `bits + 1` weighted flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostRegister {
    bits: u32,
}

impl CostRegister {
    /// Register with flags `c_0 ..= c_bits`
    pub fn new(bits: u32) -> Self {
        Self { bits }
    }

    /// Conservative sizing: enough headroom for the maximum cost once per variable
    pub fn for_task(variable_count: usize, max_cost: u32) -> Self {
        let variable_bits = u32::try_from(variable_count).unwrap_or(u32::MAX);
        Self::new(variable_bits.saturating_add(bit_length(max_cost.max(1))))
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of flags in the register
    pub fn width(&self) -> u32 {
        self.bits + 1
    }

    /// Largest representable value, `2^(bits+1) - 1`
    pub fn maxint(&self) -> BigUint {
        (BigUint::one() << self.width()) - BigUint::one()
    }

    /// A delta of `cost` fits, so every threshold bound stays non-negative
    pub fn can_represent(&self, cost: u32) -> bool {
        BigUint::from(cost) <= self.maxint()
    }

    fn weight(bit: u32) -> BigUint {
        BigUint::one() << bit
    }

    /// `Σ 2^i l_i` over the current (or primed) register, high bit first
    ///
    /// With `negated` set the sum reads `maxint - R`.
    fn weighted(&self, primed: bool, negated: bool) -> Vec<Term> {
        (0..self.width())
            .rev()
            .map(|bit| {
                let mut lit = Literal::pos(naming::cost_bit(bit));
                if primed {
                    lit = lit.prime();
                }
                if negated {
                    lit = lit.negate();
                }
                Term::new(Self::weight(bit), lit)
            })
            .collect()
    }

    /// `guard_coeff * guard + lhs >= bound` with the guard placed first
    fn guarded(guard: Literal, lhs: Vec<Term>, bound: BigUint) -> Constraint {
        let mut terms = Vec::with_capacity(lhs.len() + 1);
        terms.push(Term::new(bound.clone(), guard));
        terms.extend(lhs);
        Constraint::new(terms, bound)
    }

    /// `R' + (maxint - R)`, i.e. `maxint + (R' - R)`
    fn increase(&self) -> Vec<Term> {
        let mut terms = self.weighted(true, false);
        terms.extend(self.weighted(false, true));
        terms
    }

    /// `(maxint - R') + R`, i.e. `maxint - (R' - R)`
    fn decrease(&self) -> Vec<Term> {
        let mut terms = self.weighted(true, true);
        terms.extend(self.weighted(false, false));
        terms
    }

    /// The six constraints defining the threshold flags for `cost`
    ///
    /// Order: eq right/left, geq right/left, leq right/left. Callers check
    /// [`CostRegister::can_represent`] first.
    pub fn certificate(&self, cost: u32) -> Vec<Constraint> {
        let eq = Literal::pos(naming::cost_threshold(cost, CostRelation::Eq));
        let geq = Literal::pos(naming::cost_threshold(cost, CostRelation::Geq));
        let leq = Literal::pos(naming::cost_threshold(cost, CostRelation::Leq));

        let maxint = self.maxint();
        let c = BigUint::from(cost);

        let (eq_right, eq_left) = bi_reify_conjunction(&eq, &[geq.clone(), leq.clone()]);

        // geq => R' - R >= c ; ~geq => R - R' >= 1 - c
        let geq_right = Self::guarded(geq.negate(), self.increase(), &maxint + &c);
        let geq_left = Self::guarded(
            geq,
            self.decrease(),
            &maxint + BigUint::one() - &c,
        );

        // leq => R' - R <= maxint - c ; ~leq => R' - R >= maxint - c + 1
        let leq_right = Self::guarded(leq.negate(), self.decrease(), c.clone());
        let leq_left = Self::guarded(
            leq,
            self.increase(),
            BigUint::from(2u32) * &maxint + BigUint::one() - &c,
        );

        vec![eq_right, eq_left, geq_right, geq_left, leq_right, leq_left]
    }
}

/// Number of binary digits of `value` (`0` for zero)
pub fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}
