//! Naming registry for certificate identifiers
//!
//! Every identifier that appears in the certificate stream is produced here.
//! The native search component derives the same names independently from the
//! same task, so these templates are a wire contract: change them only together
//! with the native side and bump [`NAMING_SCHEME_VERSION`].

use std::fmt;
use std::str::FromStr;

use crate::encode::EncodeError;

/// Version of the identifier templates below
pub const NAMING_SCHEME_VERSION: u32 = 1;

const PRIME_PREFIX: &str = "prime^";

/// Proxy for the fact `variable = value`
pub fn value_fact(variable: usize, value: usize) -> String {
    format!("var_{}_{}", variable, value)
}

/// Next-state copy of any identifier
pub fn primed(name: &str) -> String {
    format!("{}{}", PRIME_PREFIX, name)
}

/// Flag that is true when operator `index` is the applied transition
pub fn operator_flag(index: usize) -> String {
    format!("op_{}", index)
}

/// Flag that is true when axiom `index` fires
pub fn axiom_flag(index: usize) -> String {
    format!("axiom_{}", index)
}

/// Proxy for the effect condition of the `index`-th pre/post rule of an operator
pub fn effect_condition(operator: &str, index: usize) -> String {
    format!("{}_effcond_{}", operator, index)
}

/// Flag asserting that `variable` keeps its value across a transition
pub fn frame_flag(variable: usize) -> String {
    format!("frame_var_{}", variable)
}

/// Proxy for the initial state
pub fn initial_state_flag() -> &'static str {
    "s_init"
}

/// Proxy for the goal condition
pub fn goal_flag() -> &'static str {
    "goal"
}

/// Proxy for "some operator is applied"
pub fn transition_flag() -> &'static str {
    "transition"
}

/// Bit `position` of the spent-cost register
pub fn cost_bit(position: u32) -> String {
    format!("c_{}", position)
}

/// Relation between the register delta of a transition and an operator cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CostRelation {
    Eq,
    Geq,
    Leq,
}

impl CostRelation {
    pub fn symbol(self) -> &'static str {
        match self {
            CostRelation::Eq => "=",
            CostRelation::Geq => ">=",
            CostRelation::Leq => "<=",
        }
    }

    fn tag(self) -> &'static str {
        match self {
            CostRelation::Eq => "eq",
            CostRelation::Geq => "geq",
            CostRelation::Leq => "leq",
        }
    }
}

impl fmt::Display for CostRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parses the comparator of a threshold query (`=`, `>=`, `<=`)
///
/// Entry point for callers that name a relation textually, e.g. to look up the
/// flag certifying a cost with [`cost_threshold`]. The encoder itself only
/// builds the variants directly.
impl FromStr for CostRelation {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(CostRelation::Eq),
            ">=" => Ok(CostRelation::Geq),
            "<=" => Ok(CostRelation::Leq),
            other => Err(EncodeError::UnknownComparator(other.to_string())),
        }
    }
}

/// Threshold flag `delta_cost_<rel>_<cost>`
pub fn cost_threshold(cost: u32, relation: CostRelation) -> String {
    format!("delta_cost_{}_{}", relation.tag(), cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_templates() {
        assert_eq!(value_fact(3, 1), "var_3_1");
        assert_eq!(primed(&value_fact(0, 2)), "prime^var_0_2");
        assert_eq!(operator_flag(7), "op_7");
        assert_eq!(axiom_flag(0), "axiom_0");
        assert_eq!(effect_condition(&operator_flag(2), 1), "op_2_effcond_1");
        assert_eq!(frame_flag(4), "frame_var_4");
        assert_eq!(cost_bit(5), "c_5");
        assert_eq!(cost_threshold(3, CostRelation::Eq), "delta_cost_eq_3");
        assert_eq!(cost_threshold(3, CostRelation::Geq), "delta_cost_geq_3");
        assert_eq!(cost_threshold(3, CostRelation::Leq), "delta_cost_leq_3");
    }

    #[test]
    fn test_value_fact_injective() {
        // var_1_11 vs var_11_1 is the interesting pair
        let mut seen = HashSet::new();
        for var in 0..20 {
            for value in 0..20 {
                assert!(seen.insert(value_fact(var, value)), "collision at ({}, {})", var, value);
            }
        }
        assert_ne!(value_fact(1, 11), value_fact(11, 1));
    }

    #[test]
    fn test_families_do_not_overlap() {
        let mut seen = HashSet::new();
        for i in 0..10 {
            assert!(seen.insert(operator_flag(i)));
            assert!(seen.insert(axiom_flag(i)));
            assert!(seen.insert(frame_flag(i)));
            assert!(seen.insert(cost_bit(i as u32)));
            assert!(seen.insert(effect_condition(&operator_flag(0), i)));
            for rel in [CostRelation::Eq, CostRelation::Geq, CostRelation::Leq] {
                assert!(seen.insert(cost_threshold(i as u32, rel)));
            }
        }
        assert!(seen.insert(initial_state_flag().to_string()));
        assert!(seen.insert(goal_flag().to_string()));
        assert!(seen.insert(transition_flag().to_string()));
    }

    #[test]
    fn test_relation_parsing() {
        assert_eq!("=".parse::<CostRelation>().unwrap(), CostRelation::Eq);
        assert_eq!(">=".parse::<CostRelation>().unwrap(), CostRelation::Geq);
        assert_eq!("<=".parse::<CostRelation>().unwrap(), CostRelation::Leq);

        let err = "<".parse::<CostRelation>().unwrap_err();
        assert!(matches!(err, EncodeError::UnknownComparator(ref s) if s == "<"));

        // displayed symbols parse back to the same threshold flag
        for rel in [CostRelation::Eq, CostRelation::Geq, CostRelation::Leq] {
            let parsed: CostRelation = rel.to_string().parse().unwrap();
            assert_eq!(cost_threshold(4, parsed), cost_threshold(4, rel));
        }
    }
}
