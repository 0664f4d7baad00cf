//! Structural invariants of a task
//!
//! One check per entity. A failing check means the producer of the task is
//! broken; there is nothing to repair here.
//!
//! Derived variables must be binary. There is no general rule on which value
//! is the initial (fallback) value of a derived variable, so nothing below
//! relies on it being 0 or 1.

use super::facts::Fact;
use super::task::{Axiom, Goal, InitialState, MutexGroup, Operator, Task};
use super::variables::VariableSet;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Violated structural invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("variable tables disagree: {ranges} ranges, {layers} layers, {names} value name lists")]
    MismatchedVariableTables {
        ranges: usize,
        layers: usize,
        names: usize,
    },

    #[error("variable {var}: range {range} but {names} value names")]
    ValueNameCount { var: usize, range: usize, names: usize },

    #[error("variable {var}: range {range} is below 2")]
    RangeTooSmall { var: usize, range: usize },

    #[error("derived variable {var} must be binary, has range {range}")]
    DerivedNotBinary { var: usize, range: usize },

    #[error("fact {fact} is out of range")]
    InvalidFact { fact: Fact },

    #[error("condition not sorted by variable or mentions a variable twice at {fact}")]
    UnsortedCondition { fact: Fact },

    #[error("mutex group {group} is not sorted and unique")]
    MutexNotCanonical { group: usize },

    #[error("initial state has {found} values, expected {expected}")]
    InitLength { expected: usize, found: usize },

    #[error("goal is empty")]
    EmptyGoal,

    #[error("operator '{operator}': pre/post list is not canonical")]
    PrePostNotCanonical { operator: String },

    #[error("operator '{operator}': variable {var} has both a prevail condition and an effect")]
    PrevailAndEffect { operator: String, var: usize },

    #[error("operator '{operator}': effect on derived variable {var}")]
    EffectOnDerived { operator: String, var: usize },

    #[error("operator '{operator}': conflicting preconditions on variable {var}")]
    ConflictingPre { operator: String, var: usize },

    #[error("operator '{operator}': effect condition mentions constrained variable {var}")]
    EffectConditionOnConstrained { operator: String, var: usize },

    #[error("operator '{operator}' has no effects")]
    NoEffects { operator: String },

    #[error("axiom {axiom}: effect {fact} is not on a derived variable")]
    AxiomEffectNotDerived { axiom: usize, fact: Fact },

    #[error("axiom {axiom}: effect value {value} is not binary")]
    AxiomEffectNotBinary { axiom: usize, value: usize },

    #[error("axiom {axiom}: condition variable {var} in layer {cond_layer} above effect layer {eff_layer}")]
    AxiomLayerOrder {
        axiom: usize,
        var: usize,
        cond_layer: u32,
        eff_layer: u32,
    },

    #[error("axiom {axiom}: same-layer condition {fact} uses the wrong value relative to the initial state")]
    AxiomSameLayerValue { axiom: usize, fact: Fact },
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;

impl VariableSet {
    /// Parallel tables agree, ranges ≥ 2, derived variables are binary
    pub fn validate(&self) -> ValidationResult<()> {
        if self.ranges.len() != self.axiom_layers.len()
            || self.ranges.len() != self.value_names.len()
        {
            return Err(ValidationError::MismatchedVariableTables {
                ranges: self.ranges.len(),
                layers: self.axiom_layers.len(),
                names: self.value_names.len(),
            });
        }
        for (var, (&range, names)) in self.ranges.iter().zip(&self.value_names).enumerate() {
            if range != names.len() {
                return Err(ValidationError::ValueNameCount {
                    var,
                    range,
                    names: names.len(),
                });
            }
            if range < 2 {
                return Err(ValidationError::RangeTooSmall { var, range });
            }
            if self.is_derived(var) && range != 2 {
                return Err(ValidationError::DerivedNotBinary { var, range });
            }
        }
        Ok(())
    }

    /// `fact` names an existing variable and a value in its domain
    pub fn validate_fact(&self, fact: Fact) -> ValidationResult<()> {
        match self.range(fact.var) {
            Some(range) if fact.value < range => Ok(()),
            _ => Err(ValidationError::InvalidFact { fact }),
        }
    }

    /// Valid facts, strictly increasing in variable
    pub fn validate_condition(&self, condition: &[Fact]) -> ValidationResult<()> {
        let mut last_var: Option<usize> = None;
        for &fact in condition {
            self.validate_fact(fact)?;
            if last_var.is_some_and(|last| fact.var <= last) {
                return Err(ValidationError::UnsortedCondition { fact });
            }
            last_var = Some(fact.var);
        }
        Ok(())
    }
}

impl MutexGroup {
    pub fn validate(&self, group: usize, variables: &VariableSet) -> ValidationResult<()> {
        for &fact in &self.facts {
            variables.validate_fact(fact)?;
        }
        if self.facts.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ValidationError::MutexNotCanonical { group });
        }
        Ok(())
    }
}

impl InitialState {
    pub fn validate(&self, variables: &VariableSet) -> ValidationResult<()> {
        if self.values.len() != variables.len() {
            return Err(ValidationError::InitLength {
                expected: variables.len(),
                found: self.values.len(),
            });
        }
        for fact in self.facts() {
            variables.validate_fact(fact)?;
        }
        Ok(())
    }
}

impl Goal {
    pub fn validate(&self, variables: &VariableSet) -> ValidationResult<()> {
        if self.pairs.is_empty() {
            return Err(ValidationError::EmptyGoal);
        }
        variables.validate_condition(&self.pairs)
    }
}

impl Operator {
    /// Operator invariants
    ///
    /// 1. prevail is a valid condition
    /// 2. pre_post is sorted and free of duplicates
    /// 3. effect conditions are valid and avoid prevail variables and
    ///    variables with a concrete precondition
    /// 4. no variable has both a prevail condition and an effect
    /// 5. preconditions and effects are valid facts
    /// 6. effect variables are primary
    /// 7. all rules on one variable share the precondition
    /// 8. at least one effect
    ///
    /// An effect equal to its precondition or to a fact of its own effect
    /// condition is allowed. So are conflicting conditional effects on one
    /// variable; their semantics are left to the consumer.
    pub fn validate(&self, variables: &VariableSet) -> ValidationResult<()> {
        let operator = || self.name.clone();

        variables.validate_condition(&self.prevail)?;
        if self.pre_post != Self::canonical_pre_post(self.pre_post.clone()) {
            return Err(ValidationError::PrePostNotCanonical { operator: operator() });
        }

        let prevail_vars: FxHashSet<usize> = self.prevail.iter().map(|f| f.var).collect();
        let mut pre_values: FxHashMap<usize, Option<usize>> = FxHashMap::default();
        for rule in &self.pre_post {
            variables.validate_condition(&rule.condition)?;
            if prevail_vars.contains(&rule.var) {
                return Err(ValidationError::PrevailAndEffect {
                    operator: operator(),
                    var: rule.var,
                });
            }
            if let Some(pre) = rule.pre {
                variables.validate_fact(Fact::new(rule.var, pre))?;
            }
            variables.validate_fact(Fact::new(rule.var, rule.post))?;
            if variables.is_derived(rule.var) {
                return Err(ValidationError::EffectOnDerived {
                    operator: operator(),
                    var: rule.var,
                });
            }
            match pre_values.get(&rule.var) {
                Some(&known) if known != rule.pre => {
                    return Err(ValidationError::ConflictingPre {
                        operator: operator(),
                        var: rule.var,
                    });
                }
                Some(_) => {}
                None => {
                    pre_values.insert(rule.var, rule.pre);
                }
            }
        }

        for rule in &self.pre_post {
            for cond in &rule.condition {
                let has_pre = matches!(pre_values.get(&cond.var), Some(Some(_)));
                if has_pre || prevail_vars.contains(&cond.var) {
                    return Err(ValidationError::EffectConditionOnConstrained {
                        operator: operator(),
                        var: cond.var,
                    });
                }
            }
        }

        if self.pre_post.is_empty() {
            return Err(ValidationError::NoEffects { operator: operator() });
        }
        Ok(())
    }
}

impl Axiom {
    /// Axiom invariants
    ///
    /// The condition is valid, the effect is a valid binary fact on a derived
    /// variable, and layering holds:
    ///
    /// 1. axioms set the non-initial value of the derived variable
    /// 2. derived condition variables sit in a layer at most the effect's
    /// 3. on equal layers the condition uses the non-initial value
    ///
    /// Rule 1 is not enforced: current producers emit axioms that set the
    /// initial value (extended domain transition graphs). Where rule 1 is
    /// violated, rule 3 flips to "uses the initial value".
    pub fn validate(
        &self,
        axiom: usize,
        variables: &VariableSet,
        init: &InitialState,
    ) -> ValidationResult<()> {
        variables.validate_condition(&self.condition)?;
        variables.validate_fact(self.effect)?;
        let eff = self.effect;
        let eff_layer = variables
            .layer(eff.var)
            .ok_or(ValidationError::AxiomEffectNotDerived { axiom, fact: eff })?;
        if eff.value > 1 {
            return Err(ValidationError::AxiomEffectNotBinary {
                axiom,
                value: eff.value,
            });
        }
        let sets_init_value = init.value(eff.var) == Some(eff.value);

        for &cond in &self.condition {
            let Some(cond_layer) = variables.layer(cond.var) else {
                continue;
            };
            if cond_layer > eff_layer {
                return Err(ValidationError::AxiomLayerOrder {
                    axiom,
                    var: cond.var,
                    cond_layer,
                    eff_layer,
                });
            }
            if cond_layer == eff_layer {
                let uses_init_value = init.value(cond.var) == Some(cond.value);
                if uses_init_value != sets_init_value {
                    return Err(ValidationError::AxiomSameLayerValue { axiom, fact: cond });
                }
            }
        }
        Ok(())
    }
}

impl Task {
    /// Validate every component
    pub fn validate(&self) -> ValidationResult<()> {
        self.variables.validate()?;
        for (i, group) in self.mutexes.iter().enumerate() {
            group.validate(i, &self.variables)?;
        }
        self.init.validate(&self.variables)?;
        self.goal.validate(&self.variables)?;
        for op in &self.operators {
            op.validate(&self.variables)?;
        }
        for (i, axiom) in self.axioms.iter().enumerate() {
            axiom.validate(i, &self.variables, &self.init)?;
        }
        Ok(())
    }
}
