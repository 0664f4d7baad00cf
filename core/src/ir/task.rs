//! Planning task in finite-domain representation
//!
//! The caller is responsible for handing over data that satisfies the
//! structural restrictions checked by [`Task::validate`]; constructors only
//! canonicalize orderings.

use super::facts::{Condition, Fact};
use super::variables::VariableSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Group of facts of which at most one holds in any reachable state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutexGroup {
    pub facts: Vec<Fact>,
}

impl MutexGroup {
    pub fn new(mut facts: Vec<Fact>) -> Self {
        facts.sort();
        Self { facts }
    }

    pub fn encoding_size(&self) -> usize {
        self.facts.len()
    }
}

/// Total assignment, one value per variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialState {
    pub values: Vec<usize>,
}

impl InitialState {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values }
    }

    pub fn value(&self, var: usize) -> Option<usize> {
        self.values.get(var).copied()
    }

    pub fn facts(&self) -> impl Iterator<Item = Fact> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(var, &value)| Fact::new(var, value))
    }
}

/// Goal condition: a non-empty partial assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub pairs: Condition,
}

impl Goal {
    pub fn new(mut pairs: Condition) -> Self {
        pairs.sort();
        Self { pairs }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encoding_size(&self) -> usize {
        self.pairs.len()
    }
}

/// One effect of an operator
///
/// `pre == None` means the operator does not care about the prior value of
/// `var` (written `-1`). `condition` guards the effect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PrePost {
    pub var: usize,
    pub pre: Option<usize>,
    pub post: usize,
    #[serde(default)]
    pub condition: Condition,
}

impl PrePost {
    pub fn new(var: usize, pre: Option<usize>, post: usize, condition: Condition) -> Self {
        Self {
            var,
            pre,
            post,
            condition,
        }
    }

    /// Unconditional effect
    pub fn simple(var: usize, pre: Option<usize>, post: usize) -> Self {
        Self::new(var, pre, post, Vec::new())
    }

    /// Precondition as written in the legacy format
    pub fn pre_code(&self) -> i64 {
        self.pre.map_or(-1, |value| value as i64)
    }
}

/// Ground operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// Ground name, written to the legacy stream as is
    pub name: String,
    /// Conditions on variables the operator does not change
    pub prevail: Condition,
    /// Effects in canonical order
    pub pre_post: Vec<PrePost>,
    /// Cost certified through the cost register
    pub cost: u32,
}

impl Operator {
    /// Sorts `prevail` and sorts/deduplicates `pre_post`
    pub fn new(name: impl Into<String>, mut prevail: Condition, pre_post: Vec<PrePost>, cost: u32) -> Self {
        prevail.sort();
        Self {
            name: name.into(),
            prevail,
            pre_post: Self::canonical_pre_post(pre_post),
            cost,
        }
    }

    /// Sorted and uniquified pre/post list; effect conditions keep their order
    pub fn canonical_pre_post(pre_post: Vec<PrePost>) -> Vec<PrePost> {
        pre_post.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
    }

    /// Prevail conditions and preconditions merged into one sorted condition
    ///
    /// At most one fact per variable; rules sharing a variable agree on `pre`
    /// in valid operators.
    pub fn applicability_conditions(&self) -> Condition {
        let mut conditions: Condition = self.prevail.clone();
        for rule in &self.pre_post {
            if let Some(pre) = rule.pre {
                let fact = Fact::new(rule.var, pre);
                if !conditions.contains(&fact) {
                    conditions.push(fact);
                }
            }
        }
        conditions.sort();
        conditions
    }

    pub fn encoding_size(&self) -> usize {
        1 + self.prevail.len()
            + self
                .pre_post
                .iter()
                .map(|rule| 1 + rule.condition.len() + usize::from(rule.pre.is_some()))
                .sum::<usize>()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "Prevail:")?;
        for fact in &self.prevail {
            writeln!(f, "  {}", fact)?;
        }
        writeln!(f, "Pre/Post:")?;
        for rule in &self.pre_post {
            write!(f, "  v{}: {} -> {}", rule.var, rule.pre_code(), rule.post)?;
            if !rule.condition.is_empty() {
                let conds: Vec<String> = rule
                    .condition
                    .iter()
                    .map(|c| format!("{}: {}", c.var, c.value))
                    .collect();
                write!(f, " [{}]", conds.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rule deriving a binary derived variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axiom {
    pub condition: Condition,
    pub effect: Fact,
}

impl Axiom {
    pub fn new(mut condition: Condition, effect: Fact) -> Self {
        condition.sort();
        Self { condition, effect }
    }

    pub fn encoding_size(&self) -> usize {
        1 + self.condition.len()
    }
}

impl fmt::Display for Axiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Condition:")?;
        for fact in &self.condition {
            writeln!(f, "  {}", fact)?;
        }
        writeln!(f, "Effect:")?;
        writeln!(f, "  {}", self.effect)
    }
}

/// Complete finite-domain planning task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// State variables, primary and derived
    pub variables: VariableSet,
    /// Mutex groups, carried to the legacy stream only
    pub mutexes: Vec<MutexGroup>,
    /// One value per variable
    pub init: InitialState,
    /// Facts that must hold at the end of a plan
    pub goal: Goal,
    /// Operators in canonical order
    pub operators: Vec<Operator>,
    /// Axioms in canonical order
    pub axioms: Vec<Axiom>,
    /// Whether operator costs are used
    pub metric: bool,
}

impl Task {
    /// Assemble a task, putting operators and axioms in canonical order
    ///
    /// Operators are ordered by `(name, prevail, pre_post)` and axioms by
    /// `(condition, effect)`; both sorts are stable.
    pub fn new(
        variables: VariableSet,
        mutexes: Vec<MutexGroup>,
        init: InitialState,
        goal: Goal,
        mut operators: Vec<Operator>,
        mut axioms: Vec<Axiom>,
        metric: bool,
    ) -> Self {
        operators.sort_by(|a, b| {
            (&a.name, &a.prevail, &a.pre_post).cmp(&(&b.name, &b.prevail, &b.pre_post))
        });
        axioms.sort_by(|a, b| (&a.condition, &a.effect).cmp(&(&b.condition, &b.effect)));
        Self {
            variables,
            mutexes,
            init,
            goal,
            operators,
            axioms,
            metric,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Highest operator cost (`0` without operators)
    pub fn max_cost(&self) -> u32 {
        self.operators.iter().map(|op| op.cost).max().unwrap_or(0)
    }

    /// Operator costs that actually occur, ascending
    pub fn distinct_costs(&self) -> BTreeSet<u32> {
        self.operators.iter().map(|op| op.cost).collect()
    }

    /// Size measure of the task (the init state is not counted)
    pub fn encoding_size(&self) -> usize {
        self.variables.encoding_size()
            + self.mutexes.iter().map(MutexGroup::encoding_size).sum::<usize>()
            + self.goal.encoding_size()
            + self.operators.iter().map(Operator::encoding_size).sum::<usize>()
            + self.axioms.iter().map(Axiom::encoding_size).sum::<usize>()
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON; the result is re-canonicalized
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: Task = serde_json::from_str(json)?;
        Ok(raw.canonicalize())
    }

    /// Re-run every canonicalizing constructor
    pub fn canonicalize(self) -> Self {
        Task::new(
            self.variables,
            self.mutexes.into_iter().map(|m| MutexGroup::new(m.facts)).collect(),
            self.init,
            Goal::new(self.goal.pairs),
            self.operators
                .into_iter()
                .map(|op| Operator::new(op.name, op.prevail, op.pre_post, op.cost))
                .collect(),
            self.axioms
                .into_iter()
                .map(|ax| Axiom::new(ax.condition, ax.effect))
                .collect(),
            self.metric,
        )
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "variables:")?;
        write!(f, "{}", self.variables)?;
        writeln!(f, "{} mutex groups:", self.mutexes.len())?;
        for group in &self.mutexes {
            writeln!(f, "group:")?;
            for fact in &group.facts {
                writeln!(f, "{}", fact)?;
            }
        }
        writeln!(f, "init:")?;
        for fact in self.init.facts() {
            writeln!(f, "{}", fact)?;
        }
        writeln!(f, "goal:")?;
        for fact in &self.goal.pairs {
            writeln!(f, "{}", fact)?;
        }
        writeln!(f, "{} operators:", self.operators.len())?;
        for op in &self.operators {
            write!(f, "{}", op)?;
        }
        writeln!(f, "{} axioms:", self.axioms.len())?;
        for axiom in &self.axioms {
            write!(f, "{}", axiom)?;
        }
        writeln!(f, "metric: {}", self.metric)
    }
}
