//! Streaming accumulator protocol
//!
//! Each task section folds its child elements into an accumulator while the
//! legacy stream is being written, then finalizes into one
//! [`CertificateBlock`]. Nothing here touches I/O.

use super::{EncodeError, EncodeResult};
use crate::cost::CostRegister;
use crate::ir::{literals, primed_literals, Axiom, Fact, Operator, PrePost, VariableSet};
use crate::naming;
use crate::pb::{
    bi_reify_conjunction, disjunction_implies_unit, implies_disjunction, unit_implies_conjunction,
    unit_implies_disjunction, Constraint, Literal, Term,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io::{self, Write};

/// Three-phase fold producing one certificate block
pub trait Accumulator: Sized {
    /// What the section knows before its first element
    type Context;
    /// One child element of the section
    type Element;

    /// Empty accumulator; fails when the context itself is unusable
    fn init(context: Self::Context) -> EncodeResult<Self>;

    /// Fold in one element
    fn update(self, element: Self::Element) -> EncodeResult<Self>;

    /// Close the section
    fn finalize(self) -> CertificateBlock;
}

/// `fact` names an existing variable and a value in its domain
fn check_fact(variables: &VariableSet, fact: Fact, owner: impl FnOnce() -> String) -> EncodeResult<()> {
    if fact.var >= variables.len() {
        return Err(EncodeError::UnknownVariable {
            context: owner(),
            var: fact.var,
        });
    }
    Ok(variables.validate_fact(fact)?)
}

fn check_condition(
    variables: &VariableSet,
    condition: &[Fact],
    owner: impl Fn() -> String,
) -> EncodeResult<()> {
    condition
        .iter()
        .try_for_each(|&fact| check_fact(variables, fact, &owner))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Comment(String),
    Constraint(Constraint),
}

/// Ordered comments and constraints, flushed to the certificate stream at once
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateBlock {
    lines: Vec<Line>,
}

impl CertificateBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block starting with a `* heading` comment
    pub fn titled(heading: impl Into<String>) -> Self {
        let mut block = Self::new();
        block.comment(heading);
        block
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.lines.push(Line::Comment(text.into()));
    }

    pub fn push(&mut self, constraint: Constraint) {
        self.lines.push(Line::Constraint(constraint));
    }

    pub fn extend(&mut self, constraints: impl IntoIterator<Item = Constraint>) {
        self.lines.extend(constraints.into_iter().map(Line::Constraint));
    }

    /// Push a `(right, left)` reification pair, right first
    pub fn push_pair(&mut self, (right, left): (Constraint, Constraint)) {
        self.push(right);
        self.push(left);
    }

    pub fn append(&mut self, other: CertificateBlock) {
        self.lines.extend(other.lines);
    }

    pub fn constraints(&self) -> impl Iterator<Item = &Constraint> {
        self.lines.iter().filter_map(|line| match line {
            Line::Constraint(c) => Some(c),
            Line::Comment(_) => None,
        })
    }

    pub fn comments(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Comment(text) => Some(text.as_str()),
            Line::Constraint(_) => None,
        })
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for CertificateBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match line {
                Line::Comment(text) => writeln!(f, "* {}", text)?,
                Line::Constraint(c) => writeln!(f, "{}", c)?,
            }
        }
        Ok(())
    }
}

/// Context of one variable's domain block
#[derive(Debug, Clone, Copy)]
pub struct VariableContext {
    pub var: usize,
    /// Primary variables also get frame constraints
    pub primary: bool,
}

/// Domain constraints of one variable; elements are value indices
#[derive(Debug)]
pub struct VariableAccumulator {
    context: VariableContext,
    values: Vec<Fact>,
}

impl Accumulator for VariableAccumulator {
    type Context = VariableContext;
    type Element = usize;

    fn init(context: VariableContext) -> EncodeResult<Self> {
        Ok(Self {
            context,
            values: Vec::new(),
        })
    }

    fn update(mut self, value: usize) -> EncodeResult<Self> {
        self.values.push(Fact::new(self.context.var, value));
        Ok(self)
    }

    fn finalize(self) -> CertificateBlock {
        let var = self.context.var;
        let mut block = CertificateBlock::titled(format!("var{} domain constraints", var));
        let at_most_one = self.values.len().saturating_sub(1);

        for current in [literals(&self.values), primed_literals(&self.values)] {
            block.push(Constraint::new(
                current.iter().map(|l| Term::unit(l.negate())).collect(),
                at_most_one,
            ));
            block.push(Constraint::clause(current));
        }

        if self.context.primary {
            let frame = Literal::pos(naming::frame_flag(var));
            for fact in &self.values {
                let now = fact.literal();
                let next = fact.primed_literal();
                block.push(Constraint::clause([frame.negate(), now.negate(), next.clone()]));
                block.push(Constraint::clause([frame.negate(), now, next.negate()]));
            }
        }
        block
    }
}

/// Context of a conjunction reification
#[derive(Debug, Clone)]
pub struct ConjunctionContext<'a> {
    pub proxy: Literal,
    /// Owner named in errors, e.g. `goal`
    pub owner: &'static str,
    pub heading: &'static str,
    pub variables: &'a VariableSet,
}

/// `proxy <=> ∧ facts`; used for the initial state and the goal
#[derive(Debug)]
pub struct ConjunctionAccumulator<'a> {
    context: ConjunctionContext<'a>,
    conjuncts: Vec<Literal>,
}

impl<'a> Accumulator for ConjunctionAccumulator<'a> {
    type Context = ConjunctionContext<'a>;
    type Element = Fact;

    fn init(context: ConjunctionContext<'a>) -> EncodeResult<Self> {
        Ok(Self {
            context,
            conjuncts: Vec::new(),
        })
    }

    fn update(mut self, fact: Fact) -> EncodeResult<Self> {
        let owner = self.context.owner;
        check_fact(self.context.variables, fact, || owner.to_string())?;
        self.conjuncts.push(fact.literal());
        Ok(self)
    }

    fn finalize(self) -> CertificateBlock {
        let ConjunctionContext { proxy, heading, .. } = self.context;
        let mut block = CertificateBlock::titled(heading);
        block.push_pair(bi_reify_conjunction(&proxy, &self.conjuncts));
        block
    }
}

/// Context of one operator's reification
#[derive(Debug, Clone, Copy)]
pub struct OperatorContext<'a> {
    pub index: usize,
    pub operator: &'a Operator,
    pub variables: &'a VariableSet,
}

/// Reification of one operator; elements are its pre/post rules in order
#[derive(Debug)]
pub struct OperatorAccumulator<'a> {
    context: OperatorContext<'a>,
    flag: Literal,
    applicability: Vec<Fact>,
    posts: Vec<Constraint>,
    /// Indexed by variable; `None` for derived variables
    frames: Vec<Option<Constraint>>,
    effect_conditions: Vec<Constraint>,
}

impl<'a> Accumulator for OperatorAccumulator<'a> {
    type Context = OperatorContext<'a>;
    type Element = &'a PrePost;

    fn init(context: OperatorContext<'a>) -> EncodeResult<Self> {
        check_condition(context.variables, &context.operator.prevail, || {
            format!("operator '{}' prevail", context.operator.name)
        })?;
        let flag = Literal::pos(naming::operator_flag(context.index));
        let frames = (0..context.variables.len())
            .map(|var| {
                (!context.variables.is_derived(var)).then(|| {
                    unit_implies_disjunction(&flag, &[Literal::pos(naming::frame_flag(var))])
                })
            })
            .collect();
        Ok(Self {
            flag,
            applicability: context.operator.prevail.clone(),
            posts: Vec::new(),
            frames,
            effect_conditions: Vec::new(),
            context,
        })
    }

    fn update(mut self, rule: &'a PrePost) -> EncodeResult<Self> {
        let effect = Literal::pos(naming::effect_condition(self.flag.name(), self.posts.len()));
        let OperatorContext { operator, variables, .. } = self.context;
        let owner = || format!("operator '{}'", operator.name);

        check_fact(variables, Fact::new(rule.var, rule.post), owner)?;
        if let Some(pre) = rule.pre {
            check_fact(variables, Fact::new(rule.var, pre), owner)?;
        }
        check_condition(variables, &rule.condition, || {
            format!("operator '{}' effect condition {}", operator.name, self.posts.len())
        })?;

        if let Some(slot) = self.frames.get_mut(rule.var) {
            *slot = slot.take().map(|frame| frame.weaken_by(effect.clone()));
        }

        if let Some(pre) = rule.pre {
            let fact = Fact::new(rule.var, pre);
            if !self.applicability.contains(&fact) {
                self.applicability.push(fact);
            }
        }

        self.posts.push(implies_disjunction(
            &[self.flag.clone(), effect.clone()],
            &[Fact::new(rule.var, rule.post).primed_literal()],
        ));
        let (right, left) = bi_reify_conjunction(&effect, &literals(&rule.condition));
        self.effect_conditions.push(right);
        self.effect_conditions.push(left);
        Ok(self)
    }

    fn finalize(self) -> CertificateBlock {
        let op = self.context.operator;
        let mut block = CertificateBlock::titled(format!(
            "operator '{}' aka '{}' reification:",
            op.name, self.flag
        ));

        block.comment("op implies pre:");
        let mut applicability = self.applicability;
        applicability.sort();
        block.push(unit_implies_conjunction(&self.flag, &literals(&applicability)));

        block.comment("post:");
        block.extend(self.posts);

        block.comment("weak frame:");
        block.extend(self.frames.into_iter().flatten());

        block.comment("effect conditions:");
        block.extend(self.effect_conditions);

        block.comment("cost");
        let cost_flag = Literal::pos(naming::cost_threshold(op.cost, naming::CostRelation::Eq));
        block.push(unit_implies_conjunction(&self.flag, &[cost_flag]));
        block
    }
}

/// A finalized operator handed to the operators section
#[derive(Debug)]
pub struct OperatorEntry {
    pub index: usize,
    pub cost: u32,
    pub block: CertificateBlock,
}

/// Operators section: operator blocks, the transition proxy and the cost certificate
#[derive(Debug)]
pub struct OperatorsAccumulator {
    register: CostRegister,
    block: CertificateBlock,
    flags: Vec<Literal>,
    costs: BTreeSet<u32>,
}

impl Accumulator for OperatorsAccumulator {
    type Context = CostRegister;
    type Element = OperatorEntry;

    fn init(register: CostRegister) -> EncodeResult<Self> {
        Ok(Self {
            register,
            block: CertificateBlock::new(),
            flags: Vec::new(),
            costs: BTreeSet::new(),
        })
    }

    fn update(mut self, entry: OperatorEntry) -> EncodeResult<Self> {
        if !self.register.can_represent(entry.cost) {
            return Err(EncodeError::CostExceedsRegister {
                cost: entry.cost,
                bits: self.register.bits(),
            });
        }
        self.flags.push(Literal::pos(naming::operator_flag(entry.index)));
        self.costs.insert(entry.cost);
        self.block.append(entry.block);
        Ok(self)
    }

    fn finalize(self) -> CertificateBlock {
        let mut block = self.block;
        let transition = Literal::pos(naming::transition_flag());
        block.comment("transition:");
        block.push(unit_implies_disjunction(&transition, &self.flags));
        block.push(disjunction_implies_unit(&self.flags, &transition));

        block.comment(format!(
            "register c_0..c_{} cost certificate:",
            self.register.bits()
        ));
        for cost in self.costs {
            block.comment(format!("cost {}", cost));
            block.extend(self.register.certificate(cost));
        }
        block
    }
}

/// Axioms section; elements are the axioms in task order
#[derive(Debug)]
pub struct AxiomsAccumulator<'a> {
    variables: &'a VariableSet,
    block: CertificateBlock,
    count: usize,
    /// Contributing axiom flags per derived effect, in effect order
    by_effect: BTreeMap<Fact, Vec<Literal>>,
}

impl<'a> Accumulator for AxiomsAccumulator<'a> {
    type Context = &'a VariableSet;
    type Element = &'a Axiom;

    fn init(variables: &'a VariableSet) -> EncodeResult<Self> {
        Ok(Self {
            variables,
            block: CertificateBlock::titled("axiom reification:"),
            count: 0,
            by_effect: BTreeMap::new(),
        })
    }

    fn update(mut self, axiom: &'a Axiom) -> EncodeResult<Self> {
        let index = self.count;
        let effect = axiom.effect;
        if effect.var >= self.variables.len() {
            return Err(EncodeError::UnknownVariable {
                context: format!("axiom {}", index),
                var: effect.var,
            });
        }
        if effect.value > 1 {
            return Err(EncodeError::NonBinaryAxiomEffect {
                axiom: index,
                value: effect.value,
            });
        }
        check_condition(self.variables, &axiom.condition, || {
            format!("axiom {} condition", index)
        })?;

        let flag = Literal::pos(naming::axiom_flag(index));
        self.block.comment(format!("axiom {}:", index));
        self.block
            .push_pair(bi_reify_conjunction(&flag, &literals(&axiom.condition)));
        self.block.push_pair(bi_reify_conjunction(
            &flag.prime(),
            &primed_literals(&axiom.condition),
        ));

        self.by_effect.entry(effect).or_default().push(flag);
        self.count += 1;
        Ok(self)
    }

    fn finalize(self) -> CertificateBlock {
        let mut block = self.block;
        for (fact, flags) in self.by_effect {
            let primed_flags: Vec<Literal> = flags.iter().map(Literal::prime).collect();
            block.comment(format!("derived fact {}:", fact.literal()));
            block.push(disjunction_implies_unit(&flags, &fact.literal()));
            block.push(disjunction_implies_unit(&primed_flags, &fact.primed_literal()));
            block.push(unit_implies_disjunction(&fact.literal(), &flags));
            block.push(unit_implies_disjunction(&fact.primed_literal(), &primed_flags));
        }
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{condition, ValidationError};

    fn fold<A: Accumulator>(context: A::Context, elements: Vec<A::Element>) -> CertificateBlock {
        let mut acc = A::init(context).unwrap();
        for element in elements {
            acc = acc.update(element).unwrap();
        }
        acc.finalize()
    }

    #[test]
    fn test_block_rendering() {
        let mut block = CertificateBlock::titled("heading");
        block.push(Constraint::clause([Literal::pos("a")]));
        assert_eq!(block.to_string(), "* heading\n1 a >= 1 ;\n");
        assert_eq!(block.num_constraints(), 1);
        assert_eq!(block.comments().collect::<Vec<_>>(), vec!["heading"]);
    }

    #[test]
    fn test_variable_domain_block() {
        let block = fold::<VariableAccumulator>(
            VariableContext { var: 2, primary: true },
            vec![0, 1, 2],
        );
        let lines: Vec<String> = block.constraints().map(|c| c.to_string()).collect();
        assert_eq!(lines[0], "1 ~var_2_0 1 ~var_2_1 1 ~var_2_2 >= 2 ;");
        assert_eq!(lines[1], "1 var_2_0 1 var_2_1 1 var_2_2 >= 1 ;");
        assert_eq!(lines[2], "1 ~prime^var_2_0 1 ~prime^var_2_1 1 ~prime^var_2_2 >= 2 ;");
        assert_eq!(lines[3], "1 prime^var_2_0 1 prime^var_2_1 1 prime^var_2_2 >= 1 ;");
        assert_eq!(lines[4], "1 ~frame_var_2 1 ~var_2_0 1 prime^var_2_0 >= 1 ;");
        assert_eq!(lines[5], "1 ~frame_var_2 1 var_2_0 1 ~prime^var_2_0 >= 1 ;");
        // 4 domain + 2 frame per value
        assert_eq!(lines.len(), 4 + 6);
    }

    #[test]
    fn test_derived_variable_has_no_frame() {
        let block = fold::<VariableAccumulator>(
            VariableContext { var: 0, primary: false },
            vec![0, 1],
        );
        assert_eq!(block.num_constraints(), 4);
        assert!(block.constraints().all(|c| !c.mentions("frame_var_0")));
    }

    fn goal_context(variables: &VariableSet) -> ConjunctionContext<'_> {
        ConjunctionContext {
            proxy: Literal::pos(naming::goal_flag()),
            owner: "goal",
            heading: "goal condition reification:",
            variables,
        }
    }

    #[test]
    fn test_conjunction_block() {
        let variables = VariableSet::primary(vec![2, 2, 2]);
        let block = fold::<ConjunctionAccumulator>(
            goal_context(&variables),
            vec![Fact::new(0, 1), Fact::new(2, 0)],
        );
        assert_eq!(
            block.to_string(),
            "* goal condition reification:\n\
             2 ~goal 1 var_0_1 1 var_2_0 >= 2 ;\n\
             1 goal 1 ~var_0_1 1 ~var_2_0 >= 1 ;\n"
        );
    }

    #[test]
    fn test_conjunction_rejects_foreign_facts() {
        let variables = VariableSet::primary(vec![2]);

        let acc = ConjunctionAccumulator::init(goal_context(&variables)).unwrap();
        match acc.update(Fact::new(9, 1)).unwrap_err() {
            EncodeError::UnknownVariable { context, var } => {
                assert_eq!(context, "goal");
                assert_eq!(var, 9);
            }
            other => panic!("unexpected error: {}", other),
        }

        let acc = ConjunctionAccumulator::init(goal_context(&variables)).unwrap();
        let err = acc.update(Fact::new(0, 2)).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidTask(ValidationError::InvalidFact { .. })
        ));
    }

    #[test]
    fn test_operator_frame_weakening() {
        let variables = VariableSet::primary(vec![2, 2, 2]);
        let op = Operator::new("move", vec![Fact::new(2, 1)], vec![PrePost::simple(0, Some(0), 1)], 3);
        let mut acc = OperatorAccumulator::init(OperatorContext {
            index: 4,
            operator: &op,
            variables: &variables,
        })
        .unwrap();
        for rule in &op.pre_post {
            acc = acc.update(rule).unwrap();
        }
        let block = acc.finalize();

        let frames: Vec<&Constraint> = block
            .constraints()
            .filter(|c| (0..3).any(|var| c.mentions(&naming::frame_flag(var))))
            .collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].to_string(), "1 op_4_effcond_0 1 ~op_4 1 frame_var_0 >= 1 ;");
        assert_eq!(frames[1].to_string(), "1 ~op_4 1 frame_var_1 >= 1 ;");
        assert_eq!(frames[2].to_string(), "1 ~op_4 1 frame_var_2 >= 1 ;");

        // active guard switches the frame off for v0
        assert!(frames[0].is_satisfied_by(|name| name == "op_4" || name == "op_4_effcond_0"));
        assert!(!frames[1].is_satisfied_by(|name| name == "op_4" || name == "op_4_effcond_0"));

        let text = block.to_string();
        assert!(text.contains("2 ~op_4 1 var_0_0 1 var_2_1 >= 2 ;"));
        assert!(text.contains("1 ~op_4 1 ~op_4_effcond_0 1 prime^var_0_1 >= 1 ;"));
        assert!(text.contains("0 ~op_4_effcond_0 >= 0 ;\n1 op_4_effcond_0 >= 1 ;"));
        assert!(text.contains("1 ~op_4 1 delta_cost_eq_3 >= 1 ;"));
    }

    #[test]
    fn test_operator_unknown_variable() {
        let variables = VariableSet::primary(vec![2]);
        let op = Operator::new("bad", vec![], vec![PrePost::simple(5, None, 1)], 0);
        let acc = OperatorAccumulator::init(OperatorContext {
            index: 0,
            operator: &op,
            variables: &variables,
        })
        .unwrap();
        let err = acc.update(&op.pre_post[0]).unwrap_err();
        assert!(matches!(err, EncodeError::UnknownVariable { var: 5, .. }));
    }

    #[test]
    fn test_operator_checks_every_condition() {
        let variables = VariableSet::primary(vec![2, 2]);
        fn context<'a>(operator: &'a Operator, variables: &'a VariableSet) -> OperatorContext<'a> {
            OperatorContext {
                index: 0,
                operator,
                variables,
            }
        }

        let prevail = Operator::new("p", vec![Fact::new(7, 0)], vec![PrePost::simple(0, None, 1)], 0);
        let err = OperatorAccumulator::init(context(&prevail, &variables)).unwrap_err();
        assert!(matches!(err, EncodeError::UnknownVariable { var: 7, .. }));

        let rule = PrePost::new(0, None, 1, condition([(8, 1)]));
        let effect = Operator::new("e", vec![], vec![rule], 0);
        let acc = OperatorAccumulator::init(context(&effect, &variables)).unwrap();
        match acc.update(&effect.pre_post[0]).unwrap_err() {
            EncodeError::UnknownVariable { context, var } => {
                assert_eq!(var, 8);
                assert_eq!(context, "operator 'e' effect condition 0");
            }
            other => panic!("unexpected error: {}", other),
        }

        let post = Operator::new("v", vec![], vec![PrePost::simple(1, Some(0), 3)], 0);
        let acc = OperatorAccumulator::init(context(&post, &variables)).unwrap();
        let err = acc.update(&post.pre_post[0]).unwrap_err();
        assert!(matches!(
            err,
            EncodeError::InvalidTask(ValidationError::InvalidFact { .. })
        ));
    }

    #[test]
    fn test_operators_section_trailer() {
        let register = CostRegister::new(1);
        let entries = vec![
            OperatorEntry { index: 0, cost: 2, block: CertificateBlock::titled("op 0") },
            OperatorEntry { index: 1, cost: 2, block: CertificateBlock::titled("op 1") },
            OperatorEntry { index: 2, cost: 0, block: CertificateBlock::titled("op 2") },
        ];
        let block = fold::<OperatorsAccumulator>(register, entries);
        let text = block.to_string();
        assert!(text.starts_with("* op 0\n* op 1\n* op 2\n* transition:\n"));
        assert!(text.contains("1 ~transition 1 op_0 1 op_1 1 op_2 >= 1 ;"));
        assert!(text.contains("3 transition 1 ~op_0 1 ~op_1 1 ~op_2 >= 3 ;"));
        // one certificate per distinct cost, ascending
        let cost_comments: Vec<&str> = block.comments().filter(|c| c.starts_with("cost ")).collect();
        assert_eq!(cost_comments, vec!["cost 0", "cost 2"]);
        assert_eq!(block.num_constraints(), 2 + 2 * 6);
    }

    #[test]
    fn test_operators_section_rejects_oversized_cost() {
        let acc = OperatorsAccumulator::init(CostRegister::new(0)).unwrap();
        let err = acc
            .update(OperatorEntry { index: 0, cost: 2, block: CertificateBlock::new() })
            .unwrap_err();
        assert!(matches!(err, EncodeError::CostExceedsRegister { cost: 2, bits: 0 }));
    }

    #[test]
    fn test_axioms_accumulate_by_effect() {
        let variables = VariableSet::new(
            vec![2, 2, 2],
            vec![None, None, Some(0)],
            vec![vec!["a".into(), "b".into()]; 3],
        );
        let axioms = vec![
            Axiom::new(condition([(0, 1)]), Fact::new(2, 1)),
            Axiom::new(condition([(1, 1)]), Fact::new(2, 1)),
        ];
        let block = fold::<AxiomsAccumulator>(&variables, axioms.iter().collect());
        let text = block.to_string();

        assert!(text.contains("* axiom 0:\n1 ~axiom_0 1 var_0_1 >= 1 ;\n1 axiom_0 1 ~var_0_1 >= 1 ;\n"));
        assert!(text.contains("1 ~prime^axiom_1 1 prime^var_1_1 >= 1 ;"));
        assert!(text.contains("* derived fact var_2_1:\n"));
        // fire: bound equals the number of contributing axioms
        assert!(text.contains("2 var_2_1 1 ~axiom_0 1 ~axiom_1 >= 2 ;"));
        assert!(text.contains("2 prime^var_2_1 1 ~prime^axiom_0 1 ~prime^axiom_1 >= 2 ;"));
        // support
        assert!(text.contains("1 ~var_2_1 1 axiom_0 1 axiom_1 >= 1 ;"));
    }

    #[test]
    fn test_axiom_errors() {
        let variables = VariableSet::new(vec![2], vec![Some(0)], vec![vec!["a".into(), "b".into()]]);
        let non_binary = Axiom::new(vec![], Fact::new(0, 2));
        let err = AxiomsAccumulator::init(&variables).unwrap().update(&non_binary).unwrap_err();
        assert!(matches!(err, EncodeError::NonBinaryAxiomEffect { axiom: 0, value: 2 }));

        let unknown = Axiom::new(vec![], Fact::new(3, 1));
        let err = AxiomsAccumulator::init(&variables).unwrap().update(&unknown).unwrap_err();
        assert!(matches!(err, EncodeError::UnknownVariable { var: 3, .. }));

        let foreign_condition = Axiom::new(condition([(4, 1)]), Fact::new(0, 1));
        let err = AxiomsAccumulator::init(&variables)
            .unwrap()
            .update(&foreign_condition)
            .unwrap_err();
        assert!(matches!(err, EncodeError::UnknownVariable { var: 4, .. }));
    }
}
