//! Section state machine driving both output streams

use super::accumulator::{
    Accumulator, AxiomsAccumulator, CertificateBlock, ConjunctionAccumulator, ConjunctionContext,
    OperatorAccumulator, OperatorContext, OperatorEntry, OperatorsAccumulator, VariableAccumulator, VariableContext,
};
use super::legacy::LegacyWriter;
use super::{EncodeError, EncodeResult, Stream};
use crate::cost::CostRegister;
use crate::ir::{Task, ValidationError};
use crate::naming;
use crate::pb::Literal;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info, trace};

/// Encoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Check structural invariants before writing anything
    pub validate: bool,

    /// Cost register size; derived from the task when `None`
    pub cost_register_bits: Option<u32>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            validate: cfg!(debug_assertions),
            cost_register_bits: None,
        }
    }
}

impl EncoderConfig {
    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    pub fn with_cost_register_bits(mut self, bits: u32) -> Self {
        self.cost_register_bits = Some(bits);
        self
    }
}

/// Task sections in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Header,
    Variables,
    Mutexes,
    InitialState,
    Goal,
    Operators,
    Axioms,
    Done,
}

impl Section {
    pub fn next(self) -> Section {
        match self {
            Section::Header => Section::Variables,
            Section::Variables => Section::Mutexes,
            Section::Mutexes => Section::InitialState,
            Section::InitialState => Section::Goal,
            Section::Goal => Section::Operators,
            Section::Operators => Section::Axioms,
            Section::Axioms | Section::Done => Section::Done,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Variables => "variables",
            Section::Mutexes => "mutexes",
            Section::InitialState => "initial state",
            Section::Goal => "goal",
            Section::Operators => "operators",
            Section::Axioms => "axioms",
            Section::Done => "done",
        }
    }
}

/// What one encoding run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Lines written to the legacy stream
    pub legacy_lines: usize,
    /// Constraints written to the certificate stream
    pub constraints: usize,
    /// Operator blocks written
    pub operators: usize,
    /// Axiom rules written
    pub axioms: usize,
    /// Costs certified by the register, each once
    pub distinct_costs: usize,
    /// Register size; the register holds `bits + 1` flags
    pub register_bits: u32,
}

struct CertificateWriter<W: Write> {
    out: W,
    constraints: usize,
}

impl<W: Write> CertificateWriter<W> {
    fn new(out: W) -> Self {
        Self { out, constraints: 0 }
    }

    /// Flush one section block followed by a blank line
    fn block(&mut self, block: &CertificateBlock) -> EncodeResult<()> {
        block
            .write_to(&mut self.out)
            .and_then(|()| writeln!(self.out))
            .map_err(EncodeError::io(Stream::Certificate))?;
        self.constraints += block.num_constraints();
        Ok(())
    }

    fn flush(&mut self) -> EncodeResult<()> {
        self.out.flush().map_err(EncodeError::io(Stream::Certificate))
    }
}

/// Single-pass dual-stream encoder for one task
pub struct Encoder<'t> {
    task: &'t Task,
    config: EncoderConfig,
    register: CostRegister,
}

impl<'t> Encoder<'t> {
    pub fn new(task: &'t Task, config: EncoderConfig) -> Self {
        let register = match config.cost_register_bits {
            Some(bits) => CostRegister::new(bits),
            None => CostRegister::for_task(task.num_variables(), task.max_cost()),
        };
        Self {
            task,
            config,
            register,
        }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    pub fn register(&self) -> CostRegister {
        self.register
    }

    /// Write the legacy encoding and its certificate
    ///
    /// On error both streams may hold a partial prefix and must be discarded.
    pub fn encode<L: Write, C: Write>(&self, legacy: L, certificate: C) -> EncodeResult<EncodeSummary> {
        if self.config.validate {
            self.task.validate()?;
        }

        let mut legacy = LegacyWriter::new(legacy);
        let mut certificate = CertificateWriter::new(certificate);

        let mut section = Section::Header;
        while section != Section::Done {
            debug!(
                section = section.name(),
                elements = self.element_count(section),
                "encoding section"
            );
            let block = self.encode_section(section, &mut legacy)?;
            certificate.block(&block)?;
            section = section.next();
        }
        legacy.flush()?;
        certificate.flush()?;

        let summary = EncodeSummary {
            legacy_lines: legacy.lines(),
            constraints: certificate.constraints,
            operators: self.task.operators.len(),
            axioms: self.task.axioms.len(),
            distinct_costs: self.task.distinct_costs().len(),
            register_bits: self.register.bits(),
        };
        info!(
            legacy_lines = summary.legacy_lines,
            constraints = summary.constraints,
            operators = summary.operators,
            axioms = summary.axioms,
            distinct_costs = summary.distinct_costs,
            register_bits = summary.register_bits,
            "encoded task"
        );
        Ok(summary)
    }

    fn element_count(&self, section: Section) -> usize {
        match section {
            Section::Header | Section::Done => 0,
            Section::Variables => self.task.num_variables(),
            Section::Mutexes => self.task.mutexes.len(),
            Section::InitialState => self.task.init.values.len(),
            Section::Goal => self.task.goal.len(),
            Section::Operators => self.task.operators.len(),
            Section::Axioms => self.task.axioms.len(),
        }
    }

    fn encode_section<W: Write>(
        &self,
        section: Section,
        legacy: &mut LegacyWriter<W>,
    ) -> EncodeResult<CertificateBlock> {
        match section {
            Section::Header => {
                legacy.header(self.task.metric)?;
                let mut block = CertificateBlock::titled("PB-encoding of task:");
                block.comment(format!("naming scheme {}", naming::NAMING_SCHEME_VERSION));
                Ok(block)
            }
            Section::Variables => self.encode_variables(legacy),
            Section::Mutexes => {
                legacy.line(self.task.mutexes.len())?;
                for group in &self.task.mutexes {
                    legacy.mutex_group(group)?;
                }
                Ok(CertificateBlock::titled("ignoring mutex groups"))
            }
            Section::InitialState => {
                let (expected, found) = (self.task.num_variables(), self.task.init.values.len());
                if found != expected {
                    return Err(ValidationError::InitLength { expected, found }.into());
                }
                legacy.line("begin_state")?;
                let mut acc = ConjunctionAccumulator::init(ConjunctionContext {
                    proxy: Literal::pos(naming::initial_state_flag()),
                    owner: "initial state",
                    heading: "init state reification:",
                    variables: &self.task.variables,
                })?;
                for fact in self.task.init.facts() {
                    legacy.line(fact.value)?;
                    acc = acc.update(fact)?;
                }
                legacy.line("end_state")?;
                Ok(acc.finalize())
            }
            Section::Goal => {
                let goal = &self.task.goal;
                legacy.begin_goal(goal.len())?;
                let mut acc = ConjunctionAccumulator::init(ConjunctionContext {
                    proxy: Literal::pos(naming::goal_flag()),
                    owner: "goal",
                    heading: "goal condition reification:",
                    variables: &self.task.variables,
                })?;
                for fact in &goal.pairs {
                    legacy.goal_pair(fact)?;
                    acc = acc.update(*fact)?;
                }
                legacy.line("end_goal")?;
                Ok(acc.finalize())
            }
            Section::Operators => self.encode_operators(legacy),
            Section::Axioms => {
                legacy.line(self.task.axioms.len())?;
                let mut acc = AxiomsAccumulator::init(&self.task.variables)?;
                for (index, axiom) in self.task.axioms.iter().enumerate() {
                    trace!(axiom = index, "encoding axiom");
                    acc = acc.update(axiom)?;
                    legacy.axiom(axiom)?;
                }
                Ok(acc.finalize())
            }
            Section::Done => Ok(CertificateBlock::new()),
        }
    }

    fn encode_variables<W: Write>(&self, legacy: &mut LegacyWriter<W>) -> EncodeResult<CertificateBlock> {
        let variables = &self.task.variables;
        legacy.line(variables.len())?;

        let mut block = CertificateBlock::new();
        for (var, &range) in variables.ranges.iter().enumerate() {
            let names = variables
                .value_names
                .get(var)
                .filter(|names| names.len() == range)
                .ok_or_else(|| ValidationError::ValueNameCount {
                    var,
                    range,
                    names: variables.value_names.get(var).map_or(0, Vec::len),
                })?;

            legacy.begin_variable(var, variables.layer_code(var), range)?;
            let mut acc = VariableAccumulator::init(VariableContext {
                var,
                primary: !variables.is_derived(var),
            })?;
            for (value, name) in names.iter().enumerate() {
                legacy.line(name)?;
                acc = acc.update(value)?;
            }
            legacy.end_variable()?;
            block.append(acc.finalize());
        }
        Ok(block)
    }

    fn encode_operators<W: Write>(&self, legacy: &mut LegacyWriter<W>) -> EncodeResult<CertificateBlock> {
        legacy.line(self.task.operators.len())?;

        let mut section = OperatorsAccumulator::init(self.register)?;
        for (index, operator) in self.task.operators.iter().enumerate() {
            trace!(operator = %operator.name, index, "encoding operator");
            legacy.begin_operator(&operator.name, &operator.prevail, operator.pre_post.len())?;
            let mut acc = OperatorAccumulator::init(OperatorContext {
                index,
                operator,
                variables: &self.task.variables,
            })?;
            for rule in &operator.pre_post {
                legacy.pre_post(rule)?;
                acc = acc.update(rule)?;
            }
            legacy.end_operator(operator.cost)?;
            section = section.update(OperatorEntry {
                index,
                cost: operator.cost,
                block: acc.finalize(),
            })?;
        }
        Ok(section.finalize())
    }
}

/// Encode with the default configuration
pub fn encode<L: Write, C: Write>(task: &Task, legacy: L, certificate: C) -> EncodeResult<EncodeSummary> {
    Encoder::new(task, EncoderConfig::default()).encode(legacy, certificate)
}

/// Encode into in-memory `(legacy, certificate)` texts
pub fn encode_to_strings(task: &Task, config: EncoderConfig) -> EncodeResult<(String, String)> {
    let mut legacy = Vec::new();
    let mut certificate = Vec::new();
    Encoder::new(task, config).encode(&mut legacy, &mut certificate)?;
    Ok((
        String::from_utf8_lossy(&legacy).into_owned(),
        String::from_utf8_lossy(&certificate).into_owned(),
    ))
}
