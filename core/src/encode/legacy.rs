//! Legacy task format writer
//!
//! Line-oriented records delimited by `begin_*`/`end_*` markers. Every method
//! writes complete lines; I/O errors are reported against the legacy stream.

use super::{EncodeError, EncodeResult, Stream};
use crate::ir::{Axiom, Fact, MutexGroup, PrePost};
use std::fmt::Display;
use std::io::Write;

/// Format version written in the header
pub const LEGACY_VERSION: u32 = 4;

pub struct LegacyWriter<W: Write> {
    out: W,
    lines: usize,
}

impl<W: Write> LegacyWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Lines written so far
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn line(&mut self, content: impl Display) -> EncodeResult<()> {
        writeln!(self.out, "{}", content).map_err(EncodeError::io(Stream::Legacy))?;
        self.lines += 1;
        Ok(())
    }

    fn fact(&mut self, fact: &Fact) -> EncodeResult<()> {
        self.line(format_args!("{} {}", fact.var, fact.value))
    }

    pub fn header(&mut self, use_metric: bool) -> EncodeResult<()> {
        self.line("begin_version")?;
        self.line(LEGACY_VERSION)?;
        self.line("end_version")?;
        self.line("begin_metric")?;
        self.line(u8::from(use_metric))?;
        self.line("end_metric")
    }

    pub fn begin_variable(&mut self, var: usize, layer_code: i64, range: usize) -> EncodeResult<()> {
        self.line("begin_variable")?;
        self.line(format_args!("var{}", var))?;
        self.line(layer_code)?;
        self.line(range)
    }

    pub fn end_variable(&mut self) -> EncodeResult<()> {
        self.line("end_variable")
    }

    pub fn mutex_group(&mut self, group: &MutexGroup) -> EncodeResult<()> {
        self.line("begin_mutex_group")?;
        self.line(group.facts.len())?;
        for fact in &group.facts {
            self.fact(fact)?;
        }
        self.line("end_mutex_group")
    }

    pub fn begin_goal(&mut self, pairs: usize) -> EncodeResult<()> {
        self.line("begin_goal")?;
        self.line(pairs)
    }

    pub fn goal_pair(&mut self, fact: &Fact) -> EncodeResult<()> {
        self.fact(fact)
    }

    /// Opens an operator record up to and including the pre/post count
    pub fn begin_operator(&mut self, name: &str, prevail: &[Fact], pre_post: usize) -> EncodeResult<()> {
        self.line("begin_operator")?;
        self.line(name)?;
        self.line(prevail.len())?;
        for fact in prevail {
            self.fact(fact)?;
        }
        self.line(pre_post)
    }

    /// `<ncond> [<cvar> <cval>]* <var> <pre> <post>`
    pub fn pre_post(&mut self, rule: &PrePost) -> EncodeResult<()> {
        let mut fields = vec![rule.condition.len().to_string()];
        for fact in &rule.condition {
            fields.push(fact.var.to_string());
            fields.push(fact.value.to_string());
        }
        fields.push(rule.var.to_string());
        fields.push(rule.pre_code().to_string());
        fields.push(rule.post.to_string());
        self.line(fields.join(" "))
    }

    pub fn end_operator(&mut self, cost: u32) -> EncodeResult<()> {
        self.line(cost)?;
        self.line("end_operator")
    }

    /// Axiom rule; the effect must already be known to be binary
    pub fn axiom(&mut self, axiom: &Axiom) -> EncodeResult<()> {
        self.line("begin_rule")?;
        self.line(axiom.condition.len())?;
        for fact in &axiom.condition {
            self.fact(fact)?;
        }
        let effect = axiom.effect;
        self.line(format_args!(
            "{} {} {}",
            effect.var,
            1 - effect.value.min(1),
            effect.value
        ))?;
        self.line("end_rule")
    }

    pub fn flush(&mut self) -> EncodeResult<()> {
        self.out.flush().map_err(EncodeError::io(Stream::Legacy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::condition;

    fn written(f: impl FnOnce(&mut LegacyWriter<Vec<u8>>) -> EncodeResult<()>) -> String {
        let mut writer = LegacyWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.into_inner()).unwrap()
    }

    #[test]
    fn test_header() {
        let text = written(|w| w.header(true));
        assert_eq!(text, "begin_version\n4\nend_version\nbegin_metric\n1\nend_metric\n");
    }

    #[test]
    fn test_pre_post_line() {
        let rule = PrePost::new(2, None, 1, condition([(0, 1), (1, 0)]));
        assert_eq!(written(|w| w.pre_post(&rule)), "2 0 1 1 0 2 -1 1\n");
        assert_eq!(written(|w| w.pre_post(&PrePost::simple(0, Some(0), 1))), "0 0 0 1\n");
    }

    #[test]
    fn test_axiom_rule() {
        let axiom = Axiom::new(condition([(0, 1)]), Fact::new(3, 1));
        assert_eq!(
            written(|w| w.axiom(&axiom)),
            "begin_rule\n1\n0 1\n3 0 1\nend_rule\n"
        );
    }

    #[test]
    fn test_line_count() {
        let mut writer = LegacyWriter::new(Vec::new());
        writer.begin_variable(0, -1, 2).unwrap();
        writer.end_variable().unwrap();
        assert_eq!(writer.lines(), 5);
    }
}
