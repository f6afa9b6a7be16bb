//! Report aggregation and TAP rendering.

use std::io::{self, Write};

use crate::domain::models::{
    Definition, Outcome, Report, ReportCounts, ReportEntry, ReportHeader, Verdict,
};

/// Collects verdicts in delivery order and numbers them from 1.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    header: ReportHeader,
    entries: Vec<ReportEntry>,
    counts: ReportCounts,
}

impl ReportAggregator {
    pub fn new(header: ReportHeader) -> Self {
        Self {
            header,
            ..Self::default()
        }
    }

    /// Append a verdict and return the sequence number it was given.
    pub fn push(&mut self, definition: Definition, verdict: Verdict) -> usize {
        let sequence = self.entries.len() + 1;
        self.counts.record(&verdict.outcome);
        tracing::debug!(
            sequence,
            definition = %definition.id,
            outcome = ?verdict.outcome,
            "verdict recorded"
        );
        self.entries.push(ReportEntry {
            sequence,
            definition,
            verdict,
        });
        sequence
    }

    pub const fn counts(&self) -> &ReportCounts {
        &self.counts
    }

    pub fn finish(self) -> Report {
        Report {
            header: self.header,
            entries: self.entries,
            counts: self.counts,
        }
    }
}

impl Extend<(Definition, Verdict)> for ReportAggregator {
    fn extend<T: IntoIterator<Item = (Definition, Verdict)>>(&mut self, iter: T) {
        for (definition, verdict) in iter {
            self.push(definition, verdict);
        }
    }
}

/// Write `report` as a TAP document.
pub fn write_tap<W: Write>(report: &Report, out: &mut W) -> io::Result<()> {
    writeln!(out, "1..{}", report.entries.len())?;
    if let Some(source) = &report.header.source {
        write_comment(out, &format!("From file: {source}"))?;
    }
    if let Some(oracle) = &report.header.oracle {
        write_comment(out, &format!("Using reasoner: {oracle}"))?;
    }

    for entry in &report.entries {
        let status = match entry.verdict.outcome {
            Outcome::Pass => "ok",
            _ => "not ok",
        };
        write!(
            out,
            "{status} {} {}",
            entry.sequence,
            escape_description(&entry.description())
        )?;
        if let (Some(directive), Some(reason)) =
            (entry.verdict.outcome.directive(), entry.verdict.outcome.reason())
        {
            write!(out, " # {directive} {}", single_line(reason))?;
        }
        writeln!(out)?;

        for comment in &entry.verdict.comments {
            write_comment(out, comment)?;
        }
    }

    writeln!(out)
}

/// TAP document as a string.
pub fn render_tap(report: &Report) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_tap(report, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Emit the report on `out` and the one-line summary on `diagnostics`.
pub fn emit<O: Write, D: Write>(report: &Report, out: &mut O, diagnostics: &mut D) -> io::Result<()> {
    write_tap(report, out)?;
    out.flush()?;

    let counts = &report.counts;
    tracing::info!(
        success = counts.success,
        failure = counts.failure,
        todo = counts.todo,
        skip = counts.skip,
        exit_status = report.exit_status(),
        "testing complete"
    );
    writeln!(diagnostics, "{}", report.summary_line())?;
    diagnostics.flush()
}

fn write_comment<W: Write>(out: &mut W, comment: &str) -> io::Result<()> {
    for line in comment.lines() {
        writeln!(out, "# {line}")?;
    }
    Ok(())
}

fn escape_description(description: &str) -> String {
    single_line(description).replace('#', "\\#")
}

fn single_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ")
}
