//! Command interpreter and script runner.
//!
//! The [`Interpreter`] owns the record collection. Commands are applied in
//! order, each seeing the collection left by the previous one. A rejected
//! command leaves the collection untouched.

use tracing::{debug, info, warn};

use crate::args::{Args, parse_args};
use crate::command::{Command, parse_commands};
use crate::condition::parse_condition;
use crate::error::{CommandError, Result};
use crate::factory::build_record;
use crate::filter::remove_matching;
use crate::record::{Record, RecordKind};
use crate::trace::{ScriptTrace, StepTrace};

/// Result of executing a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// ADD appended a record of this kind.
    Added(RecordKind),
    /// REM removed this many records.
    Removed(usize),
    /// PRINT rendered one line per stored record.
    Printed(Vec<String>),
    /// The command was skipped.
    Rejected(CommandError),
}

impl Outcome {
    /// Transcript lines for this outcome.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Outcome::Added(_) => vec![],
            Outcome::Removed(count) => vec![format!("Removed records: {count}")],
            Outcome::Printed(lines) => lines.clone(),
            Outcome::Rejected(err) => vec![format!("Error: {err}")],
        }
    }

    fn summary(&self) -> String {
        match self {
            Outcome::Added(kind) => format!("added {kind}"),
            Outcome::Removed(count) => format!("removed {count}"),
            Outcome::Printed(lines) => format!("printed {}", lines.len()),
            Outcome::Rejected(err) => format!("rejected: {err}"),
        }
    }
}

/// Owner of the record collection.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    records: Vec<Record>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Execute one parsed command.
    pub fn execute(&mut self, command: &Command) -> Outcome {
        match command {
            Command::Add { args } => self
                .add_record(args)
                .map_or_else(Outcome::Rejected, Outcome::Added),
            Command::Rem {
                condition: Some(raw),
            } => self
                .remove_where(raw)
                .map_or_else(Outcome::Rejected, Outcome::Removed),
            Command::Rem { condition: None } => {
                warn!(command = "REM", "missing condition");
                Outcome::Rejected(CommandError::MissingCondition)
            }
            Command::Print => Outcome::Printed(self.print_lines()),
        }
    }

    /// ADD from raw argument tokens.
    ///
    /// Returns the kind of the appended record.
    pub fn add<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<RecordKind> {
        self.add_record(&parse_args(tokens))
    }

    /// REM with a condition token.
    ///
    /// Returns the number of records removed.
    pub fn remove(&mut self, condition: &str) -> Result<usize> {
        self.remove_where(condition)
    }

    /// One rendered line per stored record.
    pub fn print_lines(&self) -> Vec<String> {
        self.records.iter().map(Record::to_string).collect()
    }

    fn add_record(&mut self, args: &Args) -> Result<RecordKind> {
        match build_record(args) {
            Ok(record) => {
                let kind = record.kind();
                self.records.push(record);
                debug!(kind = %kind, records = self.records.len(), "record added");
                Ok(kind)
            }
            Err(err) => {
                warn!(command = "ADD", error = %err, "command rejected");
                Err(err)
            }
        }
    }

    fn remove_where(&mut self, raw: &str) -> Result<usize> {
        let condition = parse_condition(raw).inspect_err(|err| {
            warn!(command = "REM", error = %err, "command rejected");
        })?;
        let removed = remove_matching(&mut self.records, &condition);
        debug!(condition = %condition, removed, records = self.records.len(), "records removed");
        Ok(removed)
    }
}

/// Summary of a script run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptReport {
    /// Transcript lines: PRINT output, removal counts and diagnostics.
    pub output: Vec<String>,
    /// Recognized commands executed.
    pub commands: usize,
    pub added: usize,
    pub removed: usize,
    /// Commands skipped because of a diagnostic.
    pub rejected: usize,
    /// Records left in the collection after the last command.
    pub final_count: usize,
}

impl ScriptReport {
    /// Transcript as newline-joined text.
    pub fn output_text(&self) -> String {
        self.output.join("\n")
    }

    fn record(&mut self, outcome: &Outcome) {
        self.commands += 1;
        match outcome {
            Outcome::Added(_) => self.added += 1,
            Outcome::Removed(count) => self.removed += count,
            Outcome::Printed(_) => {}
            Outcome::Rejected(_) => self.rejected += 1,
        }
        self.output.extend(outcome.lines());
    }
}

impl Interpreter {
    /// Run every command of a script against this interpreter.
    pub fn run_script(&mut self, text: &str) -> ScriptReport {
        self.run(text, None)
    }

    /// Run a script and capture a per-command trace.
    pub fn run_script_traced(&mut self, text: &str) -> (ScriptReport, ScriptTrace) {
        let mut trace = ScriptTrace::new();
        let report = self.run(text, Some(&mut trace));
        (report, trace)
    }

    fn run(&mut self, text: &str, mut trace: Option<&mut ScriptTrace>) -> ScriptReport {
        let commands = parse_commands(text);
        info!(commands = commands.len(), "running script");

        let mut report = ScriptReport::default();
        for (line_number, command) in &commands {
            let records_before = self.records.len();
            let outcome = self.execute(command);

            if let Some(trace) = trace.as_deref_mut() {
                trace.push(StepTrace {
                    line_number: *line_number,
                    command: command.name().to_string(),
                    records_before,
                    records_after: self.records.len(),
                    summary: outcome.summary(),
                });
            }
            report.record(&outcome);
        }
        report.final_count = self.records.len();

        info!(
            commands = report.commands,
            added = report.added,
            removed = report.removed,
            rejected = report.rejected,
            records = report.final_count,
            "script finished"
        );
        report
    }
}

/// Run a script on a fresh interpreter.
pub fn run_script(text: &str) -> ScriptReport {
    Interpreter::new().run_script(text)
}

/// Run a script on a fresh interpreter with tracing.
pub fn run_script_traced(text: &str) -> (ScriptReport, ScriptTrace) {
    Interpreter::new().run_script_traced(text)
}
