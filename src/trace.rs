//! Per-command execution trace.
//!
//! Captures how the record collection changed at each command of a script,
//! so a run can be inspected step by step.

/// Trace of one executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTrace {
    /// 1-based line number in the script.
    pub line_number: usize,
    /// Command word (`ADD`, `REM`, `PRINT`).
    pub command: String,
    /// Collection size before the command ran.
    pub records_before: usize,
    /// Collection size after the command ran.
    pub records_after: usize,
    /// Short outcome description, e.g. `added shift` or `removed 2`.
    pub summary: String,
}

/// Trace of a whole script run, one step per executed command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptTrace {
    pub steps: Vec<StepTrace>,
}

impl ScriptTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: StepTrace) {
        self.steps.push(step);
    }

    /// Render the trace as aligned text lines.
    pub fn render(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| {
                format!(
                    "{:>4}  {:<5}  {:>3} -> {:<3}  {}",
                    step.line_number,
                    step.command,
                    step.records_before,
                    step.records_after,
                    step.summary
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(line_number: usize, command: &str, before: usize, after: usize) -> StepTrace {
        StepTrace {
            line_number,
            command: command.to_string(),
            records_before: before,
            records_after: after,
            summary: String::new(),
        }
    }

    #[test]
    fn test_empty_trace() {
        let trace = ScriptTrace::new();
        assert!(trace.steps.is_empty());
        assert!(trace.render().is_empty());
    }

    #[test]
    fn test_render_one_line_per_step() {
        let mut trace = ScriptTrace::new();
        trace.push(step(1, "ADD", 0, 1));
        trace.push(StepTrace {
            summary: "removed 1".to_string(),
            ..step(3, "REM", 1, 0)
        });
        let lines = trace.render();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("ADD"));
        assert!(lines[1].contains("1 -> 0"));
        assert!(lines[1].ends_with("removed 1"));
    }
}
