//! Accumulates consistency violations, grouped by the group being checked.
//!
//! Nothing is raised for a violation: every check reports through a
//! [`Diagnostics`] collector and keeps going. The verdict of a run is simply
//! whether any error was recorded.

use log::debug;

/// Destination of the human-readable diagnostic lines.
pub trait DiagnosticSink {
    fn emit(&mut self, line: &str);
}

/// Prints every line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every line in memory, for tests and for callers that render the
/// report themselves.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl DiagnosticSink for MemorySink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// One recorded violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Group that was being checked, `None` if no group was started yet
    pub group: Option<u32>,
    pub message: String,
}

#[derive(Debug)]
pub struct Diagnostics<S: DiagnosticSink = StdoutSink> {
    sink: S,
    current_group: Option<u32>,
    header_printed: bool,
    errors: Vec<Diagnostic>,
}

impl Diagnostics<StdoutSink> {
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }
}

impl Default for Diagnostics<StdoutSink> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Diagnostics<MemorySink> {
    pub fn in_memory() -> Self {
        Self::new(MemorySink::default())
    }

    /// Every line emitted so far, headers included.
    pub fn lines(&self) -> &[String] {
        &self.sink.lines
    }
}

impl<S: DiagnosticSink> Diagnostics<S> {
    pub fn new(sink: S) -> Self {
        Diagnostics {
            sink,
            current_group: None,
            // No header before the first group is started.
            header_printed: true,
            errors: Vec::new(),
        }
    }

    /// Switch to a new group. Its header is only printed once an error is
    /// reported for it.
    pub fn start_group(&mut self, number: u32) {
        self.current_group = Some(number);
        self.header_printed = false;
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("group {:?}: {}", self.current_group, message);

        if !self.header_printed {
            if let Some(number) = self.current_group {
                self.sink
                    .emit(&format!("===== Group #{:04} ==========================", number));
            }
            self.header_printed = true;
        }
        self.sink.emit(&format!("ERR: {}", message));

        self.errors.push(Diagnostic {
            group: self.current_group,
            message,
        });
    }

    /// Emit an informational line. It does not affect the verdict.
    pub fn note(&mut self, message: &str) {
        self.sink.emit(message);
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Messages recorded for one group, in report order.
    pub fn messages_for(&self, number: u32) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|d| d.group == Some(number))
            .map(|d| d.message.as_str())
            .collect()
    }
}
