//! Status output
//!
//! Every line a command prints goes through the [`Reporter`] trait, so the
//! operations in `crate::operations` stay free of terminal concerns and can
//! be tested with [`RecordingReporter`].

pub mod display;

use console::Style;

use crate::error::MetaError;

/// Sink for human-readable status lines
pub trait Reporter {
    /// Plain progress line
    fn info(&mut self, message: &str);

    /// Final line of a successful run
    fn success(&mut self, message: &str);

    /// Something suspicious that does not fail the run
    fn warning(&mut self, message: &str);

    /// Extra detail, only shown with `--verbose`
    fn detail(&mut self, message: &str);
}

/// Reporter printing to standard output
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    verbose: bool,
}

impl ConsoleReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{message}");
    }

    fn success(&mut self, message: &str) {
        println!(
            "{} {message}",
            Style::new().green().bold().apply_to("SUCCESS:")
        );
    }

    fn warning(&mut self, message: &str) {
        println!(
            "{} {message}",
            Style::new().yellow().bold().apply_to("WARNING:")
        );
    }

    fn detail(&mut self, message: &str) {
        if self.verbose {
            println!("  {}", Style::new().dim().apply_to(message));
        }
    }
}

/// Print a failed run as `<label>: <message>`, followed by the diagnostic help
pub fn report_error(label: &str, err: &MetaError) {
    use miette::Diagnostic;

    println!(
        "{} {err}",
        Style::new().red().bold().apply_to(format!("{label}:"))
    );
    if let Some(help) = err.help() {
        println!("  {} {help}", Style::new().bold().apply_to("help:"));
    }
}

/// Reporter collecting lines in memory, with the console prefixes applied
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordingReporter {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn info(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }

    fn success(&mut self, message: &str) {
        self.lines.push(format!("SUCCESS: {message}"));
    }

    fn warning(&mut self, message: &str) {
        self.lines.push(format!("WARNING: {message}"));
    }

    fn detail(&mut self, message: &str) {
        self.lines.push(format!("  {message}"));
    }
}
