use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writing to stderr keeps stdout free for the name of the saved file.
pub struct StderrProgressReporter {
    quiet: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    /// A reporter that prints nothing
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}", message);
        }
    }

    fn report_completion(&self, message: &str) {
        if !self.quiet {
            eprintln!();
            eprintln!("{}", message);
        }
    }
}
