/// ProgressReporter port for user-facing progress messages
///
/// Messages go to stderr so that stdout carries only the name of the file
/// written.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
