/// ProgressReporter port for user-facing progress
///
/// Output goes to stderr so the report on stdout stays machine-readable.
pub trait ProgressReporter {
    /// Reports a one-off status line
    fn report(&self, message: &str);

    /// Reports how many dependency evaluations have finished
    ///
    /// # Arguments
    /// * `current` - Evaluations finished so far
    /// * `total` - Evaluations scheduled
    /// * `message` - Optional detail, typically the import path just finished
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports completion of the run and clears any progress display
    fn report_completion(&self, message: &str);
}
