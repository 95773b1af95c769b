/// ProgressReporter port for user feedback during synthesis
///
/// Status lines go to a side channel (stderr in the CLI) so the rendered
/// template on stdout stays machine-readable.
pub trait ProgressReporter {
    /// Reports a status line
    fn report(&self, message: &str);

    /// Reports progress through the declared resources
    ///
    /// # Arguments
    /// * `current` - Number of resources processed so far
    /// * `total` - Number of resources in the template
    /// * `message` - Optional detail, usually the logical ID
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning that does not stop synthesis
    fn report_warning(&self, message: &str);

    /// Reports an error or failure message
    fn report_error(&self, message: &str);

    /// Reports completion of synthesis
    fn report_completion(&self, message: &str);
}
