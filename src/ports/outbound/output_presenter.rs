use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the destination (stdout, file) of the rendered
/// lint report.
pub trait OutputPresenter {
    /// Writes the rendered report to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is a symbolic link or its directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
