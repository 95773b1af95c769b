use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered template is presented.
pub trait OutputPresenter {
    /// Presents the rendered template to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered template
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The target is a symbolic link or its parent directory is missing
    fn present(&self, content: &str) -> Result<()>;
}
