use crate::shared::Result;
use crate::stack_definition::domain::SynthesizedStack;

/// TemplateFormatter port for rendering a synthesized stack
///
/// This port abstracts the output encoding (CloudFormation JSON, YAML,
/// Markdown summary) from the synthesis itself.
pub trait TemplateFormatter {
    /// Renders the synthesized stack
    ///
    /// # Arguments
    /// * `stack` - The stack name and its validated template
    ///
    /// # Returns
    /// The rendered document, ending with a newline
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, stack: &SynthesizedStack) -> Result<String>;
}
