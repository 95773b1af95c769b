use crate::adapters::outbound::formatters::{
    CloudFormationJsonFormatter, CloudFormationYamlFormatter, MarkdownFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::TemplateFormatter;

/// Factory for creating template formatters
///
/// Selects the formatter adapter for an output format so `main` never names
/// a concrete adapter.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use imagebuilder_stack::application::dto::OutputFormat;
    /// use imagebuilder_stack::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Yaml);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn TemplateFormatter> {
        match format {
            OutputFormat::Json => Box::new(CloudFormationJsonFormatter::new()),
            OutputFormat::Yaml => Box::new(CloudFormationYamlFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use imagebuilder_stack::application::dto::OutputFormat;
    /// use imagebuilder_stack::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Rendering CloudFormation JSON template...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Rendering CloudFormation JSON template...",
            OutputFormat::Yaml => "📝 Rendering CloudFormation YAML template...",
            OutputFormat::Markdown => "📝 Rendering Markdown stack summary...",
        }
    }
}
