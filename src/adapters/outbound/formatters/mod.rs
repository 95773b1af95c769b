/// Formatter adapters for the supported template encodings
mod cloudformation_formatter;
mod markdown_formatter;

pub use cloudformation_formatter::{CloudFormationJsonFormatter, CloudFormationYamlFormatter};
pub use markdown_formatter::MarkdownFormatter;
