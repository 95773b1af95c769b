use crate::ports::outbound::TemplateFormatter;
use crate::shared::Result;
use crate::stack_definition::domain::{Expr, Output, Resource, SynthesizedStack};
use crate::stack_definition::services::ReferenceValidator;

/// Markdown table header for the resource inventory
const RESOURCE_TABLE_HEADER: &str = "| # | Logical ID | Type | References |\n";

/// Markdown table separator line for the resource inventory
const RESOURCE_TABLE_SEPARATOR: &str = "|---|------------|------|------------|\n";

const OUTPUT_TABLE_HEADER: &str = "| Output | Value | Description |\n";
const OUTPUT_TABLE_SEPARATOR: &str = "|--------|-------|-------------|\n";

/// MarkdownFormatter adapter for a human-readable stack summary
///
/// Lists every resource in declaration order with the logical IDs it
/// references, followed by the stack outputs.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Short, single-line rendering of an expression for tables
    fn describe_expr(expr: &Expr) -> String {
        match expr {
            Expr::Literal(value) => value.clone(),
            Expr::Ref(id) => format!("Ref {}", id),
            Expr::Pseudo(param) => format!("Ref {}", param.as_str()),
            Expr::GetAtt {
                resource,
                attribute,
            } => format!("{}.{}", resource, attribute),
            Expr::Join { delimiter, parts } => parts
                .iter()
                .map(Self::describe_expr)
                .collect::<Vec<_>>()
                .join(delimiter),
            Expr::Select { index, list } => {
                format!("{}[{}]", Self::describe_expr(list), index)
            }
            Expr::AvailabilityZones => "AZs".to_string(),
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, stack: &SynthesizedStack) {
        output.push_str(&format!("# Stack: {}\n\n", stack.stack_name()));
        output.push_str(&format!("{}\n\n", stack.template().description()));
        output.push_str(&format!(
            "- Resources: {}\n- Outputs: {}\n\n",
            stack.template().resources().len(),
            stack.template().outputs().len()
        ));
    }

    fn render_resources(&self, output: &mut String, resources: &[Resource]) -> Result<()> {
        output.push_str("## Resources\n\n");
        output.push_str("Declared in dependency order.\n\n");
        output.push_str(RESOURCE_TABLE_HEADER);
        output.push_str(RESOURCE_TABLE_SEPARATOR);

        for (index, resource) in resources.iter().enumerate() {
            let references = ReferenceValidator::references_of(resource)?;
            let references = if references.is_empty() {
                "-".to_string()
            } else {
                references.join(", ")
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                index + 1,
                Self::escape_markdown_table_cell(resource.logical_id().as_str()),
                resource.resource_type(),
                Self::escape_markdown_table_cell(&references)
            ));
        }
        output.push('\n');
        Ok(())
    }

    fn render_outputs(&self, output: &mut String, outputs: &[Output]) {
        output.push_str("## Outputs\n\n");
        if outputs.is_empty() {
            output.push_str("No outputs are exported.\n");
            return;
        }

        output.push_str(OUTPUT_TABLE_HEADER);
        output.push_str(OUTPUT_TABLE_SEPARATOR);
        for item in outputs {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(item.logical_id().as_str()),
                Self::escape_markdown_table_cell(&Self::describe_expr(item.value())),
                Self::escape_markdown_table_cell(item.description().unwrap_or(""))
            ));
        }
    }
}

impl TemplateFormatter for MarkdownFormatter {
    fn format(&self, stack: &SynthesizedStack) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, stack);
        self.render_resources(&mut output, stack.template().resources())?;
        self.render_outputs(&mut output, stack.template().outputs());
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack_definition::domain::{LogicalId, StackName};
    use crate::stack_definition::policies::StackVariant;
    use crate::stack_definition::services::StackBuilder;

    fn render(variant: StackVariant) -> String {
        let stack = StackBuilder::new(StackName::new("web-ami").unwrap(), variant.options())
            .build()
            .unwrap();
        MarkdownFormatter::new().format(&stack).unwrap()
    }

    #[test]
    fn test_full_summary() {
        let output = render(StackVariant::Full);
        assert!(output.starts_with("# Stack: web-ami\n"));
        assert!(output.contains("- Resources: 18\n"));
        assert!(output.contains(
            "| 13 | WebServerRecipe | AWS::ImageBuilder::ImageRecipe | NginxComponent, ApacheComponent |"
        ));
        assert!(output.contains("| ImagePipelineArn | WebServerPipeline.Arn |"));
    }

    #[test]
    fn test_depends_on_listed_as_reference() {
        let output = render(StackVariant::Reduced);
        assert!(output.contains(
            "| ImageBuilderVpcPublicSubnet1DefaultRoute | AWS::EC2::Route | ImageBuilderVpcIGW, ImageBuilderVpcPublicSubnet1RouteTable, ImageBuilderVpcVPCGW |"
        ));
    }

    #[test]
    fn test_reduced_has_no_outputs() {
        let output = render(StackVariant::Reduced);
        assert!(output.contains("- Outputs: 0\n"));
        assert!(output.contains("No outputs are exported."));
    }

    #[test]
    fn test_describe_expr() {
        assert_eq!(
            MarkdownFormatter::describe_expr(&Expr::regional_service("ssm")),
            "com.amazonaws.Ref AWS::Region.ssm"
        );
        assert_eq!(
            MarkdownFormatter::describe_expr(&Expr::reference(
                &LogicalId::new("ImageBuilderVpc").unwrap()
            )),
            "Ref ImageBuilderVpc"
        );
        assert_eq!(
            MarkdownFormatter::describe_expr(&Expr::first_availability_zone()),
            "AZs[0]"
        );
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }
}
