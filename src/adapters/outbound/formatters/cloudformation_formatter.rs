use crate::ports::outbound::TemplateFormatter;
use crate::shared::Result;
use crate::stack_definition::domain::SynthesizedStack;
use anyhow::Context;

/// CloudFormationJsonFormatter adapter emitting the template as pretty JSON
///
/// Resources keep declaration order, so two runs with the same options are
/// byte-identical.
pub struct CloudFormationJsonFormatter;

impl CloudFormationJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CloudFormationJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateFormatter for CloudFormationJsonFormatter {
    fn format(&self, stack: &SynthesizedStack) -> Result<String> {
        let mut rendered = serde_json::to_string_pretty(stack.template()).with_context(|| {
            format!(
                "Failed to serialize template for stack {} as JSON",
                stack.stack_name()
            )
        })?;
        rendered.push('\n');
        Ok(rendered)
    }
}

/// CloudFormationYamlFormatter adapter emitting the same document as YAML
pub struct CloudFormationYamlFormatter;

impl CloudFormationYamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CloudFormationYamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateFormatter for CloudFormationYamlFormatter {
    fn format(&self, stack: &SynthesizedStack) -> Result<String> {
        serde_yaml_ng::to_string(stack.template()).with_context(|| {
            format!(
                "Failed to serialize template for stack {} as YAML",
                stack.stack_name()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack_definition::domain::StackName;
    use crate::stack_definition::policies::StackVariant;
    use crate::stack_definition::services::StackBuilder;

    fn synthesize(variant: StackVariant) -> SynthesizedStack {
        StackBuilder::new(StackName::new("web-ami").unwrap(), variant.options())
            .build()
            .unwrap()
    }

    #[test]
    fn test_json_output_structure() {
        let output = CloudFormationJsonFormatter::new()
            .format(&synthesize(StackVariant::Full))
            .unwrap();
        assert!(output.ends_with('\n'));

        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["AWSTemplateFormatVersion"], "2010-09-09");
        assert_eq!(
            json["Resources"]["WebServerPipeline"]["Type"],
            "AWS::ImageBuilder::ImagePipeline"
        );
        assert_eq!(
            json["Outputs"]["ImagePipelineArn"]["Value"]["Fn::GetAtt"][0],
            "WebServerPipeline"
        );
    }

    #[test]
    fn test_json_resources_in_declaration_order() {
        let output = CloudFormationJsonFormatter::new()
            .format(&synthesize(StackVariant::Full))
            .unwrap();
        let vpc = output.find("\"ImageBuilderVpc\"").unwrap();
        let recipe = output.find("\"WebServerRecipe\":").unwrap();
        let pipeline = output.find("\"WebServerPipeline\":").unwrap();
        assert!(vpc < recipe && recipe < pipeline);
    }

    #[test]
    fn test_yaml_matches_json_document() {
        let stack = synthesize(StackVariant::Reduced);
        let yaml = CloudFormationYamlFormatter::new().format(&stack).unwrap();
        let json = CloudFormationJsonFormatter::new().format(&stack).unwrap();

        let from_yaml: serde_json::Value = serde_yaml_ng::from_str(&yaml).unwrap();
        let from_json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(from_yaml, from_json);
        assert_eq!(
            from_yaml["Resources"]["WebServerPipeline"]["Properties"]["Schedule"]
                ["ScheduleExpression"],
            "0 0 1 * *"
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let formatter = CloudFormationYamlFormatter::new();
        let first = formatter.format(&synthesize(StackVariant::Full)).unwrap();
        let second = formatter.format(&synthesize(StackVariant::Full)).unwrap();
        assert_eq!(first, second);
    }
}
