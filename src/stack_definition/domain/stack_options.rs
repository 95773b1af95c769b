use crate::shared::error::SynthError;
use crate::shared::Result;
use crate::stack_definition::domain::{NetworkLayout, ParentImage, ScheduleExpression};

/// Instance type used for the ephemeral build instance unless overridden
pub const DEFAULT_INSTANCE_TYPE: &str = "t3.micro";

/// Everything that distinguishes one declaration of the stack from another
///
/// The builder reads nothing else: no environment, no globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackOptions {
    /// Attach the Apache installer after the Nginx one
    pub include_apache_component: bool,
    /// Declare the ssm / ssmmessages / ec2messages interface endpoints
    pub include_endpoints: bool,
    /// Attach `AmazonSSMManagedInstanceCore` to the build role
    pub attach_ssm_policy: bool,
    /// Emit `TerminateInstanceOnFailure: true`; omitted otherwise
    pub terminate_on_failure: bool,
    /// `None` leaves the pipeline manually triggered
    pub schedule_expression: Option<ScheduleExpression>,
    /// Surface the pipeline ARN as the `ImagePipelineArn` output
    pub expose_pipeline_arn: bool,
    pub instance_types: Vec<String>,
    pub parent_image: ParentImage,
    pub network: NetworkLayout,
}

impl StackOptions {
    pub fn validate(&self) -> Result<()> {
        if self.instance_types.is_empty() {
            return Err(SynthError::Validation {
                message: "At least one instance type is required".to_string(),
            }
            .into());
        }
        if let Some(blank) = self.instance_types.iter().find(|t| t.trim().is_empty()) {
            return Err(SynthError::Validation {
                message: format!("Instance type '{}' must not be blank", blank),
            }
            .into());
        }
        self.network.public_subnet()?;
        Ok(())
    }
}

impl Default for StackOptions {
    fn default() -> Self {
        Self {
            include_apache_component: false,
            include_endpoints: false,
            attach_ssm_policy: false,
            terminate_on_failure: false,
            schedule_expression: None,
            expose_pipeline_arn: false,
            instance_types: vec![DEFAULT_INSTANCE_TYPE.to_string()],
            parent_image: ParentImage::default(),
            network: NetworkLayout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_valid() {
        let options = StackOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.instance_types, vec!["t3.micro"]);
        assert!(options.schedule_expression.is_none());
    }

    #[test]
    fn test_validate_requires_instance_type() {
        let options = StackOptions {
            instance_types: vec![],
            ..StackOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("At least one instance type"));
    }

    #[test]
    fn test_validate_rejects_blank_instance_type() {
        let options = StackOptions {
            instance_types: vec!["t3.micro".to_string(), " ".to_string()],
            ..StackOptions::default()
        };
        assert!(options.validate().is_err());
    }
}
