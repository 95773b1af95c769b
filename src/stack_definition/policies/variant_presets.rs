use crate::stack_definition::domain::{ScheduleExpression, StackOptions};

/// The two stack shapes the project ships
///
/// `Full` builds on demand with both web server installers, session
/// management endpoints and cleanup on failure. `Reduced` installs Nginx only
/// and rebuilds monthly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackVariant {
    #[default]
    Full,
    Reduced,
}

impl StackVariant {
    /// Option preset for this variant
    pub fn options(self) -> StackOptions {
        match self {
            StackVariant::Full => StackOptions {
                include_apache_component: true,
                include_endpoints: true,
                attach_ssm_policy: true,
                terminate_on_failure: true,
                schedule_expression: None,
                expose_pipeline_arn: true,
                ..StackOptions::default()
            },
            StackVariant::Reduced => StackOptions {
                include_apache_component: false,
                include_endpoints: false,
                attach_ssm_policy: false,
                terminate_on_failure: false,
                schedule_expression: Some(ScheduleExpression::monthly()),
                expose_pipeline_arn: false,
                ..StackOptions::default()
            },
        }
    }
}

impl std::str::FromStr for StackVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(StackVariant::Full),
            "reduced" => Ok(StackVariant::Reduced),
            _ => Err(format!(
                "Invalid variant: {}. Please specify 'full' or 'reduced'",
                s
            )),
        }
    }
}

impl std::fmt::Display for StackVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackVariant::Full => write!(f, "full"),
            StackVariant::Reduced => write!(f, "reduced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_full_preset() {
        let options = StackVariant::Full.options();
        assert!(options.include_apache_component);
        assert!(options.include_endpoints);
        assert!(options.attach_ssm_policy);
        assert!(options.terminate_on_failure);
        assert!(options.schedule_expression.is_none());
        assert!(options.expose_pipeline_arn);
    }

    #[test]
    fn test_reduced_preset() {
        let options = StackVariant::Reduced.options();
        assert!(!options.include_apache_component);
        assert!(!options.include_endpoints);
        assert!(!options.attach_ssm_policy);
        assert!(!options.terminate_on_failure);
        assert_eq!(
            options.schedule_expression.as_ref().map(|s| s.as_str()),
            Some("0 0 1 * *")
        );
        assert!(!options.expose_pipeline_arn);
    }

    #[test]
    fn test_presets_share_build_environment() {
        let full = StackVariant::Full.options();
        let reduced = StackVariant::Reduced.options();
        assert_eq!(full.instance_types, reduced.instance_types);
        assert_eq!(full.parent_image, reduced.parent_image);
        assert_eq!(full.network, reduced.network);
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!(StackVariant::from_str("full").unwrap(), StackVariant::Full);
        assert_eq!(
            StackVariant::from_str("REDUCED").unwrap(),
            StackVariant::Reduced
        );
        let err = StackVariant::from_str("minimal").unwrap_err();
        assert!(err.contains("Invalid variant"));
        assert!(err.contains("minimal"));
    }

    #[test]
    fn test_variant_display() {
        assert_eq!(StackVariant::Full.to_string(), "full");
        assert_eq!(StackVariant::Reduced.to_string(), "reduced");
        assert_eq!(StackVariant::default(), StackVariant::Full);
    }
}
