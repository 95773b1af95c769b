use crate::stack_definition::domain::StackOptions;

/// SynthRequest - Input DTO for the synthesis use case
///
/// The stack name stays raw here: an absent or blank name is reported by
/// the use case before anything is declared.
#[derive(Debug, Clone)]
pub struct SynthRequest {
    /// Stack name as given on the command line or in `BASE_STACK_NAME`
    pub stack_name: Option<String>,
    /// Fully resolved options (preset, config file and CLI overrides applied)
    pub options: StackOptions,
    /// Region the stack will be deployed to, when known
    pub target_region: Option<String>,
}

impl SynthRequest {
    pub fn new(stack_name: Option<String>, options: StackOptions) -> Self {
        Self {
            stack_name,
            options,
            target_region: None,
        }
    }

    pub fn with_target_region(mut self, region: Option<String>) -> Self {
        self.target_region = region;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_has_no_region() {
        let request = SynthRequest::new(Some("stack".to_string()), StackOptions::default());
        assert_eq!(request.stack_name.as_deref(), Some("stack"));
        assert!(request.target_region.is_none());
    }

    #[test]
    fn test_with_target_region() {
        let request = SynthRequest::new(None, StackOptions::default())
            .with_target_region(Some("us-east-1".to_string()));
        assert_eq!(request.target_region.as_deref(), Some("us-east-1"));
    }
}
