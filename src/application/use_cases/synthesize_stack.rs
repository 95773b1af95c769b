use crate::application::dto::{SynthRequest, SynthResponse};
use crate::ports::outbound::ProgressReporter;
use crate::shared::error::SynthError;
use crate::shared::Result;
use crate::stack_definition::domain::{StackName, StackOptions};
use crate::stack_definition::services::StackBuilder;

/// SynthesizeStackUseCase - Core use case for stack synthesis
///
/// Orchestrates name resolution, option checks, declaration and reference
/// validation. Rendering and presentation are left to the caller.
///
/// # Type Parameters
/// * `PR` - ProgressReporter implementation
pub struct SynthesizeStackUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> SynthesizeStackUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Executes the synthesis use case
    ///
    /// # Errors
    /// Fails with [`SynthError::MissingStackName`] before any resource is
    /// declared when the request carries no usable stack name.
    pub fn execute(&self, request: SynthRequest) -> Result<SynthResponse> {
        // Step 1: Resolve the stack name
        let stack_name = match request.stack_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => StackName::new(name)?,
            _ => return Err(SynthError::MissingStackName.into()),
        };

        self.progress_reporter
            .report(&format!("🏗️  Synthesizing stack: {}", stack_name));

        // Step 2: Option checks that need context beyond the options
        if let Some(region) = request.target_region.as_deref() {
            request.options.parent_image.ensure_usable_in(region)?;
        }
        let warnings = self.collect_warnings(&request.options);
        for warning in &warnings {
            self.progress_reporter
                .report_warning(&format!("⚠️  Warning: {}", warning));
        }

        // Step 3: Declare, then validate references one resource at a time
        let stack = StackBuilder::new(stack_name, request.options).build_with(
            |current, total, resource| {
                self.progress_reporter.report_progress(
                    current,
                    total,
                    Some(resource.logical_id().as_str()),
                );
            },
        )?;

        self.progress_reporter.report_completion(&format!(
            "✅ Declared {} resource(s) and {} output(s); all references resolve",
            stack.template().resources().len(),
            stack.template().outputs().len()
        ));

        Ok(SynthResponse::new(stack, warnings))
    }

    fn collect_warnings(&self, options: &StackOptions) -> Vec<String> {
        let mut warnings = Vec::new();
        if options.include_apache_component {
            warnings.push(
                "Both Nginx and Apache are installed and enabled; they will compete for port 80 on the built image"
                    .to_string(),
            );
        }
        if options.include_endpoints && !options.attach_ssm_policy {
            warnings.push(
                "Session management endpoints are declared but the build role lacks AmazonSSMManagedInstanceCore"
                    .to_string(),
            );
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack_definition::domain::ParentImage;
    use crate::stack_definition::policies::StackVariant;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for &RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
            self.messages
                .borrow_mut()
                .push(format!("progress {}/{}", current, total));
        }

        fn report_warning(&self, message: &str) {
            self.messages
                .borrow_mut()
                .push(format!("warning: {}", message));
        }

        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(format!("error: {}", message));
        }

        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(format!("done: {}", message));
        }
    }

    fn request(name: Option<&str>, variant: StackVariant) -> SynthRequest {
        SynthRequest::new(name.map(String::from), variant.options())
    }

    #[test]
    fn test_missing_stack_name_fails_before_reporting() {
        let reporter = RecordingReporter::default();
        let use_case = SynthesizeStackUseCase::new(&reporter);

        for name in [None, Some(""), Some("   ")] {
            let err = use_case
                .execute(request(name, StackVariant::Full))
                .unwrap_err();
            assert!(matches!(
                err.downcast_ref::<SynthError>(),
                Some(SynthError::MissingStackName)
            ));
        }
        assert!(reporter.messages.borrow().is_empty());
    }

    #[test]
    fn test_invalid_stack_name() {
        let reporter = RecordingReporter::default();
        let result =
            SynthesizeStackUseCase::new(&reporter).execute(request(Some("1bad"), StackVariant::Full));
        assert!(matches!(
            result.unwrap_err().downcast_ref::<SynthError>(),
            Some(SynthError::InvalidStackName { .. })
        ));
    }

    #[test]
    fn test_full_variant_reports_progress_and_warning() {
        let reporter = RecordingReporter::default();
        let response = SynthesizeStackUseCase::new(&reporter)
            .execute(request(Some("web-ami"), StackVariant::Full))
            .unwrap();

        assert_eq!(response.resource_count(), 18);
        assert_eq!(response.warnings.len(), 1);
        assert!(response.warnings[0].contains("Apache"));

        let messages = reporter.messages.borrow();
        assert_eq!(messages[0], "🏗️  Synthesizing stack: web-ami");
        assert!(messages[1].starts_with("warning: "));
        let progress: Vec<&String> = messages
            .iter()
            .filter(|m| m.starts_with("progress "))
            .collect();
        assert_eq!(progress.len(), 18);
        assert_eq!(progress[0], "progress 1/18");
        assert_eq!(progress[17], "progress 18/18");
        assert!(messages.last().unwrap().starts_with("done: "));
    }

    #[test]
    fn test_reduced_variant_has_no_warnings() {
        let reporter = RecordingReporter::default();
        let response = SynthesizeStackUseCase::new(&reporter)
            .execute(request(Some("web-ami"), StackVariant::Reduced))
            .unwrap();

        assert_eq!(response.resource_count(), 14);
        assert!(response.warnings.is_empty());
        assert_eq!(response.stack.stack_name().as_str(), "web-ami");
    }

    #[test]
    fn test_stack_name_is_trimmed() {
        let reporter = RecordingReporter::default();
        let response = SynthesizeStackUseCase::new(&reporter)
            .execute(request(Some("  web-ami "), StackVariant::Reduced))
            .unwrap();
        assert_eq!(response.stack.stack_name().as_str(), "web-ami");
    }

    #[test]
    fn test_region_mismatch_is_rejected() {
        let reporter = RecordingReporter::default();
        let result = SynthesizeStackUseCase::new(&reporter).execute(
            request(Some("web-ami"), StackVariant::Reduced)
                .with_target_region(Some("us-east-1".to_string())),
        );
        assert!(matches!(
            result.unwrap_err().downcast_ref::<SynthError>(),
            Some(SynthError::RegionMismatch { .. })
        ));
    }

    #[test]
    fn test_ami_parent_image_skips_region_check() {
        let reporter = RecordingReporter::default();
        let mut req = request(Some("web-ami"), StackVariant::Reduced)
            .with_target_region(Some("us-east-1".to_string()));
        req.options.parent_image = ParentImage::new("ami-0123456789abcdef0").unwrap();

        assert!(SynthesizeStackUseCase::new(&reporter).execute(req).is_ok());
    }

    #[test]
    fn test_endpoints_without_ssm_policy_warns() {
        let reporter = RecordingReporter::default();
        let mut req = request(Some("web-ami"), StackVariant::Reduced);
        req.options.include_endpoints = true;

        let response = SynthesizeStackUseCase::new(&reporter).execute(req).unwrap();
        assert!(response
            .warnings
            .iter()
            .any(|w| w.contains("AmazonSSMManagedInstanceCore")));
    }
}
