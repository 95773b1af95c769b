use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow deployment scripts to tell a bad invocation apart
/// from a synthesis failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Template synthesized (or validated in dry-run mode)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing stack name, invalid options, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for stack synthesis.
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("Stack name is not set\n\n💡 Hint: Set the BASE_STACK_NAME environment variable or pass --stack-name <NAME>")]
    MissingStackName,

    #[error("Invalid stack name: {name}\nReason: {reason}\n\n💡 Hint: Stack names start with a letter and contain only letters, digits and hyphens (max 128 characters)")]
    InvalidStackName { name: String, reason: String },

    #[error("Invalid logical ID: {id}\nReason: {reason}")]
    InvalidLogicalId { id: String, reason: String },

    #[error("Duplicate logical ID: {id}")]
    DuplicateLogicalId { id: String },

    #[error("Resource {from} references {target}, which is not declared in the template")]
    DanglingReference { from: String, target: String },

    #[error("Resource {from} references {target} before it is declared")]
    ForwardReference { from: String, target: String },

    #[error("Invalid schedule expression: '{expression}'\nReason: {reason}\n\n💡 Hint: Use a five-field cron string such as \"0 0 1 * *\", or cron(...)")]
    InvalidSchedule { expression: String, reason: String },

    #[error("Invalid CIDR block: {cidr}\nReason: {reason}")]
    InvalidCidr { cidr: String, reason: String },

    #[error("Parent image {parent_image} is pinned to region {image_region}, but the target region is {target_region}\n\n💡 Hint: Set parent_image to the equivalent image in {target_region}")]
    RegionMismatch {
        parent_image: String,
        image_region: String,
        target_region: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns and option values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_missing_stack_name_display() {
        let display = format!("{}", SynthError::MissingStackName);
        assert!(display.contains("Stack name is not set"));
        assert!(display.contains("BASE_STACK_NAME"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_dangling_reference_display() {
        let error = SynthError::DanglingReference {
            from: "WebServerPipeline".to_string(),
            target: "MissingRecipe".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("WebServerPipeline"));
        assert!(display.contains("MissingRecipe"));
        assert!(display.contains("not declared"));
    }

    #[test]
    fn test_region_mismatch_display() {
        let error = SynthError::RegionMismatch {
            parent_image: "arn:aws:imagebuilder:ap-northeast-1:aws:image/x/1".to_string(),
            image_region: "ap-northeast-1".to_string(),
            target_region: "us-east-1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("ap-northeast-1"));
        assert!(display.contains("us-east-1"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = SynthError::FileWriteError {
            path: PathBuf::from("/test/template.json"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/template.json"));
        assert!(display.contains("Permission denied"));
    }
}
