use crate::shared::error::SynthError;
use crate::shared::Result;

/// CloudFormation limit on stack name length
const MAX_STACK_NAME_LENGTH: usize = 128;

/// NewType wrapper for a CloudFormation stack name with validation
///
/// Stack names begin with a letter and contain only ASCII letters, digits
/// and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackName(String);

impl StackName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(SynthError::MissingStackName.into());
        }

        if name.len() > MAX_STACK_NAME_LENGTH {
            return Err(SynthError::InvalidStackName {
                reason: format!(
                    "Stack name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_STACK_NAME_LENGTH
                ),
                name,
            }
            .into());
        }

        let starts_with_letter = name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter {
            return Err(SynthError::InvalidStackName {
                name,
                reason: "Stack name must start with a letter".to_string(),
            }
            .into());
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(SynthError::InvalidStackName {
                name,
                reason: "Stack name contains invalid characters".to_string(),
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StackName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
