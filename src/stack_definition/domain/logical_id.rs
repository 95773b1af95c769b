use crate::shared::error::SynthError;
use crate::shared::Result;

/// CloudFormation limit on logical ID length
const MAX_LOGICAL_ID_LENGTH: usize = 255;

/// NewType wrapper for a CloudFormation logical ID
///
/// Logical IDs are alphanumeric and unique within a template. They are the
/// only handle resources use to reference each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalId(String);

impl LogicalId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.is_empty() {
            return Err(SynthError::InvalidLogicalId {
                id,
                reason: "Logical ID cannot be empty".to_string(),
            }
            .into());
        }

        if id.len() > MAX_LOGICAL_ID_LENGTH {
            return Err(SynthError::InvalidLogicalId {
                reason: format!(
                    "Logical ID is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_LOGICAL_ID_LENGTH
                ),
                id,
            }
            .into());
        }

        if !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(SynthError::InvalidLogicalId {
                id,
                reason: "Only ASCII letters and digits are allowed".to_string(),
            }
            .into());
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LogicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for LogicalId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_id_valid() {
        let id = LogicalId::new("ImageBuilderVpc").unwrap();
        assert_eq!(id.as_str(), "ImageBuilderVpc");
        assert_eq!(id.to_string(), "ImageBuilderVpc");
    }

    #[test]
    fn test_logical_id_empty() {
        let result = LogicalId::new("");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_logical_id_rejects_separators() {
        assert!(LogicalId::new("Image-Builder").is_err());
        assert!(LogicalId::new("Image_Builder").is_err());
        assert!(LogicalId::new("Image Builder").is_err());
        assert!(LogicalId::new("Image/Builder").is_err());
    }

    #[test]
    fn test_logical_id_too_long() {
        let long = "A".repeat(MAX_LOGICAL_ID_LENGTH + 1);
        let result = LogicalId::new(long);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too long"));
    }

    #[test]
    fn test_logical_id_max_length() {
        let max = "A".repeat(MAX_LOGICAL_ID_LENGTH);
        assert!(LogicalId::new(max).is_ok());
    }
}
