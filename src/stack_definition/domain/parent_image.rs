use crate::shared::error::SynthError;
use crate::shared::Result;

/// Amazon Linux 2023 (x86) image pinned in ap-northeast-1
pub const DEFAULT_PARENT_IMAGE: &str =
    "arn:aws:imagebuilder:ap-northeast-1:aws:image/amazon-linux-2023-x86/2023.10.10";

/// Base image reference for the recipe
///
/// Either an Image Builder image ARN (region-scoped) or an AMI ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentImage(String);

impl ParentImage {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into();
        let trimmed = reference.trim();

        if trimmed.starts_with("ami-") && trimmed.len() > 4 {
            return Ok(Self(trimmed.to_string()));
        }

        let parts: Vec<&str> = trimmed.splitn(6, ':').collect();
        let is_image_arn = parts.len() == 6
            && parts[0] == "arn"
            && parts[2] == "imagebuilder"
            && !parts[3].is_empty()
            && parts[5].starts_with("image/");
        if !is_image_arn {
            return Err(SynthError::Validation {
                message: format!(
                    "Parent image '{}' is neither an Image Builder image ARN nor an AMI ID",
                    reference
                ),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Region the reference is pinned to; `None` for AMI IDs
    pub fn region(&self) -> Option<&str> {
        if self.0.starts_with("ami-") {
            return None;
        }
        self.0.split(':').nth(3)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fails when the reference is pinned to a region other than `target_region`
    pub fn ensure_usable_in(&self, target_region: &str) -> Result<()> {
        match self.region() {
            Some(image_region) if image_region != target_region => {
                Err(SynthError::RegionMismatch {
                    parent_image: self.0.clone(),
                    image_region: image_region.to_string(),
                    target_region: target_region.to_string(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl Default for ParentImage {
    fn default() -> Self {
        Self(DEFAULT_PARENT_IMAGE.to_string())
    }
}
