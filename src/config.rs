//! Configuration file support for imagebuilder-stack.
//!
//! Provides YAML-based configuration through `imagebuilder-stack.config.yml`
//! files, including data structures, file loading, validation and merging
//! onto a variant preset.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use crate::stack_definition::domain::{
    Ipv4Cidr, NetworkLayout, ParentImage, ScheduleExpression, StackOptions,
};
use crate::stack_definition::policies::StackVariant;

pub const CONFIG_FILENAME: &str = "imagebuilder-stack.config.yml";

/// Top-level configuration file schema.
///
/// Every key is optional; a missing key keeps the variant preset.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub variant: Option<String>,
    pub format: Option<String>,
    pub region: Option<String>,
    pub include_apache_component: Option<bool>,
    pub include_endpoints: Option<bool>,
    pub attach_ssm_policy: Option<bool>,
    pub terminate_on_failure: Option<bool>,
    /// A cron/rate expression, or `null` for a manually triggered pipeline
    #[serde(default, deserialize_with = "deserialize_explicit_null")]
    pub schedule_expression: Option<Option<String>>,
    pub expose_pipeline_arn: Option<bool>,
    pub instance_types: Option<Vec<String>>,
    pub parent_image: Option<String>,
    pub vpc_cidr: Option<String>,
    pub subnet_cidr_mask: Option<u8>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Distinguishes `key: null` (Some(None)) from an absent key (None)
fn deserialize_explicit_null<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ConfigFile {
    pub fn variant(&self) -> Result<Option<StackVariant>> {
        self.variant
            .as_deref()
            .map(|v| v.parse::<StackVariant>().map_err(anyhow::Error::msg))
            .transpose()
            .context("Invalid config: variant")
    }

    pub fn format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|f| f.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
            .context("Invalid config: format")
    }

    /// Overlays the keys present in this file onto `options`
    pub fn apply_to(&self, options: &mut StackOptions) -> Result<()> {
        if let Some(value) = self.include_apache_component {
            options.include_apache_component = value;
        }
        if let Some(value) = self.include_endpoints {
            options.include_endpoints = value;
        }
        if let Some(value) = self.attach_ssm_policy {
            options.attach_ssm_policy = value;
        }
        if let Some(value) = self.terminate_on_failure {
            options.terminate_on_failure = value;
        }
        if let Some(value) = self.expose_pipeline_arn {
            options.expose_pipeline_arn = value;
        }
        if let Some(schedule) = &self.schedule_expression {
            options.schedule_expression = schedule
                .as_deref()
                .map(ScheduleExpression::new)
                .transpose()
                .context("Invalid config: schedule_expression")?;
        }
        if let Some(instance_types) = &self.instance_types {
            options.instance_types = instance_types.clone();
        }
        if let Some(parent_image) = &self.parent_image {
            options.parent_image =
                ParentImage::new(parent_image.as_str()).context("Invalid config: parent_image")?;
        }
        if self.vpc_cidr.is_some() || self.subnet_cidr_mask.is_some() {
            let vpc_cidr = match &self.vpc_cidr {
                Some(cidr) => cidr
                    .parse::<Ipv4Cidr>()
                    .context("Invalid config: vpc_cidr")?,
                None => options.network.vpc_cidr,
            };
            let mask = self.subnet_cidr_mask.unwrap_or(options.network.subnet_mask);
            options.network =
                NetworkLayout::new(vpc_cidr, mask).context("Invalid config: subnet_cidr_mask")?;
        }
        Ok(())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if std::fs::symlink_metadata(&config_path).is_err() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.variant()?;
    config.format()?;

    if let Some(ref instance_types) = config.instance_types {
        if instance_types.is_empty() {
            bail!(
                "Invalid config: instance_types must not be empty.\n\n\
                 💡 Hint: List at least one instance type (e.g., \"t3.micro\")."
            );
        }
        for (i, instance_type) in instance_types.iter().enumerate() {
            if instance_type.trim().is_empty() {
                bail!(
                    "Invalid config: instance_types[{}] must not be empty.\n\n\
                     💡 Hint: Each entry must name an instance type (e.g., \"t3.micro\").",
                    i
                );
            }
        }
    }

    if let Some(ref region) = config.region {
        if region.trim().is_empty() {
            bail!("Invalid config: region must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
