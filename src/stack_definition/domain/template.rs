use crate::shared::error::SynthError;
use crate::shared::Result;
use crate::stack_definition::domain::{Expr, LogicalId, Resource, StackName};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Template format version understood by every CloudFormation endpoint
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A stack output surfaced to downstream automation
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    logical_id: LogicalId,
    value: Expr,
    description: Option<String>,
}

impl Output {
    pub fn new(logical_id: LogicalId, value: Expr) -> Self {
        Self {
            logical_id,
            value,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    pub fn value(&self) -> &Expr {
        &self.value
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl Serialize for Output {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(description) = &self.description {
            map.serialize_entry("Description", description)?;
        }
        map.serialize_entry("Value", &self.value)?;
        map.end()
    }
}

/// CloudFormation template with resources kept in declaration order
///
/// Declaration order is the dependency order: a resource may only refer to
/// resources added before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    description: String,
    resources: Vec<Resource>,
    outputs: Vec<Output>,
}

impl Template {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            resources: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Appends a resource, rejecting logical IDs that are already taken
    pub fn add_resource(&mut self, resource: Resource) -> Result<()> {
        if self.contains(resource.logical_id()) {
            return Err(SynthError::DuplicateLogicalId {
                id: resource.logical_id().to_string(),
            }
            .into());
        }
        self.resources.push(resource);
        Ok(())
    }

    pub fn add_output(&mut self, output: Output) -> Result<()> {
        if self
            .outputs
            .iter()
            .any(|o| o.logical_id() == output.logical_id())
        {
            return Err(SynthError::DuplicateLogicalId {
                id: output.logical_id().to_string(),
            }
            .into());
        }
        self.outputs.push(output);
        Ok(())
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn contains(&self, id: &LogicalId) -> bool {
        self.position_of(id.as_str()).is_some()
    }

    pub fn resource(&self, id: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.logical_id().as_str() == id)
    }

    /// Index of a resource in declaration order
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.resources
            .iter()
            .position(|r| r.logical_id().as_str() == id)
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("AWSTemplateFormatVersion", TEMPLATE_FORMAT_VERSION)?;
        map.serialize_entry("Description", &self.description)?;
        map.serialize_entry("Resources", &OrderedResources(&self.resources))?;
        if !self.outputs.is_empty() {
            map.serialize_entry("Outputs", &OrderedOutputs(&self.outputs))?;
        }
        map.end()
    }
}

struct OrderedResources<'a>(&'a [Resource]);

impl Serialize for OrderedResources<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for resource in self.0 {
            map.serialize_entry(resource.logical_id().as_str(), resource)?;
        }
        map.end()
    }
}

struct OrderedOutputs<'a>(&'a [Output]);

impl Serialize for OrderedOutputs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for output in self.0 {
            map.serialize_entry(output.logical_id().as_str(), output)?;
        }
        map.end()
    }
}

/// A synthesized template together with the stack it is meant for
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedStack {
    stack_name: StackName,
    template: Template,
}

impl SynthesizedStack {
    pub fn new(stack_name: StackName, template: Template) -> Self {
        Self {
            stack_name,
            template,
        }
    }

    pub fn stack_name(&self) -> &StackName {
        &self.stack_name
    }

    pub fn template(&self) -> &Template {
        &self.template
    }
}
