use crate::shared::error::SynthError;
use crate::shared::Result;
use crate::stack_definition::domain::{Resource, Template};
use anyhow::Context;
use serde_json::Value;

/// Checks that every reference in a template resolves
///
/// A target must be declared, and declared before the resource that refers
/// to it. Pseudo parameters (`AWS::*`) always resolve.
pub struct ReferenceValidator;

impl ReferenceValidator {
    pub fn validate(template: &Template) -> Result<()> {
        Self::validate_with(template, |_, _, _| {})
    }

    /// Validates like [`validate`](Self::validate), calling
    /// `on_resource(current, total, resource)` after each resource checks out
    ///
    /// `current` is 1-based. Validation stops at the first failing resource,
    /// so the callback never sees it or anything after it.
    pub fn validate_with<F>(template: &Template, mut on_resource: F) -> Result<()>
    where
        F: FnMut(usize, usize, &Resource),
    {
        let total = template.resources().len();
        for (position, resource) in template.resources().iter().enumerate() {
            for target in Self::references_of(resource)? {
                Self::check(template, resource.logical_id().as_str(), &target, Some(position))?;
            }
            on_resource(position + 1, total, resource);
        }

        for output in template.outputs() {
            let value = serde_json::to_value(output.value())
                .with_context(|| format!("Failed to serialize output {}", output.logical_id()))?;
            let mut targets = Vec::new();
            collect_references(&value, &mut targets);
            for target in targets {
                Self::check(template, output.logical_id().as_str(), &target, None)?;
            }
        }

        Ok(())
    }

    /// Logical IDs a resource points at through `Ref`, `Fn::GetAtt` or `DependsOn`
    pub fn references_of(resource: &Resource) -> Result<Vec<String>> {
        let value = serde_json::to_value(resource.properties()).with_context(|| {
            format!("Failed to serialize properties of {}", resource.logical_id())
        })?;

        let mut targets = Vec::new();
        collect_references(&value, &mut targets);
        targets.extend(resource.depends_on().iter().map(|id| id.to_string()));

        let mut unique = Vec::with_capacity(targets.len());
        for target in targets {
            if !unique.contains(&target) {
                unique.push(target);
            }
        }
        Ok(unique)
    }

    fn check(template: &Template, from: &str, target: &str, position: Option<usize>) -> Result<()> {
        match (template.position_of(target), position) {
            (None, _) => Err(SynthError::DanglingReference {
                from: from.to_string(),
                target: target.to_string(),
            }
            .into()),
            (Some(declared), Some(current)) if declared >= current => {
                Err(SynthError::ForwardReference {
                    from: from.to_string(),
                    target: target.to_string(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

fn collect_references(value: &Value, targets: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            if map.len() == 1 {
                if let Some(Value::String(target)) = map.get("Ref") {
                    if !target.starts_with("AWS::") {
                        targets.push(target.clone());
                    }
                    return;
                }
                if let Some(Value::Array(args)) = map.get("Fn::GetAtt") {
                    if let Some(Value::String(target)) = args.first() {
                        targets.push(target.clone());
                    }
                    return;
                }
            }
            map.values().for_each(|v| collect_references(v, targets));
        }
        Value::Array(items) => items.iter().for_each(|v| collect_references(v, targets)),
        _ => {}
    }
}
