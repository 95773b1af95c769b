use crate::stack_definition::domain::Expr;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentProperties {
    /// YAML component document
    pub data: String,
    pub name: String,
    pub platform: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ComponentConfiguration {
    pub component_arn: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageRecipeProperties {
    /// Applied in order during the build phase
    pub components: Vec<ComponentConfiguration>,
    pub name: String,
    pub parent_image: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InfrastructureConfigurationProperties {
    pub instance_profile_name: Expr,
    pub instance_types: Vec<String>,
    pub name: String,
    pub security_group_ids: Vec<Expr>,
    pub subnet_id: Expr,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate_instance_on_failure: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PipelineSchedule {
    pub schedule_expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImagePipelineProperties {
    pub image_recipe_arn: Expr,
    pub infrastructure_configuration_arn: Expr,
    pub name: String,
    /// Absent for manually triggered pipelines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PipelineSchedule>,
}
