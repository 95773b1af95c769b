//! Typed `Properties` blocks for every resource type the stack declares.
//!
//! Field names follow the CloudFormation property names through
//! `rename_all = "PascalCase"`.
mod ec2;
mod iam;
mod imagebuilder;

pub use ec2::{
    EgressRule, InternetGatewayProperties, RouteProperties, RouteTableProperties,
    SecurityGroupProperties, SubnetProperties, SubnetRouteTableAssociationProperties, Tag,
    VpcEndpointProperties, VpcGatewayAttachmentProperties, VpcProperties,
};
pub use iam::{
    InstanceProfileProperties, PolicyDocument, PolicyStatement, RoleProperties, ServicePrincipal,
};
pub use imagebuilder::{
    ComponentConfiguration, ComponentProperties, ImagePipelineProperties,
    ImageRecipeProperties, InfrastructureConfigurationProperties, PipelineSchedule,
};
