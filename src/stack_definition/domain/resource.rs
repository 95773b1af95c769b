use crate::stack_definition::domain::properties::*;
use crate::stack_definition::domain::LogicalId;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Properties of one declared resource, tagged by its CloudFormation type
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceProperties {
    Vpc(VpcProperties),
    InternetGateway(InternetGatewayProperties),
    VpcGatewayAttachment(VpcGatewayAttachmentProperties),
    Subnet(SubnetProperties),
    RouteTable(RouteTableProperties),
    SubnetRouteTableAssociation(SubnetRouteTableAssociationProperties),
    Route(RouteProperties),
    SecurityGroup(SecurityGroupProperties),
    VpcEndpoint(VpcEndpointProperties),
    Role(RoleProperties),
    InstanceProfile(InstanceProfileProperties),
    Component(ComponentProperties),
    ImageRecipe(ImageRecipeProperties),
    InfrastructureConfiguration(InfrastructureConfigurationProperties),
    ImagePipeline(ImagePipelineProperties),
}

impl ResourceProperties {
    pub fn resource_type(&self) -> &'static str {
        match self {
            ResourceProperties::Vpc(_) => "AWS::EC2::VPC",
            ResourceProperties::InternetGateway(_) => "AWS::EC2::InternetGateway",
            ResourceProperties::VpcGatewayAttachment(_) => "AWS::EC2::VPCGatewayAttachment",
            ResourceProperties::Subnet(_) => "AWS::EC2::Subnet",
            ResourceProperties::RouteTable(_) => "AWS::EC2::RouteTable",
            ResourceProperties::SubnetRouteTableAssociation(_) => {
                "AWS::EC2::SubnetRouteTableAssociation"
            }
            ResourceProperties::Route(_) => "AWS::EC2::Route",
            ResourceProperties::SecurityGroup(_) => "AWS::EC2::SecurityGroup",
            ResourceProperties::VpcEndpoint(_) => "AWS::EC2::VPCEndpoint",
            ResourceProperties::Role(_) => "AWS::IAM::Role",
            ResourceProperties::InstanceProfile(_) => "AWS::IAM::InstanceProfile",
            ResourceProperties::Component(_) => "AWS::ImageBuilder::Component",
            ResourceProperties::ImageRecipe(_) => "AWS::ImageBuilder::ImageRecipe",
            ResourceProperties::InfrastructureConfiguration(_) => {
                "AWS::ImageBuilder::InfrastructureConfiguration"
            }
            ResourceProperties::ImagePipeline(_) => "AWS::ImageBuilder::ImagePipeline",
        }
    }
}

/// A declared resource: logical ID, typed properties and explicit ordering edges
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    logical_id: LogicalId,
    properties: ResourceProperties,
    depends_on: Vec<LogicalId>,
}

impl Resource {
    pub fn new(logical_id: LogicalId, properties: ResourceProperties) -> Self {
        Self {
            logical_id,
            properties,
            depends_on: Vec::new(),
        }
    }

    /// Adds a `DependsOn` edge for ordering that no property reference implies
    pub fn depending_on(mut self, id: &LogicalId) -> Self {
        self.depends_on.push(id.clone());
        self
    }

    pub fn logical_id(&self) -> &LogicalId {
        &self.logical_id
    }

    pub fn properties(&self) -> &ResourceProperties {
        &self.properties
    }

    pub fn depends_on(&self) -> &[LogicalId] {
        &self.depends_on
    }

    pub fn resource_type(&self) -> &'static str {
        self.properties.resource_type()
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.depends_on.is_empty() { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("Type", self.resource_type())?;
        map.serialize_entry("Properties", &self.properties)?;
        if !self.depends_on.is_empty() {
            map.serialize_entry("DependsOn", &self.depends_on)?;
        }
        map.end()
    }
}
