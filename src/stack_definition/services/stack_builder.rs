use crate::shared::Result;
use crate::stack_definition::domain::properties::*;
use crate::stack_definition::domain::{
    Expr, InstallComponent, LogicalId, Output, Resource, ResourceProperties, StackName,
    StackOptions, SynthesizedStack, Template,
};
use crate::stack_definition::services::ReferenceValidator;

const TEMPLATE_DESCRIPTION: &str = "EC2 Image Builder pipeline producing a web server image";

const VPC: &str = "ImageBuilderVpc";
const INTERNET_GATEWAY: &str = "ImageBuilderVpcIGW";
const GATEWAY_ATTACHMENT: &str = "ImageBuilderVpcVPCGW";
const PUBLIC_SUBNET: &str = "ImageBuilderVpcPublicSubnet1Subnet";
const ROUTE_TABLE: &str = "ImageBuilderVpcPublicSubnet1RouteTable";
const ROUTE_TABLE_ASSOCIATION: &str = "ImageBuilderVpcPublicSubnet1RouteTableAssociation";
const DEFAULT_ROUTE: &str = "ImageBuilderVpcPublicSubnet1DefaultRoute";
const SECURITY_GROUP: &str = "ImageBuilderSG";
const ROLE: &str = "ImageBuilderRole";
const INSTANCE_PROFILE: &str = "ImageBuilderInstanceProfile";
const RECIPE: &str = "WebServerRecipe";
const INFRASTRUCTURE_CONFIGURATION: &str = "InfraConfig";
const PIPELINE: &str = "WebServerPipeline";
const PIPELINE_ARN_OUTPUT: &str = "ImagePipelineArn";

const RECIPE_NAME: &str = "WebServerRecipe";
const RECIPE_VERSION: &str = "1.0.0";
const INFRASTRUCTURE_CONFIGURATION_NAME: &str = "WebServerInfraConfig";
const PIPELINE_NAME: &str = "WebServerPipeline";
const SECURITY_GROUP_DESCRIPTION: &str = "Security group for Image Builder";

const COMPUTE_SERVICE_PRINCIPAL: &str = "ec2.amazonaws.com";
const IMAGE_BUILDER_INSTANCE_POLICY: &str = "EC2InstanceProfileForImageBuilder";
const SSM_CORE_POLICY: &str = "AmazonSSMManagedInstanceCore";

/// Interface endpoints needed by the SSM agent: (logical ID, service suffix)
const MANAGEMENT_ENDPOINTS: [(&str, &str); 3] = [
    ("SSMEndpoint", "ssm"),
    ("SSMMessagesEndpoint", "ssmmessages"),
    ("EC2MessagesEndpoint", "ec2messages"),
];

/// IDs of the network resources later declarations attach to
struct NetworkIds {
    vpc: LogicalId,
    public_subnet: LogicalId,
    security_group: LogicalId,
}

/// Declares the whole stack, leaves first, from a stack name and options
///
/// Each `declare_*` step only references resources returned by earlier
/// steps, so the template is valid in declaration order.
pub struct StackBuilder {
    stack_name: StackName,
    options: StackOptions,
}

impl StackBuilder {
    pub fn new(stack_name: StackName, options: StackOptions) -> Self {
        Self {
            stack_name,
            options,
        }
    }

    pub fn build(&self) -> Result<SynthesizedStack> {
        self.build_with(|_, _, _| {})
    }

    /// Builds the stack, calling `on_validated(current, total, resource)` as
    /// each declared resource passes reference validation
    pub fn build_with<F>(&self, on_validated: F) -> Result<SynthesizedStack>
    where
        F: FnMut(usize, usize, &Resource),
    {
        self.options.validate()?;

        let mut template = Template::new(TEMPLATE_DESCRIPTION);

        let network = self.declare_network(&mut template)?;
        let instance_profile = self.declare_identity(&mut template)?;
        let components = self.declare_components(&mut template)?;
        let recipe = self.declare_recipe(&mut template, &components)?;
        let infrastructure =
            self.declare_infrastructure_configuration(&mut template, &network, &instance_profile)?;
        if self.options.include_endpoints {
            self.declare_endpoints(&mut template, &network)?;
        }
        let pipeline = self.declare_pipeline(&mut template, &recipe, &infrastructure)?;

        if self.options.expose_pipeline_arn {
            template.add_output(
                Output::new(
                    LogicalId::new(PIPELINE_ARN_OUTPUT)?,
                    Expr::get_att(&pipeline, "Arn"),
                )
                .with_description("ARN of the web server image pipeline"),
            )?;
        }

        ReferenceValidator::validate_with(&template, on_validated)?;

        Ok(SynthesizedStack::new(self.stack_name.clone(), template))
    }

    fn name_tags(&self, construct_path: &str) -> Vec<Tag> {
        vec![Tag::name(format!("{}/{}", self.stack_name, construct_path))]
    }

    /// VPC with one public subnet in the first AZ, plus the build security group
    fn declare_network(&self, template: &mut Template) -> Result<NetworkIds> {
        let vpc = LogicalId::new(VPC)?;
        let igw = LogicalId::new(INTERNET_GATEWAY)?;
        let attachment = LogicalId::new(GATEWAY_ATTACHMENT)?;
        let subnet = LogicalId::new(PUBLIC_SUBNET)?;
        let route_table = LogicalId::new(ROUTE_TABLE)?;
        let security_group = LogicalId::new(SECURITY_GROUP)?;
        let subnet_path = format!("{}/PublicSubnet1", VPC);

        template.add_resource(Resource::new(
            vpc.clone(),
            ResourceProperties::Vpc(VpcProperties {
                cidr_block: self.options.network.vpc_cidr.to_string(),
                enable_dns_hostnames: true,
                enable_dns_support: true,
                instance_tenancy: "default".to_string(),
                tags: self.name_tags(VPC),
            }),
        ))?;

        template.add_resource(Resource::new(
            igw.clone(),
            ResourceProperties::InternetGateway(InternetGatewayProperties {
                tags: self.name_tags(VPC),
            }),
        ))?;

        template.add_resource(Resource::new(
            attachment.clone(),
            ResourceProperties::VpcGatewayAttachment(VpcGatewayAttachmentProperties {
                internet_gateway_id: Expr::reference(&igw),
                vpc_id: Expr::reference(&vpc),
            }),
        ))?;

        template.add_resource(Resource::new(
            subnet.clone(),
            ResourceProperties::Subnet(SubnetProperties {
                availability_zone: Expr::first_availability_zone(),
                cidr_block: self.options.network.public_subnet()?.to_string(),
                map_public_ip_on_launch: true,
                tags: self.name_tags(&subnet_path),
                vpc_id: Expr::reference(&vpc),
            }),
        ))?;

        template.add_resource(Resource::new(
            route_table.clone(),
            ResourceProperties::RouteTable(RouteTableProperties {
                tags: self.name_tags(&subnet_path),
                vpc_id: Expr::reference(&vpc),
            }),
        ))?;

        template.add_resource(Resource::new(
            LogicalId::new(ROUTE_TABLE_ASSOCIATION)?,
            ResourceProperties::SubnetRouteTableAssociation(
                SubnetRouteTableAssociationProperties {
                    route_table_id: Expr::reference(&route_table),
                    subnet_id: Expr::reference(&subnet),
                },
            ),
        ))?;

        // The route is only usable once the gateway is attached to the VPC.
        template.add_resource(
            Resource::new(
                LogicalId::new(DEFAULT_ROUTE)?,
                ResourceProperties::Route(RouteProperties {
                    destination_cidr_block: "0.0.0.0/0".to_string(),
                    gateway_id: Expr::reference(&igw),
                    route_table_id: Expr::reference(&route_table),
                }),
            )
            .depending_on(&attachment),
        )?;

        template.add_resource(Resource::new(
            security_group.clone(),
            ResourceProperties::SecurityGroup(SecurityGroupProperties {
                group_description: SECURITY_GROUP_DESCRIPTION.to_string(),
                security_group_egress: vec![EgressRule::allow_all()],
                tags: Vec::new(),
                vpc_id: Expr::reference(&vpc),
            }),
        ))?;

        Ok(NetworkIds {
            vpc,
            public_subnet: subnet,
            security_group,
        })
    }

    /// Build role and the instance profile wrapping it; returns the profile ID
    fn declare_identity(&self, template: &mut Template) -> Result<LogicalId> {
        let role = LogicalId::new(ROLE)?;
        let instance_profile = LogicalId::new(INSTANCE_PROFILE)?;

        let mut policies = vec![IMAGE_BUILDER_INSTANCE_POLICY];
        if self.options.attach_ssm_policy {
            policies.push(SSM_CORE_POLICY);
        }

        template.add_resource(Resource::new(
            role.clone(),
            ResourceProperties::Role(RoleProperties {
                assume_role_policy_document: PolicyDocument::assumable_by(
                    COMPUTE_SERVICE_PRINCIPAL,
                ),
                managed_policy_arns: policies
                    .iter()
                    .map(|name| Expr::partition_arn(&format!(":iam::aws:policy/{}", name)))
                    .collect(),
            }),
        ))?;

        template.add_resource(Resource::new(
            instance_profile.clone(),
            ResourceProperties::InstanceProfile(InstanceProfileProperties {
                roles: vec![Expr::reference(&role)],
            }),
        ))?;

        Ok(instance_profile)
    }

    /// Installer components in recipe order
    fn declare_components(&self, template: &mut Template) -> Result<Vec<LogicalId>> {
        let mut installers = vec![InstallComponent::nginx()];
        if self.options.include_apache_component {
            installers.push(InstallComponent::apache());
        }

        let mut ids = Vec::with_capacity(installers.len());
        for installer in installers {
            let id = LogicalId::new(installer.logical_id)?;
            template.add_resource(Resource::new(
                id.clone(),
                ResourceProperties::Component(ComponentProperties {
                    data: installer.document().to_yaml()?,
                    name: installer.name.to_string(),
                    platform: installer.platform.to_string(),
                    version: installer.version.to_string(),
                }),
            ))?;
            ids.push(id);
        }

        Ok(ids)
    }

    fn declare_recipe(&self, template: &mut Template, components: &[LogicalId]) -> Result<LogicalId> {
        let recipe = LogicalId::new(RECIPE)?;

        template.add_resource(Resource::new(
            recipe.clone(),
            ResourceProperties::ImageRecipe(ImageRecipeProperties {
                components: components
                    .iter()
                    .map(|id| ComponentConfiguration {
                        component_arn: Expr::get_att(id, "Arn"),
                    })
                    .collect(),
                name: RECIPE_NAME.to_string(),
                parent_image: self.options.parent_image.as_str().to_string(),
                version: RECIPE_VERSION.to_string(),
            }),
        ))?;

        Ok(recipe)
    }

    fn declare_infrastructure_configuration(
        &self,
        template: &mut Template,
        network: &NetworkIds,
        instance_profile: &LogicalId,
    ) -> Result<LogicalId> {
        let infrastructure = LogicalId::new(INFRASTRUCTURE_CONFIGURATION)?;

        template.add_resource(Resource::new(
            infrastructure.clone(),
            ResourceProperties::InfrastructureConfiguration(
                InfrastructureConfigurationProperties {
                    instance_profile_name: Expr::reference(instance_profile),
                    instance_types: self.options.instance_types.clone(),
                    name: INFRASTRUCTURE_CONFIGURATION_NAME.to_string(),
                    security_group_ids: vec![Expr::get_att(&network.security_group, "GroupId")],
                    subnet_id: Expr::reference(&network.public_subnet),
                    terminate_instance_on_failure: self
                        .options
                        .terminate_on_failure
                        .then_some(true),
                },
            ),
        ))?;

        Ok(infrastructure)
    }

    fn declare_endpoints(&self, template: &mut Template, network: &NetworkIds) -> Result<()> {
        for (logical_id, service) in MANAGEMENT_ENDPOINTS {
            template.add_resource(Resource::new(
                LogicalId::new(logical_id)?,
                ResourceProperties::VpcEndpoint(VpcEndpointProperties {
                    private_dns_enabled: true,
                    security_group_ids: vec![Expr::get_att(&network.security_group, "GroupId")],
                    service_name: Expr::regional_service(service),
                    subnet_ids: vec![Expr::reference(&network.public_subnet)],
                    vpc_endpoint_type: "Interface".to_string(),
                    vpc_id: Expr::reference(&network.vpc),
                }),
            ))?;
        }
        Ok(())
    }

    fn declare_pipeline(
        &self,
        template: &mut Template,
        recipe: &LogicalId,
        infrastructure: &LogicalId,
    ) -> Result<LogicalId> {
        let pipeline = LogicalId::new(PIPELINE)?;

        template.add_resource(Resource::new(
            pipeline.clone(),
            ResourceProperties::ImagePipeline(ImagePipelineProperties {
                image_recipe_arn: Expr::get_att(recipe, "Arn"),
                infrastructure_configuration_arn: Expr::get_att(infrastructure, "Arn"),
                name: PIPELINE_NAME.to_string(),
                schedule: self
                    .options
                    .schedule_expression
                    .as_ref()
                    .map(|expression| PipelineSchedule {
                        schedule_expression: expression.as_str().to_string(),
                    }),
            }),
        ))?;

        Ok(pipeline)
    }
}
