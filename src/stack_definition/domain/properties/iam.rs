use crate::stack_definition::domain::Expr;
use serde::Serialize;

/// IAM policy language version accepted by every IAM API
const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServicePrincipal {
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: String,
    pub effect: String,
    pub principal: ServicePrincipal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub statement: Vec<PolicyStatement>,
    pub version: String,
}

impl PolicyDocument {
    /// Trust policy letting `service` assume the role
    pub fn assumable_by(service: &str) -> Self {
        Self {
            statement: vec![PolicyStatement {
                action: "sts:AssumeRole".to_string(),
                effect: "Allow".to_string(),
                principal: ServicePrincipal {
                    service: service.to_string(),
                },
            }],
            version: POLICY_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleProperties {
    pub assume_role_policy_document: PolicyDocument,
    pub managed_policy_arns: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceProfileProperties {
    pub roles: Vec<Expr>,
}
