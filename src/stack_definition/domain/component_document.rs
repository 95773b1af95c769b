use crate::shared::Result;
use anyhow::Context;
use serde::Serialize;

/// Image Builder component document schema version
pub const SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepInputs {
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub name: String,
    pub action: String,
    pub inputs: StepInputs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub name: String,
    pub steps: Vec<Step>,
}

/// The YAML document stored in a component's `Data` property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocument {
    pub name: String,
    pub description: String,
    pub schema_version: String,
    pub phases: Vec<Phase>,
}

impl ComponentDocument {
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .with_context(|| format!("Failed to render component document {}", self.name))
    }
}

/// A component that installs one OS package and enables its service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallComponent {
    /// Logical ID of the component resource
    pub logical_id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub step_name: &'static str,
    pub package: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub platform: &'static str,
}

impl InstallComponent {
    pub fn nginx() -> Self {
        Self {
            logical_id: "NginxComponent",
            name: "NginxInstallComponent",
            description: "Installs Nginx web server",
            step_name: "InstallNginx",
            package: "nginx",
            service: "nginx",
            version: "1.0.0",
            platform: "Linux",
        }
    }

    pub fn apache() -> Self {
        Self {
            logical_id: "ApacheComponent",
            name: "ApacheInstallComponent",
            description: "Installs Apache web server",
            step_name: "InstallApache",
            package: "httpd",
            service: "httpd",
            version: "1.0.0",
            platform: "Linux",
        }
    }

    /// Shell commands run by the single build step, in order
    pub fn commands(&self) -> Vec<String> {
        vec![
            "yum update -y".to_string(),
            format!("yum install -y {}", self.package),
            format!("systemctl enable {}", self.service),
        ]
    }

    pub fn document(&self) -> ComponentDocument {
        ComponentDocument {
            name: self.name.to_string(),
            description: self.description.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            phases: vec![Phase {
                name: "build".to_string(),
                steps: vec![Step {
                    name: self.step_name.to_string(),
                    action: "ExecuteBash".to_string(),
                    inputs: StepInputs {
                        commands: self.commands(),
                    },
                }],
            }],
        }
    }
}
