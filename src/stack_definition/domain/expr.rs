use crate::stack_definition::domain::LogicalId;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// CloudFormation pseudo parameters resolved by the provider at deploy time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoParameter {
    Partition,
    Region,
}

impl PseudoParameter {
    pub fn as_str(&self) -> &'static str {
        match self {
            PseudoParameter::Partition => "AWS::Partition",
            PseudoParameter::Region => "AWS::Region",
        }
    }
}

/// A string-valued template expression
///
/// Either a literal or one of the intrinsic functions the stack needs.
/// References to other resources are always made through `Ref` or
/// `Fn::GetAtt`, never by embedding a physical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(String),
    Ref(LogicalId),
    Pseudo(PseudoParameter),
    GetAtt {
        resource: LogicalId,
        attribute: String,
    },
    Join {
        delimiter: String,
        parts: Vec<Expr>,
    },
    Select {
        index: u32,
        list: Box<Expr>,
    },
    /// `Fn::GetAZs` for the current region
    AvailabilityZones,
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn reference(id: &LogicalId) -> Self {
        Expr::Ref(id.clone())
    }

    pub fn get_att(id: &LogicalId, attribute: &str) -> Self {
        Expr::GetAtt {
            resource: id.clone(),
            attribute: attribute.to_string(),
        }
    }

    /// `arn:${AWS::Partition}<rest>`
    pub fn partition_arn(rest: &str) -> Self {
        Expr::Join {
            delimiter: String::new(),
            parts: vec![
                Expr::literal("arn:"),
                Expr::Pseudo(PseudoParameter::Partition),
                Expr::literal(rest),
            ],
        }
    }

    /// `com.amazonaws.${AWS::Region}.<service>`
    pub fn regional_service(service: &str) -> Self {
        Expr::Join {
            delimiter: String::new(),
            parts: vec![
                Expr::literal("com.amazonaws."),
                Expr::Pseudo(PseudoParameter::Region),
                Expr::literal(format!(".{}", service)),
            ],
        }
    }

    /// First availability zone of the deployment region
    pub fn first_availability_zone() -> Self {
        Expr::Select {
            index: 0,
            list: Box::new(Expr::AvailabilityZones),
        }
    }
}

impl Serialize for Expr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Expr::Literal(value) => serializer.serialize_str(value),
            Expr::Ref(id) => single_entry(serializer, "Ref", id.as_str()),
            Expr::Pseudo(param) => single_entry(serializer, "Ref", param.as_str()),
            Expr::GetAtt {
                resource,
                attribute,
            } => single_entry(
                serializer,
                "Fn::GetAtt",
                &(resource.as_str(), attribute.as_str()),
            ),
            Expr::Join { delimiter, parts } => {
                single_entry(serializer, "Fn::Join", &(delimiter.as_str(), parts))
            }
            Expr::Select { index, list } => {
                single_entry(serializer, "Fn::Select", &(index, list.as_ref()))
            }
            Expr::AvailabilityZones => single_entry(serializer, "Fn::GetAZs", ""),
        }
    }
}

fn single_entry<S, V>(serializer: S, key: &str, value: &V) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, value)?;
    map.end()
}
