pub mod component_document;
pub mod expr;
pub mod logical_id;
pub mod network_cidr;
pub mod parent_image;
pub mod properties;
pub mod resource;
pub mod schedule;
pub mod stack_name;
pub mod stack_options;
pub mod template;

pub use component_document::{ComponentDocument, InstallComponent};
pub use expr::{Expr, PseudoParameter};
pub use logical_id::LogicalId;
pub use network_cidr::{Ipv4Cidr, NetworkLayout};
pub use parent_image::ParentImage;
pub use resource::{Resource, ResourceProperties};
pub use schedule::ScheduleExpression;
pub use stack_name::StackName;
pub use stack_options::StackOptions;
pub use template::{Output, SynthesizedStack, Template};
