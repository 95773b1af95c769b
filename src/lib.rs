//! imagebuilder-stack - CloudFormation synthesis for an EC2 Image Builder pipeline
//!
//! This library declares the infrastructure of a web server image pipeline
//! (network, build role, installer components, recipe, infrastructure
//! configuration, optional session management endpoints and the pipeline)
//! and renders it as a CloudFormation template. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`stack_definition`): Template model, stack options and the builder
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use imagebuilder_stack::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = SynthesizeStackUseCase::new(StderrProgressReporter::new());
//!
//! let request = SynthRequest::new(
//!     Some("web-server-image".to_string()),
//!     StackVariant::Reduced.options(),
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = CloudFormationYamlFormatter::new().format(&response.stack)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod stack_definition;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{
        CloudFormationJsonFormatter, CloudFormationYamlFormatter, MarkdownFormatter,
    };
    pub use crate::application::dto::{OutputFormat, SynthRequest, SynthResponse};
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::SynthesizeStackUseCase;
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, TemplateFormatter};
    pub use crate::shared::error::{ExitCode, SynthError};
    pub use crate::shared::Result;
    pub use crate::stack_definition::domain::{
        Expr, LogicalId, NetworkLayout, ParentImage, ScheduleExpression, StackName, StackOptions,
        SynthesizedStack, Template,
    };
    pub use crate::stack_definition::policies::StackVariant;
    pub use crate::stack_definition::services::{ReferenceValidator, StackBuilder};
}
