mod reference_validator;
mod stack_builder;

pub use reference_validator::ReferenceValidator;
pub use stack_builder::StackBuilder;
