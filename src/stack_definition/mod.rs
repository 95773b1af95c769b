/// Domain layer - the declarative resource graph and the rules that shape it
///
/// Nothing in here performs I/O. Given a stack name and a `StackOptions`
/// value, the builder always produces the same template.
pub mod domain;
pub mod policies;
pub mod services;
