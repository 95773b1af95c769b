/// Use cases module containing application business logic orchestration
mod synthesize_stack;

pub use synthesize_stack::SynthesizeStackUseCase;
