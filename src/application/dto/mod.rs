/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI, the synthesis use case and the
/// adapters, keeping the stack definition free of I/O concerns.
mod output_format;
mod synth_request;
mod synth_response;

pub use output_format::OutputFormat;
pub use synth_request::SynthRequest;
pub use synth_response::SynthResponse;
