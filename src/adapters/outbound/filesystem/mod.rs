/// Filesystem adapters for presenting rendered templates
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
