/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to render templates and talk to the console and file system.
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::TemplateFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
