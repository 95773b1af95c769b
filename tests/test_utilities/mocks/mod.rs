/// Mock implementations for testing
mod mock_progress_reporter;

pub use mock_progress_reporter::MockProgressReporter;
