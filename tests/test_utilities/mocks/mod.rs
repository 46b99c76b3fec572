/// Mock implementations for testing
mod mock_output_writer;
mod mock_progress_reporter;
mod mock_release_checker;
mod mock_sbom_reader;

pub use mock_output_writer::MockOutputWriter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_release_checker::MockReleaseChecker;
pub use mock_sbom_reader::MockSbomReader;
