/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the conversion core uses to reach the
/// file system, the console and the network.
pub mod formatter;
pub mod output_writer;
pub mod progress_reporter;
pub mod release_checker;
pub mod sbom_reader;

pub use formatter::{KissBomFormatter, KissBomParser};
pub use output_writer::OutputWriter;
pub use progress_reporter::ProgressReporter;
pub use release_checker::ReleaseChecker;
pub use sbom_reader::SbomReader;
