//! kissbom - converts CycloneDX SBOMs into the KissBOM format
//!
//! A KissBOM keeps only what most consumers of an SBOM read: the package URL
//! of every component plus its license, copyright and notes. This library
//! decodes a CycloneDX JSON document, projects it onto that model and encodes
//! the result as JSON, YAML, CSV, a purl-only JSON list or a minimal CycloneDX
//! document.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_projection`): CycloneDX and KissBOM models and the projection
//! - **Application Layer** (`application`): Use cases, DTOs and formatter selection
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use kissbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ConvertRequest::with_defaults(PathBuf::from("bom.json"), OutputFormat::Csv);
//! let response = use_case.execute(request)?;
//! println!("{}", response.output_file_name);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_projection;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
    pub use crate::adapters::outbound::formatters::{
        CompatibleFormatter, CsvFormatter, JsonFormatter, MinimalFormatter, YamlFormatter,
    };
    pub use crate::adapters::outbound::network::GitHubReleaseChecker;
    pub use crate::application::dto::{
        ConvertRequest, ConvertResponse, ConvertedOutput, OutputFormat,
    };
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::{CheckForUpdateUseCase, ConvertSbomUseCase};
    pub use crate::ports::outbound::{
        KissBomFormatter, KissBomParser, OutputWriter, ProgressReporter, ReleaseChecker,
        SbomReader,
    };
    pub use crate::sbom_projection::domain::{CycloneDxDocument, KissBom, Package, Purl};
    pub use crate::sbom_projection::services::{KissBomProjector, OutputName};
    pub use crate::shared::error::{ExitCode, KissbomError};
    pub use crate::shared::Result;
}
