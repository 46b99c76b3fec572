pub mod cyclonedx_document;
pub mod kiss_bom;
pub mod package;

pub use cyclonedx_document::{
    CycloneDxDocument, DocumentMetadata, LicenseChoice, SourceComponent, SubjectComponent,
};
pub use kiss_bom::KissBom;
pub use package::{Package, Purl};
