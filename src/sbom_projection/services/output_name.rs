use crate::sbom_projection::domain::CycloneDxDocument;

/// OutputName service deriving the base name of a KissBOM file
///
/// The name documents the subject of the SBOM: the component name, its
/// publisher and the SBOM timestamp, joined with underscores.
pub struct OutputName;

impl OutputName {
    /// Derives the base file name (without extension)
    ///
    /// When the document has a `metadata.component`, the result is
    /// `{name}_{publisher}_{timestamp}`. Missing values become empty strings,
    /// so partial metadata can yield doubled or trailing underscores.
    /// Without a `metadata.component` the caller's `fallback` is returned.
    pub fn derive(document: &CycloneDxDocument, fallback: &str) -> String {
        match document.subject() {
            Some(subject) => format!(
                "{}_{}_{}",
                subject.name.as_deref().unwrap_or_default(),
                subject.publisher.as_deref().unwrap_or_default(),
                document.timestamp().unwrap_or_default()
            ),
            None => fallback.to_string(),
        }
    }
}
