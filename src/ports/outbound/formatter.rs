use crate::sbom_projection::domain::KissBom;
use crate::shared::Result;

/// KissBomFormatter port for encoding a KissBOM
///
/// One implementation exists per output format (json, yaml, csv, minimal,
/// CycloneDX-compatible). Formatters never modify the KissBOM they are given.
pub trait KissBomFormatter {
    /// Encodes the KissBOM
    ///
    /// # Errors
    /// Returns `KissbomError::Encode` if the KissBOM cannot be represented in
    /// this format
    fn format(&self, bom: &KissBom) -> Result<String>;
}

/// KissBomParser port for decoding a previously encoded KissBOM
pub trait KissBomParser {
    /// Decodes a KissBOM from the text this format produces
    ///
    /// # Errors
    /// Returns an error if the text is not a KissBOM in this format
    fn parse(&self, content: &str) -> Result<KissBom>;
}
