use super::JsonFormatter;
use crate::ports::outbound::{KissBomFormatter, KissBomParser};
use crate::sbom_projection::domain::KissBom;
use crate::shared::Result;

/// MinimalFormatter adapter for the purl-only KissBOM JSON format
///
/// License, copyright and notes are dropped whatever their source values.
pub struct MinimalFormatter {
    json: JsonFormatter,
}

impl MinimalFormatter {
    pub fn new() -> Self {
        Self {
            json: JsonFormatter::new(),
        }
    }
}

impl Default for MinimalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KissBomFormatter for MinimalFormatter {
    fn format(&self, bom: &KissBom) -> Result<String> {
        self.json.format(&bom.purls_only())
    }
}

impl KissBomParser for MinimalFormatter {
    fn parse(&self, content: &str) -> Result<KissBom> {
        self.json.parse(content)
    }
}
