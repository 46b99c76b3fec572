use super::encode_error;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{KissBomFormatter, KissBomParser};
use crate::sbom_projection::domain::KissBom;
use crate::shared::Result;

/// JsonFormatter adapter for the default KissBOM JSON format
///
/// Output is a pretty-printed object with a `packages` array. Absent
/// license, copyright and notes values are left out.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KissBomFormatter for JsonFormatter {
    fn format(&self, bom: &KissBom) -> Result<String> {
        serde_json::to_string_pretty(bom).map_err(|e| encode_error(OutputFormat::Json, e))
    }
}

impl KissBomParser for JsonFormatter {
    fn parse(&self, content: &str) -> Result<KissBom> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse KissBOM JSON: {}", e))
    }
}
