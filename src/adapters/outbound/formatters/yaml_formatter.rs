use super::encode_error;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{KissBomFormatter, KissBomParser};
use crate::sbom_projection::domain::KissBom;
use crate::shared::Result;

/// YamlFormatter adapter for KissBOM YAML output
///
/// Same shape as the JSON format: a mapping with one `packages` sequence.
pub struct YamlFormatter;

impl YamlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for YamlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KissBomFormatter for YamlFormatter {
    fn format(&self, bom: &KissBom) -> Result<String> {
        serde_yaml_ng::to_string(bom).map_err(|e| encode_error(OutputFormat::Yaml, e))
    }
}

impl KissBomParser for YamlFormatter {
    fn parse(&self, content: &str) -> Result<KissBom> {
        serde_yaml_ng::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse KissBOM YAML: {}", e))
    }
}
