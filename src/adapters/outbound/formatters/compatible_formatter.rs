use super::encode_error;
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{KissBomFormatter, KissBomParser};
use crate::sbom_projection::domain::{CycloneDxDocument, KissBom};
use crate::sbom_projection::services::KissBomProjector;
use crate::shared::Result;
use serde::Serialize;

/// JSON schema every compatible document references
pub const CYCLONEDX_SCHEMA_URL: &str = "http://cyclonedx.org/schema/bom-1.6.schema.json";

const SPEC_VERSION: &str = "1.6";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Bom<'a> {
    #[serde(rename = "$schema")]
    schema: &'static str,
    bom_format: &'static str,
    spec_version: &'static str,
    version: u32,
    components: Vec<Component<'a>>,
}

/// A component carrying only its purl
///
/// `type` and `name` are required by the CycloneDX schema and stay at their
/// defaults.
#[derive(Debug, Serialize)]
struct Component<'a> {
    #[serde(rename = "type")]
    component_type: &'static str,
    name: &'static str,
    purl: &'a str,
}

/// CompatibleFormatter adapter for CycloneDX 1.6 JSON output
///
/// Emits one CycloneDX component per package and nothing else, so the same
/// KissBOM always yields the same document. Parsing goes back through the
/// CycloneDX projection, so only purls survive a round trip.
pub struct CompatibleFormatter;

impl CompatibleFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CompatibleFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl KissBomFormatter for CompatibleFormatter {
    fn format(&self, bom: &KissBom) -> Result<String> {
        let document = Bom {
            schema: CYCLONEDX_SCHEMA_URL,
            bom_format: "CycloneDX",
            spec_version: SPEC_VERSION,
            version: 1,
            components: bom
                .packages()
                .iter()
                .map(|p| Component {
                    component_type: "library",
                    name: "",
                    purl: p.purl().as_str(),
                })
                .collect(),
        };

        serde_json::to_string_pretty(&document)
            .map_err(|e| encode_error(OutputFormat::Compatible, e))
    }
}

impl KissBomParser for CompatibleFormatter {
    fn parse(&self, content: &str) -> Result<KissBom> {
        let document = CycloneDxDocument::from_json_slice(content.as_bytes())?;
        Ok(KissBomProjector::project(&document))
    }
}
