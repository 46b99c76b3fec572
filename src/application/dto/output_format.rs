use crate::shared::error::KissbomError;

/// Output format enumeration for KissBOM conversion
///
/// The set of formats is closed: every consumer matches on it exhaustively, so
/// an unknown name can only appear as a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// KissBOM as pretty-printed JSON (default)
    #[default]
    Json,
    /// KissBOM as YAML
    Yaml,
    /// KissBOM as CSV with a header row
    Csv,
    /// KissBOM as JSON carrying purls only
    Minimal,
    /// CycloneDX JSON document carrying purls only
    Compatible,
}

impl OutputFormat {
    /// Every supported format, in the order they are documented
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Csv,
        OutputFormat::Minimal,
        OutputFormat::Compatible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Csv => "csv",
            OutputFormat::Minimal => "minimal",
            OutputFormat::Compatible => "compatible",
        }
    }

    /// Suffix appended to the base name of the output file
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Minimal => ".json",
            OutputFormat::Yaml => ".yaml",
            OutputFormat::Csv => ".csv",
            OutputFormat::Compatible => ".cyclonedx.json",
        }
    }

    /// Builds the output file name from a base name
    pub fn file_name(&self, base_name: &str) -> String {
        format!("{}{}", base_name, self.file_extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = KissbomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "csv" => Ok(OutputFormat::Csv),
            "minimal" => Ok(OutputFormat::Minimal),
            "compatible" => Ok(OutputFormat::Compatible),
            _ => Err(KissbomError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str_all_names() {
        for format in OutputFormat::ALL {
            assert_eq!(OutputFormat::from_str(format.as_str()).unwrap(), format);
        }
    }

    #[test]
    fn test_output_format_from_str_case_insensitive() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Yaml").unwrap(), OutputFormat::Yaml);
        assert_eq!(
            OutputFormat::from_str("COMPATIBLE").unwrap(),
            OutputFormat::Compatible
        );
    }

    #[test]
    fn test_output_format_from_str_invalid_names_the_input() {
        let error = OutputFormat::from_str("unsupported-format").unwrap_err();
        assert!(matches!(
            &error,
            KissbomError::UnsupportedFormat { format } if format == "unsupported-format"
        ));
        assert!(error.to_string().contains("unsupported-format"));
    }

    #[test]
    fn test_output_format_from_str_empty() {
        assert!(OutputFormat::from_str("").is_err());
        assert!(OutputFormat::from_str("markdown").is_err());
    }

    #[test]
    fn test_output_format_default_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_file_extension() {
        assert_eq!(OutputFormat::Json.file_extension(), ".json");
        assert_eq!(OutputFormat::Yaml.file_extension(), ".yaml");
        assert_eq!(OutputFormat::Csv.file_extension(), ".csv");
        assert_eq!(OutputFormat::Minimal.file_extension(), ".json");
        assert_eq!(OutputFormat::Compatible.file_extension(), ".cyclonedx.json");
    }

    #[test]
    fn test_output_format_file_name() {
        assert_eq!(OutputFormat::Compatible.file_name("bom"), "bom.cyclonedx.json");
        assert_eq!(OutputFormat::Csv.file_name(""), ".csv");
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Minimal.to_string(), "minimal");
    }
}
