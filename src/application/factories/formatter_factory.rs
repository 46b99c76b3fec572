use crate::adapters::outbound::formatters::{
    CompatibleFormatter, CsvFormatter, JsonFormatter, MinimalFormatter, YamlFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::{KissBomFormatter, KissBomParser};
use crate::shared::Result;

/// Factory for creating KissBOM formatters
///
/// Maps each `OutputFormat` onto its adapter. Adding a format is a compile
/// error here until the new variant is handled.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates the formatter for the specified output format
    ///
    /// # Examples
    /// ```
    /// use kissbom::application::dto::OutputFormat;
    /// use kissbom::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn KissBomFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Minimal => Box::new(MinimalFormatter::new()),
            OutputFormat::Compatible => Box::new(CompatibleFormatter::new()),
        }
    }

    /// Creates the formatter for a format given by name
    ///
    /// # Errors
    /// Returns `KissbomError::UnsupportedFormat` naming `name` if it is not one
    /// of json, yaml, csv, minimal or compatible
    pub fn create_by_name(name: &str) -> Result<Box<dyn KissBomFormatter>> {
        let format: OutputFormat = name.parse()?;
        Ok(Self::create(format))
    }

    /// Creates the parser that reads back output of the specified format
    pub fn create_parser(format: OutputFormat) -> Box<dyn KissBomParser> {
        match format {
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Yaml => Box::new(YamlFormatter::new()),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Minimal => Box::new(MinimalFormatter::new()),
            OutputFormat::Compatible => Box::new(CompatibleFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use kissbom::application::dto::OutputFormat;
    /// use kissbom::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating KissBOM JSON output...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating KissBOM JSON output...",
            OutputFormat::Yaml => "📝 Generating KissBOM YAML output...",
            OutputFormat::Csv => "📝 Generating KissBOM CSV output...",
            OutputFormat::Minimal => "📝 Generating minimal KissBOM JSON output...",
            OutputFormat::Compatible => "📝 Generating CycloneDX-compatible JSON output...",
        }
    }
}
