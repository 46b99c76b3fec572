use crate::application::dto::{ConvertRequest, ConvertResponse, ConvertedOutput, OutputFormat};
use crate::application::factories::FormatterFactory;
use crate::ports::outbound::{OutputWriter, ProgressReporter, SbomReader};
use crate::sbom_projection::domain::CycloneDxDocument;
use crate::sbom_projection::services::{KissBomProjector, OutputName};
use crate::shared::Result;
use log::{debug, info};

/// ConvertSbomUseCase - Core use case for CycloneDX to KissBOM conversion
///
/// Each call to `execute` reads the source once, converts it and writes the
/// result once. No state is kept between calls and any failure aborts the
/// whole conversion.
///
/// # Type Parameters
/// * `R` - SbomReader implementation
/// * `W` - OutputWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertSbomUseCase<R, W, PR> {
    sbom_reader: R,
    output_writer: W,
    progress_reporter: PR,
}

impl<R, W, PR> ConvertSbomUseCase<R, W, PR>
where
    R: SbomReader,
    W: OutputWriter,
    PR: ProgressReporter,
{
    /// Creates a new ConvertSbomUseCase with injected dependencies
    pub fn new(sbom_reader: R, output_writer: W, progress_reporter: PR) -> Self {
        Self {
            sbom_reader,
            output_writer,
            progress_reporter,
        }
    }

    /// Executes the conversion use case
    ///
    /// # Returns
    /// ConvertResponse naming the written file
    ///
    /// # Errors
    /// Returns the first error of any step unchanged: `FileRead`,
    /// `SourceDecode`, `Encode` or `FileWrite`
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        // Step 1: Read source bytes
        self.progress_reporter.report(&format!(
            "📖 Loading CycloneDX SBOM from: {}",
            request.input_path.display()
        ));
        debug!("converting: {}", request.input_path.display());

        let source = self.sbom_reader.read_sbom(&request.input_path)?;
        debug!("bytes: {}", source.len());

        // Steps 2-5: Decode, name, project and encode
        let output = self.convert(&source, request.format, &request.fallback_name)?;

        // Step 6: Write result bytes
        let output_path = self.output_writer.write_output(
            &request.output_dir,
            &output.file_name,
            output.content.as_bytes(),
        )?;
        info!("saved: {}", output_path.display());

        self.progress_reporter.report_completion(&format!(
            "✅ Converted {} package(s) to {} format",
            output.package_count, request.format
        ));

        Ok(ConvertResponse {
            output_file_name: output.file_name,
            output_path,
            package_count: output.package_count,
            bytes_written: output.content.len(),
        })
    }

    /// Converts CycloneDX JSON bytes without touching any store
    ///
    /// `fallback_name` is the base name used when the document has no
    /// `metadata.component`.
    pub fn convert(
        &self,
        source: &[u8],
        format: OutputFormat,
        fallback_name: &str,
    ) -> Result<ConvertedOutput> {
        let document = CycloneDxDocument::from_json_slice(source)?;
        let base_name = OutputName::derive(&document, fallback_name);

        let bom = KissBomProjector::project(&document);
        debug!("transformed to kissbom");
        self.progress_reporter.report(&format!(
            "✅ Projected {} package(s) from {} component(s)",
            bom.len(),
            document.components.len()
        ));

        self.progress_reporter
            .report(FormatterFactory::progress_message(format));
        let content = FormatterFactory::create(format).format(&bom)?;
        debug!("final bytes: {}", content.len());

        Ok(ConvertedOutput {
            content,
            file_name: format.file_name(&base_name),
            package_count: bom.len(),
        })
    }
}
