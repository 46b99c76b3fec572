/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the conversion use case and results back out,
/// keeping the CLI and the projection model apart.
mod convert_request;
mod convert_response;
mod output_format;

pub use convert_request::{ConvertRequest, DEFAULT_FALLBACK_NAME};
pub use convert_response::{ConvertResponse, ConvertedOutput};
pub use output_format::OutputFormat;
