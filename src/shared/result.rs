/// Result alias with `anyhow::Error` as the error type.
/// Typed failures are `KissbomError` values wrapped in the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
