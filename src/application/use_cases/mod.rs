/// Use cases module containing application business logic orchestration
mod check_for_update;
mod convert_sbom;

pub use check_for_update::CheckForUpdateUseCase;
pub use convert_sbom::ConvertSbomUseCase;
