/// Projection model - KissBOM entities, the CycloneDX source model and the
/// rules that map one onto the other
pub mod domain;
pub mod services;
