/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the conversion use case is the single
/// entry point and is called directly by the CLI.
pub mod outbound;
