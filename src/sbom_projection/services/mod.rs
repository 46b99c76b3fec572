mod kiss_bom_projector;
mod output_name;

pub use kiss_bom_projector::KissBomProjector;
pub use output_name::OutputName;
