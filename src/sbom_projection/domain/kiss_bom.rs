use super::package::Package;
use serde::{Deserialize, Serialize};

/// KissBom aggregate - the ordered list of packages of one SBOM
///
/// Order follows the source document and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KissBom {
    #[serde(default)]
    packages: Vec<Package>,
}

impl KissBom {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Returns a copy that keeps only the purl of every package.
    pub fn purls_only(&self) -> KissBom {
        KissBom::new(
            self.packages
                .iter()
                .map(|p| Package::purl_only(p.purl().clone()))
                .collect(),
        )
    }
}
