use crate::sbom_projection::domain::{CycloneDxDocument, KissBom, Package, Purl, SourceComponent};

/// KissBomProjector service projecting a CycloneDX document onto a KissBOM
///
/// Pure business logic with no I/O: the same document always yields the same
/// KissBOM.
pub struct KissBomProjector;

impl KissBomProjector {
    /// Projects every component that has a purl, in document order
    ///
    /// Components without a purl are dropped silently. Only the first license
    /// entry of a component is kept and its expression is copied as opaque
    /// text, so `(AFL-2.1 OR BSD-3-Clause)` stays exactly that.
    pub fn project(document: &CycloneDxDocument) -> KissBom {
        KissBom::new(
            document
                .components
                .iter()
                .filter_map(Self::project_component)
                .collect(),
        )
    }

    fn project_component(component: &SourceComponent) -> Option<Package> {
        let purl = Purl::try_from(component.purl.clone()?).ok()?;

        Some(Package::new(
            purl,
            component.first_license_expression().map(str::to_string),
            component.copyright.clone(),
            component.description.clone(),
        ))
    }
}
