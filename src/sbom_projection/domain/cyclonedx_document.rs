use crate::shared::error::KissbomError;
use crate::shared::Result;
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;

/// The subset of a CycloneDX JSON document that KissBOM conversion reads
///
/// Every other member of the document is ignored. `components` and
/// `licenses` are normalized on decode: absent, `null` and `[]` all become an
/// empty list. The document and every entry in it must be a JSON object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CycloneDxDocument {
    #[serde(default, deserialize_with = "optional_object")]
    pub metadata: Option<DocumentMetadata>,
    #[serde(default, deserialize_with = "object_list")]
    pub components: Vec<SourceComponent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "optional_object")]
    pub component: Option<SubjectComponent>,
}

/// The component an SBOM describes (`metadata.component`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectComponent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceComponent {
    #[serde(default)]
    pub purl: Option<String>,
    #[serde(default, deserialize_with = "object_list")]
    pub licenses: Vec<LicenseChoice>,
    #[serde(default)]
    pub copyright: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of a component's `licenses` list
///
/// Only the SPDX `expression` form is read. Entries of the `{"license": {...}}`
/// form decode with no expression.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LicenseChoice {
    #[serde(default)]
    pub expression: Option<String>,
}

impl CycloneDxDocument {
    /// Decodes a CycloneDX document from JSON bytes.
    ///
    /// # Errors
    /// Returns `KissbomError::SourceDecode` if the bytes are not JSON or do not
    /// have the shape of a CycloneDX document.
    pub fn from_json_slice(source: &[u8]) -> Result<Self> {
        serde_json::from_slice::<Object<Self>>(source)
            .map(|document| document.0)
            .map_err(|e| {
                KissbomError::SourceDecode {
                    details: e.to_string(),
                }
                .into()
            })
    }

    /// Returns the `metadata.component` entry, if the document has one.
    pub fn subject(&self) -> Option<&SubjectComponent> {
        self.metadata.as_ref().and_then(|m| m.component.as_ref())
    }

    /// Returns `metadata.timestamp`, if the document has one.
    pub fn timestamp(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.timestamp.as_deref())
    }
}

impl SourceComponent {
    /// Expression text of the first license entry.
    pub fn first_license_expression(&self) -> Option<&str> {
        self.licenses.first().and_then(|l| l.expression.as_deref())
    }
}

/// A `T` decoded from a JSON object only.
///
/// Derived struct impls also take a JSON array of field values; CycloneDX
/// entries are always objects.
struct Object<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ObjectVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
            type Value = Object<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                T::deserialize(MapAccessDeserializer::new(map)).map(Object)
            }
        }

        deserializer.deserialize_map(ObjectVisitor(PhantomData))
    }
}

fn optional_object<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Object<T>>::deserialize(deserializer)?.map(|o| o.0))
}

fn object_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<Object<T>>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|o| o.0)
        .collect())
}
