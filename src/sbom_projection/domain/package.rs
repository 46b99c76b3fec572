use crate::shared::error::KissbomError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// NewType wrapper for a package URL
///
/// The only rule enforced is that the value is non-empty: any identifier the
/// source SBOM uses is carried over as-is, whether or not it follows the
/// `pkg:` scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Purl(String);

impl Purl {
    pub fn new(purl: String) -> Result<Self> {
        Ok(Self::try_from(purl)?)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Purl {
    type Error = KissbomError;

    fn try_from(purl: String) -> std::result::Result<Self, Self::Error> {
        if purl.is_empty() {
            return Err(KissbomError::Validation {
                message: "Package URL cannot be empty".to_string(),
            });
        }
        Ok(Self(purl))
    }
}

impl From<Purl> for String {
    fn from(purl: Purl) -> Self {
        purl.0
    }
}

impl std::fmt::Display for Purl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Package entry of a KissBOM
///
/// Optional fields are omitted from JSON and YAML output when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    purl: Purl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    copyright: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl Package {
    /// Creates a package. Empty optional values are stored as absent.
    pub fn new(
        purl: Purl,
        license: Option<String>,
        copyright: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            purl,
            license: non_empty(license),
            copyright: non_empty(copyright),
            notes: non_empty(notes),
        }
    }

    /// Creates a package carrying only its purl.
    pub fn purl_only(purl: Purl) -> Self {
        Self::new(purl, None, None, None)
    }

    pub fn purl(&self) -> &Purl {
        &self.purl
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn copyright(&self) -> Option<&str> {
        self.copyright.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
