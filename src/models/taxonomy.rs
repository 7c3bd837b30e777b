use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::collection::{validate_not_blank, Draft, Entity};

/// Axes of the clothing catalog. Every axis holds the same record shape.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TaxonomyKind {
    Genre,
    Class,
    Material,
    Pattern,
    Design,
}

impl TaxonomyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Genre => "Genres",
            Self::Class => "Classes",
            Self::Material => "Matières",
            Self::Pattern => "Motifs",
            Self::Design => "Designs",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaxonomyEntry {
    pub fn to_draft(&self) -> TaxonomyDraft {
        TaxonomyDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

impl Entity for TaxonomyEntry {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, Default, PartialEq, Validate)]
pub struct TaxonomyDraft {
    pub id: String,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    pub description: String,
}

impl Draft for TaxonomyDraft {
    type Record = TaxonomyEntry;

    fn draft_id(&self) -> &str {
        &self.id
    }

    /// Blank descriptions are stored as absent.
    fn into_record(self, id: String) -> TaxonomyEntry {
        let description = self.description.trim();
        TaxonomyEntry {
            id,
            name: self.name.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}
