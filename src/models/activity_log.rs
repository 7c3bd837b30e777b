use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::models::BadgeVariant;

/// Closed set of activity categories. Free-form action strings map onto it
/// through [`ActionKind::from_action`]; anything unrecognised is `Other`.
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
pub enum ActionKind {
    Create,
    Update,
    Delete,
    Login,
    Logout,
    Other,
}

impl ActionKind {
    pub fn from_action(action: &str) -> Self {
        match action.trim().to_lowercase().as_str() {
            "create" | "add" => Self::Create,
            "update" | "edit" => Self::Update,
            "delete" | "remove" => Self::Delete,
            "login" => Self::Login,
            "logout" => Self::Logout,
            _ => Self::Other,
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Create => BadgeVariant::Success,
            Self::Update => BadgeVariant::Accent,
            Self::Delete => BadgeVariant::Error,
            Self::Login => BadgeVariant::Secondary,
            Self::Logout | Self::Other => BadgeVariant::Primary,
        }
    }

    /// Plural label used by the activity filter.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Create => "Créations",
            Self::Update => "Modifications",
            Self::Delete => "Suppressions",
            Self::Login => "Connexions",
            Self::Logout => "Déconnexions",
            Self::Other => "Autres",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    /// Free-form verb as recorded, e.g. "Update" or "Add".
    pub action: String,
    pub details: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityLog {
    pub fn kind(&self) -> ActionKind {
        ActionKind::from_action(&self.action)
    }
}

impl Entity for ActivityLog {
    fn id(&self) -> &str {
        &self.id
    }
}
