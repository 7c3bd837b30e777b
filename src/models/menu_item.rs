use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::collection::{validate_not_blank, Draft, Entity};

/// An application menu entry as configured in the settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub description: String,
}

impl Entity for MenuItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Validate)]
pub struct MenuItemDraft {
    pub id: String,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    pub description: String,
    pub enabled: bool,
}

impl Default for MenuItemDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: String::new(),
            enabled: true,
        }
    }
}

impl Draft for MenuItemDraft {
    type Record = MenuItem;

    fn draft_id(&self) -> &str {
        &self.id
    }

    fn into_record(self, id: String) -> MenuItem {
        MenuItem {
            id,
            name: self.name.trim().to_string(),
            enabled: self.enabled,
            description: self.description.trim().to_string(),
        }
    }
}
