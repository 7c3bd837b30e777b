use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::collection::{validate_not_blank, Draft, Entity};

/// Navigation sections a store can expose to its staff.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Menu {
    Dashboard,
    Inventory,
    Orders,
    Images,
    Statistics,
    Movements,
    Sales,
}

impl Menu {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Tableau de bord",
            Self::Inventory => "Inventaire",
            Self::Orders => "Commandes",
            Self::Images => "Images",
            Self::Statistics => "Statistiques",
            Self::Movements => "Mouvements",
            Self::Sales => "Ventes",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub enabled_menus: BTreeSet<Menu>,
}

impl Store {
    pub fn shows(&self, menu: Menu) -> bool {
        self.enabled_menus.contains(&menu)
    }

    /// Opens this store for editing.
    pub fn to_draft(&self) -> StoreDraft {
        StoreDraft {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            enabled_menus: self.enabled_menus.clone(),
        }
    }
}

impl Entity for Store {
    fn id(&self) -> &str {
        &self.id
    }
}

fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() || validator::validate_email(email.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("email");
        err.message = Some("Adresse e-mail invalide".into());
        Err(err)
    }
}

#[derive(Clone, Debug, PartialEq, Validate)]
pub struct StoreDraft {
    pub id: String,
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    pub address: String,
    pub phone: String,
    #[validate(custom = "validate_optional_email")]
    pub email: String,
    pub enabled_menus: BTreeSet<Menu>,
}

impl Default for StoreDraft {
    /// A blank store starts with only the dashboard enabled.
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            enabled_menus: BTreeSet::from([Menu::Dashboard]),
        }
    }
}

impl StoreDraft {
    pub fn toggle_menu(&mut self, menu: Menu) {
        if !self.enabled_menus.remove(&menu) {
            self.enabled_menus.insert(menu);
        }
    }
}

impl Draft for StoreDraft {
    type Record = Store;

    fn draft_id(&self) -> &str {
        &self.id
    }

    fn into_record(self, id: String) -> Store {
        Store {
            id,
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            enabled_menus: self.enabled_menus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_enables_dashboard_only() {
        let draft = StoreDraft::default();
        assert_eq!(draft.enabled_menus, BTreeSet::from([Menu::Dashboard]));
        assert!(draft.is_new());
    }

    #[test]
    fn toggle_menu_flips_membership() {
        let mut draft = StoreDraft::default();
        draft.toggle_menu(Menu::Sales);
        assert!(draft.enabled_menus.contains(&Menu::Sales));
        draft.toggle_menu(Menu::Sales);
        assert!(!draft.enabled_menus.contains(&Menu::Sales));
    }

    #[test]
    fn email_is_optional_but_checked() {
        let mut draft = StoreDraft {
            name: "Boutique Marais".into(),
            ..StoreDraft::default()
        };
        assert!(draft.validate().is_ok());
        draft.email = "not-an-email".into();
        assert!(draft.validate().is_err());
        draft.email = "marais@example.com".into();
        assert!(draft.validate().is_ok());
    }
}
