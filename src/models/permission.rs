use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::models::user::UserRole;

/// A dotted capability (e.g. `inventory.view`) and the roles granted it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub id: String,
    pub name: String,
    pub description: String,
    pub roles: BTreeSet<UserRole>,
}

impl Permission {
    pub fn grants(&self, role: UserRole) -> bool {
        self.roles.contains(&role)
    }

    /// Capability area, the part of the name before the first dot.
    pub fn area(&self) -> &str {
        self.name.split('.').next().unwrap_or(&self.name)
    }

    /// Copy of this permission with `role` membership flipped.
    pub fn with_role_toggled(&self, role: UserRole) -> Self {
        let mut roles = self.roles.clone();
        if !roles.remove(&role) {
            roles.insert(role);
        }
        Self {
            roles,
            ..self.clone()
        }
    }
}

impl Entity for Permission {
    fn id(&self) -> &str {
        &self.id
    }
}
