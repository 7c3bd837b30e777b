use tracing::{debug, info, instrument};

use crate::{
    collection::EntityCollection,
    models::{Permission, UserRole},
};

/// Role-to-capability matrix of the settings page.
#[derive(Clone, Debug, Default)]
pub struct PermissionService {
    permissions: EntityCollection<Permission>,
}

impl PermissionService {
    pub fn new(permissions: Vec<Permission>) -> Self {
        Self {
            permissions: EntityCollection::new(permissions),
        }
    }

    pub fn permissions(&self) -> &[Permission] {
        self.permissions.as_slice()
    }

    /// Grants `role` the permission, or revokes it if already granted.
    ///
    /// Returns whether the role holds the permission afterwards, or `None`
    /// for an unknown permission.
    #[instrument(skip(self))]
    pub fn toggle_role(&mut self, permission_id: &str, role: UserRole) -> Option<bool> {
        let granted = self
            .permissions
            .update(permission_id, |permission| permission.with_role_toggled(role))
            .map(|permission| permission.grants(role));
        match granted {
            Some(true) => info!("Granted {} to {}", permission_id, role),
            Some(false) => info!("Revoked {} from {}", permission_id, role),
            None => debug!("Permission {} not found", permission_id),
        }
        granted
    }

    pub fn role_count(&self, role: UserRole) -> usize {
        self.permissions.iter().filter(|p| p.grants(role)).count()
    }

    pub fn permissions_for(&self, role: UserRole) -> Vec<&Permission> {
        self.permissions.iter().filter(|p| p.grants(role)).collect()
    }

    pub fn is_allowed(&self, role: UserRole, permission_name: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p.name == permission_name && p.grants(role))
    }
}
