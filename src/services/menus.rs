use tracing::{debug, info, instrument};

use crate::{
    collection::EntityCollection,
    errors::ServiceResult,
    models::{MenuItem, MenuItemDraft},
};

/// Application menu settings.
#[derive(Clone, Debug, Default)]
pub struct MenuService {
    items: EntityCollection<MenuItem>,
}

impl MenuService {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items: EntityCollection::new(items),
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        self.items.as_slice()
    }

    pub fn enabled_items(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|item| item.enabled).collect()
    }

    /// Flips the enabled flag. Returns the new flag, `None` if unknown.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, id: &str) -> Option<bool> {
        let enabled = self
            .items
            .update(id, |item| MenuItem {
                enabled: !item.enabled,
                ..item.clone()
            })
            .map(|item| item.enabled);
        match enabled {
            Some(enabled) => info!("Menu {} enabled: {}", id, enabled),
            None => debug!("Menu {} not found", id),
        }
        enabled
    }

    /// Adds a menu entry. The name must not be blank once trimmed.
    #[instrument(skip(self, draft))]
    pub fn add(&mut self, draft: MenuItemDraft) -> ServiceResult<MenuItem> {
        let draft = MenuItemDraft {
            id: String::new(),
            ..draft
        };
        let item = self.items.save(draft)?;
        info!("Added menu {}", item.name);
        Ok(item)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Option<MenuItem> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            info!("Deleted menu {}", id);
        }
        removed
    }
}
