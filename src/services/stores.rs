use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::{
    collection::EntityCollection,
    errors::ServiceResult,
    models::{Menu, Store, StoreDraft},
};

#[derive(Clone, Debug, Default)]
pub struct StoreService {
    stores: EntityCollection<Store>,
}

impl StoreService {
    pub fn new(stores: Vec<Store>) -> Self {
        Self {
            stores: EntityCollection::new(stores),
        }
    }

    pub fn stores(&self) -> &[Store] {
        self.stores.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&Store> {
        self.stores.get(id)
    }

    /// Draft for the edit form, or `None` for an unknown store.
    pub fn edit(&self, id: &str) -> Option<StoreDraft> {
        self.stores.get(id).map(Store::to_draft)
    }

    /// Commits a store draft.
    ///
    /// # Returns
    ///
    /// * `Ok(Store)` - The inserted (blank id) or replaced store
    /// * `Err(ServiceError::ValidationError)` - Blank name or malformed email
    /// * `Err(ServiceError::NotFound)` - The draft targets an unknown id
    #[instrument(skip(self, draft), fields(store_id = %draft.id))]
    pub fn save(&mut self, draft: StoreDraft) -> ServiceResult<Store> {
        let store = self.stores.save(draft)?;
        info!("Saved store {} ({})", store.name, store.id);
        Ok(store)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Option<Store> {
        let removed = self.stores.remove(id);
        if let Some(store) = &removed {
            info!("Deleted store {}", store.name);
        }
        removed
    }

    /// Menus the store exposes, in navigation order.
    pub fn visible_menus(&self, store_id: &str) -> Option<Vec<Menu>> {
        let store = self.stores.get(store_id)?;
        Some(Menu::iter().filter(|menu| store.shows(*menu)).collect())
    }
}
