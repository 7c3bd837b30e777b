use tracing::{info, instrument};

use crate::{
    collection::EntityCollection,
    errors::ServiceResult,
    filters::SearchQuery,
    models::{TaxonomyDraft, TaxonomyEntry, TaxonomyKind},
};

/// Reference data of one catalog axis (genres, classes, ...).
#[derive(Clone, Debug)]
pub struct TaxonomyService {
    kind: TaxonomyKind,
    entries: EntityCollection<TaxonomyEntry>,
}

impl TaxonomyService {
    pub fn new(kind: TaxonomyKind, entries: Vec<TaxonomyEntry>) -> Self {
        Self {
            kind,
            entries: EntityCollection::new(entries),
        }
    }

    pub fn kind(&self) -> TaxonomyKind {
        self.kind
    }

    pub fn list(&self) -> &[TaxonomyEntry] {
        self.entries.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&TaxonomyEntry> {
        self.entries.get(id)
    }

    /// Entries whose name or description contains `query`.
    pub fn search(&self, query: &SearchQuery) -> Vec<TaxonomyEntry> {
        self.entries
            .iter()
            .filter(|entry| {
                query.matches_any(
                    std::iter::once(entry.name.as_str()).chain(entry.description.as_deref()),
                )
            })
            .cloned()
            .collect()
    }

    #[instrument(skip(self, draft), fields(kind = %self.kind))]
    pub fn save(&mut self, draft: TaxonomyDraft) -> ServiceResult<TaxonomyEntry> {
        let entry = self.entries.save(draft)?;
        info!("Saved {} entry {}", self.kind, entry.name);
        Ok(entry)
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    pub fn delete(&mut self, id: &str) -> Option<TaxonomyEntry> {
        let removed = self.entries.remove(id);
        if let Some(entry) = &removed {
            info!("Deleted {} entry {}", self.kind, entry.name);
        }
        removed
    }
}
