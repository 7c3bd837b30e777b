//! Ordered, id-keyed record collections and the draft/commit lifecycle
//! shared by every page.
//!
//! Mutations never edit a record in place: a replacement record is built
//! and the backing vector is swapped for a new one, so a reader holding a
//! previous snapshot keeps seeing the old state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::errors::{ServiceError, ServiceResult};

/// A record identified by a string id.
pub trait Entity: Clone {
    fn id(&self) -> &str;
}

/// An editable, not-yet-committed form of a record.
///
/// An empty (or blank) id means "new record"; anything else targets the
/// stored record with that id.
pub trait Draft: Validate {
    type Record: Entity;

    fn draft_id(&self) -> &str;

    /// Builds the record once validation has passed.
    fn into_record(self, id: String) -> Self::Record;

    fn is_new(&self) -> bool {
        self.draft_id().trim().is_empty()
    }
}

/// Generates a fresh record id (UUIDv7, so ids sort by creation time).
pub fn next_id() -> String {
    Uuid::now_v7().to_string()
}

/// Rejects empty and whitespace-only strings.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityCollection<T> {
    items: Vec<T>,
}

impl<T> Default for EntityCollection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> EntityCollection<T> {
    /// Builds a collection, keeping the first record for any duplicated id.
    pub fn new(items: Vec<T>) -> Self {
        let mut unique: Vec<T> = Vec::with_capacity(items.len());
        for item in items {
            if unique.iter().any(|existing| existing.id() == item.id()) {
                warn!("Dropping duplicate record id {}", item.id());
                continue;
            }
            unique.push(item);
        }
        Self { items: unique }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Appends `record` unless its id is already present.
    pub fn insert(&mut self, record: T) -> bool {
        if self.contains(record.id()) {
            warn!("Refusing to insert duplicate id {}", record.id());
            return false;
        }
        let mut next = self.items.clone();
        next.push(record);
        self.items = next;
        true
    }

    /// Replaces the record carrying the same id. Absent ids are a no-op.
    pub fn replace(&mut self, record: T) -> bool {
        let id = record.id().to_string();
        self.update(&id, |_| record).is_some()
    }

    /// Rebuilds the record with `id` through `f`; returns the new record.
    pub fn update<F>(&mut self, id: &str, f: F) -> Option<&T>
    where
        F: FnOnce(&T) -> T,
    {
        let position = self.items.iter().position(|item| item.id() == id)?;
        let replacement = f(&self.items[position]);
        let mut next = self.items.clone();
        next[position] = replacement;
        self.items = next;
        self.items.get(position)
    }

    /// Drops the record with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let removed = self.get(id).cloned()?;
        self.items = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        debug!("Removed record {}", id);
        Some(removed)
    }

    /// Validates and commits a draft: new drafts get a fresh id and are
    /// appended, existing ones replace the stored record.
    pub fn save<D>(&mut self, draft: D) -> ServiceResult<T>
    where
        D: Draft<Record = T>,
    {
        draft.validate()?;

        if draft.is_new() {
            let record = draft.into_record(next_id());
            self.insert(record.clone());
            debug!("Created record {}", record.id());
            return Ok(record);
        }

        let id = draft.draft_id().to_string();
        if !self.contains(&id) {
            return Err(ServiceError::NotFound(format!("Record {} not found", id)));
        }
        let record = draft.into_record(id);
        self.replace(record.clone());
        debug!("Updated record {}", record.id());
        Ok(record)
    }
}

impl<T> IntoIterator for EntityCollection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a EntityCollection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: String,
        label: String,
    }

    impl Entity for Tag {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[derive(Validate)]
    struct TagDraft {
        id: String,
        #[validate(custom = "validate_not_blank")]
        label: String,
    }

    impl Draft for TagDraft {
        type Record = Tag;

        fn draft_id(&self) -> &str {
            &self.id
        }

        fn into_record(self, id: String) -> Tag {
            Tag {
                id,
                label: self.label.trim().to_string(),
            }
        }
    }

    fn tag(id: &str, label: &str) -> Tag {
        Tag {
            id: id.into(),
            label: label.into(),
        }
    }

    #[test]
    fn new_drops_duplicate_ids() {
        let tags = EntityCollection::new(vec![tag("1", "a"), tag("1", "b"), tag("2", "c")]);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("1").unwrap().label, "a");
    }

    #[test]
    fn update_replaces_only_matching_record() {
        let mut tags = EntityCollection::new(vec![tag("1", "a"), tag("2", "b")]);
        let snapshot = tags.clone();
        let updated = tags
            .update("2", |t| Tag {
                label: "z".into(),
                ..t.clone()
            })
            .cloned();
        assert_eq!(updated, Some(tag("2", "z")));
        assert_eq!(tags.as_slice(), &[tag("1", "a"), tag("2", "z")]);
        assert_eq!(snapshot.get("2").unwrap().label, "b");
    }

    #[test]
    fn missing_ids_are_noops() {
        let mut tags = EntityCollection::new(vec![tag("1", "a")]);
        assert!(tags.update("9", |t| t.clone()).is_none());
        assert!(tags.remove("9").is_none());
        assert!(!tags.replace(tag("9", "x")));
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn save_assigns_id_to_new_draft() {
        let mut tags = EntityCollection::default();
        let saved = tags
            .save(TagDraft {
                id: String::new(),
                label: "  Hommes ".into(),
            })
            .unwrap();
        assert!(!saved.id.is_empty());
        assert_eq!(saved.label, "Hommes");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn save_rejects_blank_required_field() {
        let mut tags: EntityCollection<Tag> = EntityCollection::default();
        let result = tags.save(TagDraft {
            id: String::new(),
            label: "   ".into(),
        });
        assert_matches!(result, Err(ServiceError::ValidationError(_)));
        assert!(tags.is_empty());
    }

    #[test]
    fn save_existing_draft_replaces_in_place() {
        let mut tags = EntityCollection::new(vec![tag("1", "a"), tag("2", "b")]);
        tags.save(TagDraft {
            id: "1".into(),
            label: "A".into(),
        })
        .unwrap();
        assert_eq!(tags.as_slice(), &[tag("1", "A"), tag("2", "b")]);
    }

    #[test]
    fn save_unknown_id_is_not_found() {
        let mut tags = EntityCollection::new(vec![tag("1", "a")]);
        let result = tags.save(TagDraft {
            id: "7".into(),
            label: "x".into(),
        });
        assert_matches!(result, Err(ServiceError::NotFound(_)));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(next_id(), next_id());
    }
}
