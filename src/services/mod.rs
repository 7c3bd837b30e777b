// Stock pages
pub mod inventory;
pub mod movements;
pub mod orders;

// Point of sale and reporting
pub mod dashboard;
pub mod images;
pub mod sales;
pub mod statistics;

// Catalog
pub mod catalog;

// Settings
pub mod activity;
pub mod menus;
pub mod permissions;
pub mod stores;

use serde::Serialize;

/// Outcome of a status transition request.
///
/// Transitions never fail: an unknown id or a record already past the
/// transition is reported, not raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "status", rename_all = "snake_case")]
pub enum Transition<S> {
    Applied(S),
    Unchanged,
    NotFound,
}

impl<S> Transition<S> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}
