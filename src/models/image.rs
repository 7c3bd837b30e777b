use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::collection::Entity;
use crate::filters::Searchable;

/// An uploaded product photo shown in the image gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: String,
    pub url: String,
    pub name: String,
    pub product_name: String,
    pub category: String,
    pub upload_date: NaiveDate,
}

impl Entity for ProductImage {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for ProductImage {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.product_name.as_str()]
    }
}
