use tracing::{info, instrument};

use crate::{
    collection::EntityCollection,
    filters::{apply_filter, Filter, SearchQuery, Selection},
    models::ProductImage,
};

#[derive(Clone, Debug, Default)]
pub struct ImageFilter {
    pub category: Selection<String>,
    pub search: SearchQuery,
}

impl Filter<ProductImage> for ImageFilter {
    fn matches(&self, image: &ProductImage) -> bool {
        self.category.matches(&image.category) && self.search.matches_item(image)
    }
}

/// Product photo gallery.
#[derive(Clone, Debug, Default)]
pub struct ImageService {
    images: EntityCollection<ProductImage>,
}

impl ImageService {
    pub fn new(images: Vec<ProductImage>) -> Self {
        Self {
            images: EntityCollection::new(images),
        }
    }

    pub fn images(&self) -> &[ProductImage] {
        self.images.as_slice()
    }

    pub fn filtered(&self, filter: &ImageFilter) -> Vec<ProductImage> {
        apply_filter(self.images.as_slice(), filter)
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Option<ProductImage> {
        let removed = self.images.remove(id);
        if let Some(image) = &removed {
            info!("Deleted image {}", image.name);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn search_covers_file_and_product_names() {
        let service = ImageService::new(seed::images());

        let by_file = ImageFilter {
            search: SearchQuery::new("ROBE-ETE"),
            ..ImageFilter::default()
        };
        assert_eq!(service.filtered(&by_file)[0].id, "2");

        let by_product = ImageFilter {
            category: Selection::Only("T-shirts".into()),
            search: SearchQuery::new("coton bio"),
        };
        assert_eq!(service.filtered(&by_product).len(), 1);
    }

    #[test]
    fn delete_is_noop_for_unknown_ids() {
        let mut service = ImageService::new(seed::images());
        assert!(service.delete("9").is_none());
        assert_eq!(service.delete("1").map(|i| i.id), Some("1".to_string()));
        assert_eq!(service.images().len(), 1);
    }
}
