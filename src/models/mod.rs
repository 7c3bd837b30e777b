// Stock and verification
pub mod catalog_item;
pub mod inventory_item;
pub mod movement;
pub mod taxonomy;

// Commerce
pub mod daily_sales;
pub mod order;
pub mod product;
pub mod sale;

// Gallery
pub mod image;

// Settings and access
pub mod activity_log;
pub mod menu_item;
pub mod permission;
pub mod store;
pub mod user;

pub use activity_log::{ActionKind, ActivityLog};
pub use catalog_item::CatalogItem;
pub use daily_sales::DailySales;
pub use image::ProductImage;
pub use inventory_item::{InventoryItem, VerificationStatus};
pub use menu_item::{MenuItem, MenuItemDraft};
pub use movement::{MovementItem, MovementStatus, MovementType};
pub use order::{Order, OrderDraft, OrderLine, OrderStatus, OrderType};
pub use permission::Permission;
pub use product::{CartItem, Product};
pub use sale::{PaymentMethod, Sale, SaleStatus};
pub use store::{Menu, Store, StoreDraft};
pub use taxonomy::{TaxonomyDraft, TaxonomyEntry, TaxonomyKind};
pub use user::{User, UserRole};

use serde::{Deserialize, Serialize};

/// Visual tone a status or category renders with.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}
