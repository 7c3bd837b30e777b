#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use invclothing::models::{
    ActivityLog, InventoryItem, MovementItem, MovementStatus, MovementType, OrderLine, Product,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub fn product(id: &str, price: Decimal, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Produit {}", id),
        sku: format!("SKU-{}", id),
        price,
        category: "T-shirts".to_string(),
        stock,
        image: None,
    }
}

pub fn product_in(id: &str, name: &str, category: &str) -> Product {
    Product {
        name: name.to_string(),
        category: category.to_string(),
        ..product(id, dec!(10), 10)
    }
}

pub fn inventory_item(id: &str, quantity: u32, expected_quantity: u32) -> InventoryItem {
    InventoryItem::new(
        id,
        format!("Article {}", id),
        format!("SKU-{}", id),
        quantity,
        expected_quantity,
        dec!(29.99),
        "T-shirts",
    )
}

pub fn movement(id: &str, movement_type: MovementType, status: MovementStatus) -> MovementItem {
    MovementItem {
        id: id.to_string(),
        name: format!("Article {}", id),
        sku: format!("SKU-{}", id),
        quantity: 2,
        price: dec!(10),
        category: "Robes".to_string(),
        movement_type,
        status,
        date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
        store: "Magasin Central".to_string(),
    }
}

pub fn order_line(id: &str, quantity: u32, price: Decimal) -> OrderLine {
    OrderLine {
        id: id.to_string(),
        name: format!("Ligne {}", id),
        quantity,
        price,
    }
}

pub fn activity(id: &str, action: &str, timestamp: DateTime<Utc>) -> ActivityLog {
    ActivityLog {
        id: id.to_string(),
        user_id: "1".to_string(),
        user_name: "Admin User".to_string(),
        action: action.to_string(),
        details: format!("Action {}", id),
        timestamp,
    }
}
