//! Demonstration data the back office boots with.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    aggregates::Trend,
    config::AppConfig,
    models::{
        ActivityLog, CartItem, CatalogItem, DailySales, InventoryItem, Menu, MenuItem,
        MovementItem, MovementStatus, MovementType, Order, OrderLine, OrderStatus, OrderType,
        PaymentMethod, Permission, Product, ProductImage, Sale, SaleStatus, Store,
        TaxonomyEntry, TaxonomyKind, UserRole,
    },
    services::{
        activity::ActivityService,
        catalog::TaxonomyService,
        dashboard::{DashboardService, DashboardTrends},
        images::ImageService,
        inventory::InventoryService,
        menus::MenuService,
        movements::MovementService,
        orders::OrderService,
        permissions::PermissionService,
        sales::PointOfSale,
        statistics::StatisticsService,
        stores::StoreService,
    },
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0).unwrap_or_default()
}

pub fn inventory_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(
            "1",
            "T-shirt Coton Bio Homme",
            "TSH-CB-H-001",
            45,
            50,
            dec!(29.99),
            "T-shirts",
        ),
        InventoryItem::new(
            "2",
            "Robe d'été Femme",
            "ROB-ETE-F-001",
            30,
            30,
            dec!(59.99),
            "Robes",
        )
        .verified(),
        InventoryItem::new(
            "3",
            "Pantalon Chino Homme",
            "PAN-CH-H-003",
            25,
            25,
            dec!(49.99),
            "Pantalons",
        ),
    ]
}

fn movement(
    id: &str,
    product: (&str, &str, Decimal, &str),
    quantity: u32,
    movement_type: MovementType,
    status: MovementStatus,
    day: NaiveDate,
    store: &str,
) -> MovementItem {
    let (name, sku, price, category) = product;
    MovementItem {
        id: id.into(),
        name: name.into(),
        sku: sku.into(),
        quantity,
        price,
        category: category.into(),
        movement_type,
        status,
        date: day,
        store: store.into(),
    }
}

pub fn movements() -> Vec<MovementItem> {
    vec![
        movement(
            "1",
            ("T-shirt Coton Bio Homme", "TSH-CB-H-001", dec!(29.99), "T-shirts"),
            5,
            MovementType::Received,
            MovementStatus::Pending,
            date(2023, 10, 15),
            "Magasin Central",
        ),
        movement(
            "2",
            ("Robe d'été Femme", "ROB-ETE-F-001", dec!(59.99), "Robes"),
            3,
            MovementType::Given,
            MovementStatus::Completed,
            date(2023, 10, 12),
            "Boutique Rivoli",
        ),
        movement(
            "3",
            ("Pantalon Chino Homme", "PAN-CH-H-003", dec!(49.99), "Pantalons"),
            8,
            MovementType::Received,
            MovementStatus::Completed,
            date(2023, 10, 10),
            "Entrepôt Nord",
        ),
        movement(
            "4",
            ("Chemise Lin Homme", "CHE-LIN-H-002", dec!(45.99), "Chemises"),
            4,
            MovementType::Given,
            MovementStatus::Pending,
            date(2023, 10, 14),
            "Boutique Marais",
        ),
    ]
}

/// The stored total of `ORD-001` does not match its lines; it is kept as
/// recorded.
pub fn orders(now: DateTime<Utc>) -> Vec<Order> {
    vec![
        Order {
            id: "ORD-001".into(),
            order_type: OrderType::Stock,
            status: OrderStatus::Pending,
            store: "Magasin Central".into(),
            items: vec![
                OrderLine {
                    id: "1".into(),
                    name: "T-shirt Coton Bio Homme".into(),
                    quantity: 50,
                    price: dec!(29.99),
                },
                OrderLine {
                    id: "2".into(),
                    name: "Robe d'été Femme".into(),
                    quantity: 30,
                    price: dec!(59.99),
                },
            ],
            total: dec!(3299.70),
            date: now,
        },
        Order {
            id: "ORD-002".into(),
            order_type: OrderType::Surplus,
            status: OrderStatus::Approved,
            store: "Boutique Rivoli".into(),
            items: vec![OrderLine {
                id: "4".into(),
                name: "Chemise Lin Homme".into(),
                quantity: 10,
                price: dec!(45.99),
            }],
            total: dec!(459.90),
            date: now - Duration::days(2),
        },
    ]
}

pub fn products() -> Vec<Product> {
    let product = |id: &str, name: &str, sku: &str, price: Decimal, category: &str, stock: u32| {
        Product {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            price,
            category: category.into(),
            stock,
            image: Some("https://via.placeholder.com/100".into()),
        }
    };
    vec![
        product("1", "T-shirt Coton Bio Homme", "TSH-CB-H-001", dec!(29.99), "T-shirts", 45),
        product("2", "Robe d'été Femme", "ROB-ETE-F-001", dec!(59.99), "Robes", 30),
        product("3", "Pantalon Chino Homme", "PAN-CH-H-003", dec!(49.99), "Pantalons", 25),
        product("4", "Chemise Lin Homme", "CHE-LIN-H-002", dec!(45.99), "Chemises", 20),
    ]
}

pub fn recent_sales() -> Vec<Sale> {
    let products = products();
    let line = |index: usize, quantity: u32| {
        products
            .get(index)
            .cloned()
            .map(|product| CartItem::new(product, quantity))
    };
    let day = date(2023, 10, 15);
    vec![
        Sale {
            id: "S001".into(),
            items: [line(0, 2), line(2, 1)].into_iter().flatten().collect(),
            total: dec!(109.97),
            payment_method: PaymentMethod::Card,
            date: at(day, 14, 30),
            status: SaleStatus::Completed,
        },
        Sale {
            id: "S002".into(),
            items: [line(1, 1)].into_iter().flatten().collect(),
            total: dec!(59.99),
            payment_method: PaymentMethod::Cash,
            date: at(day, 13, 45),
            status: SaleStatus::Completed,
        },
    ]
}

/// Journal entries placed relative to `now`.
pub fn activity_logs(now: DateTime<Utc>) -> Vec<ActivityLog> {
    let entry = |id: &str,
                 user_id: &str,
                 user_name: &str,
                 action: &str,
                 details: &str,
                 ago: Duration| ActivityLog {
        id: id.into(),
        user_id: user_id.into(),
        user_name: user_name.into(),
        action: action.into(),
        details: details.into(),
        timestamp: now - ago,
    };
    vec![
        entry(
            "1",
            "1",
            "Admin User",
            "Update",
            "A modifié les paramètres du magasin \"Magasin Central\"",
            Duration::minutes(30),
        ),
        entry(
            "2",
            "2",
            "Claire Martin",
            "Create",
            "A créé un nouvel article \"T-shirt Homme Coton Bio\"",
            Duration::hours(2),
        ),
        entry(
            "3",
            "3",
            "Thomas Petit",
            "Delete",
            "A supprimé l'article \"Chemise Femme Lin Bleu\"",
            Duration::hours(5),
        ),
        entry(
            "4",
            "2",
            "Claire Martin",
            "Login",
            "S'est connectée au système depuis l'adresse IP 192.168.1.34",
            Duration::hours(8),
        ),
        entry(
            "5",
            "4",
            "Sophie Renard",
            "Create",
            "A ajouté un nouveau magasin \"Boutique Rivoli\"",
            Duration::hours(24),
        ),
        entry(
            "6",
            "1",
            "Admin User",
            "Update",
            "A modifié les permissions du rôle \"Manager\"",
            Duration::hours(25),
        ),
        entry(
            "7",
            "3",
            "Thomas Petit",
            "Logout",
            "S'est déconnecté du système",
            Duration::hours(26),
        ),
    ]
}

pub fn permissions() -> Vec<Permission> {
    use UserRole::{Admin, Manager, Staff};
    let permission = |id: &str, name: &str, description: &str, roles: &[UserRole]| Permission {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        roles: roles.iter().copied().collect(),
    };
    vec![
        permission("1", "inventory.view", "Voir l'inventaire", &[Admin, Manager, Staff]),
        permission("2", "inventory.create", "Créer des articles d'inventaire", &[Admin, Manager]),
        permission("3", "inventory.update", "Modifier des articles d'inventaire", &[Admin, Manager]),
        permission("4", "inventory.delete", "Supprimer des articles d'inventaire", &[Admin]),
        permission("5", "users.manage", "Gérer les utilisateurs", &[Admin]),
        permission("6", "reports.view", "Voir les rapports", &[Admin, Manager]),
        permission("7", "settings.edit", "Modifier les paramètres", &[Admin]),
    ]
}

pub fn stores() -> Vec<Store> {
    vec![
        Store {
            id: "1".into(),
            name: "Magasin Central".into(),
            address: "123 Rue Principale, Paris, 75001".into(),
            phone: "+33 1 23 45 67 89".into(),
            email: "central@example.com".into(),
            enabled_menus: BTreeSet::from([
                Menu::Dashboard,
                Menu::Inventory,
                Menu::Orders,
                Menu::Statistics,
                Menu::Sales,
            ]),
        },
        Store {
            id: "2".into(),
            name: "Boutique Rivoli".into(),
            address: "45 Rue de Rivoli, Paris, 75004".into(),
            phone: "+33 1 98 76 54 32".into(),
            email: "rivoli@example.com".into(),
            enabled_menus: BTreeSet::from([Menu::Dashboard, Menu::Inventory, Menu::Sales]),
        },
    ]
}

pub fn menu_items() -> Vec<MenuItem> {
    [
        ("1", "Dashboard", "Vue d'ensemble et statistiques"),
        ("2", "Inventaire", "Gestion des articles et stock"),
        ("3", "Commandes", "Suivi des commandes et livraisons"),
        ("4", "Images", "Gestion des images des produits"),
        ("5", "Statistiques", "Analyse des ventes et tendances"),
        ("6", "Mouvements", "Suivi des entrées et sorties"),
        ("7", "Vente", "Module de caisse et ventes"),
    ]
    .into_iter()
    .map(|(id, name, description)| MenuItem {
        id: id.into(),
        name: name.into(),
        enabled: true,
        description: description.into(),
    })
    .collect()
}

pub fn genres() -> Vec<TaxonomyEntry> {
    [
        ("1", "Hommes", "Vêtements pour hommes adultes"),
        ("2", "Femmes", "Vêtements pour femmes adultes"),
        ("3", "Garçons", "Vêtements pour garçons (enfants)"),
        ("4", "Filles", "Vêtements pour filles (enfants)"),
    ]
    .into_iter()
    .map(|(id, name, description)| TaxonomyEntry {
        id: id.into(),
        name: name.into(),
        description: Some(description.into()),
    })
    .collect()
}

pub fn images() -> Vec<ProductImage> {
    vec![
        ProductImage {
            id: "1".into(),
            url: "https://images.pexels.com/photos/19090/pexels-photo.jpg".into(),
            name: "tshirt-homme-blanc-001.jpg".into(),
            product_name: "T-shirt Coton Bio Homme".into(),
            category: "T-shirts".into(),
            upload_date: date(2024, 3, 15),
        },
        ProductImage {
            id: "2".into(),
            url: "https://images.pexels.com/photos/996329/pexels-photo-996329.jpeg".into(),
            name: "robe-ete-femme-001.jpg".into(),
            product_name: "Robe d'été Femme".into(),
            category: "Robes".into(),
            upload_date: date(2024, 3, 14),
        },
    ]
}

pub fn daily_sales() -> Vec<DailySales> {
    [
        (1, 12500, 45, 120),
        (2, 15000, 52, 145),
        (3, 13200, 48, 130),
        (4, 16800, 58, 160),
        (5, 14500, 50, 140),
        (6, 18000, 62, 180),
        (7, 16000, 55, 150),
    ]
    .into_iter()
    .map(|(day, revenue, orders, items)| DailySales {
        date: date(2024, 3, day),
        revenue: Decimal::from(revenue),
        orders,
        items,
    })
    .collect()
}

/// Catalog articles; some are not yet classified on every axis.
pub fn catalog_items(now: DateTime<Utc>) -> Vec<CatalogItem> {
    let item = |id: &str,
                name: &str,
                sku: &str,
                genre: &str,
                quantity: u32,
                reorder_point: u32,
                age_days: i64| {
        let created_at = now - Duration::days(age_days);
        CatalogItem {
            id: id.into(),
            name: String::from(name),
            sku: sku.into(),
            genre_id: genre.into(),
            class_id: "1".into(),
            material_id: if id == "4" { String::new() } else { "1".into() },
            pattern_id: "1".into(),
            design_id: if id == "5" { String::new() } else { "1".into() },
            price: dec!(39.99),
            cost: dec!(18.50),
            quantity,
            reorder_point,
            store_id: "1".into(),
            created_at,
            updated_at: created_at,
        }
    };
    vec![
        item("1", "T-shirt Coton Bio Homme", "TSH-CB-H-001", "1", 45, 10, 40),
        item("2", "Robe d'été Femme", "ROB-ETE-F-001", "2", 30, 10, 20),
        item("3", "Pantalon Chino Homme", "PAN-CH-H-003", "1", 8, 10, 3),
        item("4", "Sweat Garçon", "SWT-G-004", "3", 0, 5, 2),
        item("5", "Jupe Plissée Fille", "JUP-F-005", "4", 12, 5, 1),
        item("6", "Chemise Lin Homme", "CHE-LIN-H-002", "1", 20, 6, 60),
    ]
}

pub fn dashboard_trends() -> DashboardTrends {
    DashboardTrends {
        total_items: Trend(dec!(12)),
        low_stock: Trend(dec!(-8)),
        catalog_complete: Trend(dec!(5)),
        new_items: Trend(dec!(24)),
    }
}

/// Every page service loaded with the demonstration data.
#[derive(Clone, Debug)]
pub struct SeedData {
    pub inventory: InventoryService,
    pub movements: MovementService,
    pub orders: OrderService,
    pub sales: PointOfSale,
    pub activity: ActivityService,
    pub permissions: PermissionService,
    pub stores: StoreService,
    pub menus: MenuService,
    pub genres: TaxonomyService,
    pub images: ImageService,
    pub statistics: StatisticsService,
    pub dashboard: DashboardService,
}

impl SeedData {
    pub fn load(config: &AppConfig, now: DateTime<Utc>) -> Self {
        Self {
            inventory: InventoryService::new(inventory_items()),
            movements: MovementService::new(movements()),
            orders: OrderService::new(orders(now)),
            sales: PointOfSale::new(products(), recent_sales(), config.stock_policy),
            activity: ActivityService::new(activity_logs(now), config.activity_order),
            permissions: PermissionService::new(permissions()),
            stores: StoreService::new(stores()),
            menus: MenuService::new(menu_items()),
            genres: TaxonomyService::new(TaxonomyKind::Genre, genres()),
            images: ImageService::new(images()),
            statistics: StatisticsService::new(daily_sales()),
            dashboard: DashboardService::new(
                catalog_items(now),
                dashboard_trends(),
                config.recent_item_days,
            ),
        }
    }
}
