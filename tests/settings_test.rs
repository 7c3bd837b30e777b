use assert_matches::assert_matches;
use invclothing::{
    errors::ServiceError,
    filters::SearchQuery,
    models::{Menu, MenuItemDraft, StoreDraft, TaxonomyDraft, TaxonomyKind, UserRole},
    seed,
    services::{
        catalog::TaxonomyService, menus::MenuService, permissions::PermissionService,
        stores::StoreService,
    },
};
use rstest::rstest;

#[rstest]
#[case(UserRole::Admin, 7)]
#[case(UserRole::Manager, 4)]
#[case(UserRole::Staff, 1)]
fn seed_role_counts(#[case] role: UserRole, #[case] expected: usize) {
    let service = PermissionService::new(seed::permissions());
    assert_eq!(service.role_count(role), expected);
}

#[test]
fn toggle_role_grants_then_revokes() {
    let mut service = PermissionService::new(seed::permissions());

    assert_eq!(service.toggle_role("4", UserRole::Manager), Some(true));
    assert!(service.is_allowed(UserRole::Manager, "inventory.delete"));
    assert_eq!(service.role_count(UserRole::Manager), 5);

    assert_eq!(service.toggle_role("4", UserRole::Manager), Some(false));
    assert!(!service.is_allowed(UserRole::Manager, "inventory.delete"));
    assert_eq!(service.permissions(), seed::permissions().as_slice());
}

#[test]
fn toggle_role_on_unknown_permission_is_noop() {
    let mut service = PermissionService::new(seed::permissions());
    assert_eq!(service.toggle_role("99", UserRole::Staff), None);
    assert_eq!(service.permissions(), seed::permissions().as_slice());
}

#[test]
fn visible_menus_follow_navigation_order() {
    let service = StoreService::new(seed::stores());
    assert_eq!(
        service.visible_menus("1"),
        Some(vec![
            Menu::Dashboard,
            Menu::Inventory,
            Menu::Orders,
            Menu::Statistics,
            Menu::Sales,
        ])
    );
    assert_eq!(service.visible_menus("9"), None);
}

#[test]
fn new_store_gets_fresh_id_and_dashboard_menu() {
    let mut service = StoreService::new(seed::stores());
    let store = service
        .save(StoreDraft {
            name: "  Boutique Marais ".into(),
            email: "marais@example.com".into(),
            ..StoreDraft::default()
        })
        .unwrap();

    assert_eq!(store.name, "Boutique Marais");
    assert!(store.shows(Menu::Dashboard));
    assert!(!store.shows(Menu::Sales));
    assert_eq!(service.stores().len(), 3);
    assert_eq!(service.get(&store.id), Some(&store));
}

#[test]
fn editing_a_store_replaces_it_in_place() {
    let mut service = StoreService::new(seed::stores());
    let mut draft = service.edit("2").unwrap();
    draft.toggle_menu(Menu::Images);
    draft.phone = "+33 1 00 00 00 00".into();

    service.save(draft).unwrap();

    let store = service.get("2").unwrap();
    assert!(store.shows(Menu::Images));
    assert_eq!(store.phone, "+33 1 00 00 00 00");
    assert_eq!(service.stores()[1].id, "2");
}

#[test]
fn invalid_store_drafts_are_rejected() {
    let mut service = StoreService::new(seed::stores());

    let blank = StoreDraft {
        name: "   ".into(),
        ..StoreDraft::default()
    };
    assert_matches!(service.save(blank), Err(ServiceError::ValidationError(_)));

    let bad_email = StoreDraft {
        name: "Boutique".into(),
        email: "pas-un-email".into(),
        ..StoreDraft::default()
    };
    assert_matches!(service.save(bad_email), Err(ServiceError::ValidationError(_)));

    let unknown = StoreDraft {
        id: "42".into(),
        name: "Fantôme".into(),
        ..StoreDraft::default()
    };
    assert_matches!(service.save(unknown), Err(ServiceError::NotFound(_)));

    assert_eq!(service.stores(), seed::stores().as_slice());
}

#[test]
fn deleting_a_store_keeps_the_others() {
    let mut service = StoreService::new(seed::stores());
    assert_eq!(service.delete("1").map(|s| s.name), Some("Magasin Central".into()));
    assert!(service.delete("1").is_none());
    assert_eq!(service.stores().len(), 1);
}

#[test]
fn menu_toggle_flips_flag() {
    let mut service = MenuService::new(seed::menu_items());
    assert_eq!(service.toggle("4"), Some(false));
    assert_eq!(service.enabled_items().len(), 6);
    assert_eq!(service.toggle("4"), Some(true));
    assert_eq!(service.toggle("404"), None);
}

#[test]
fn menu_add_requires_a_name() {
    let mut service = MenuService::new(seed::menu_items());

    let result = service.add(MenuItemDraft {
        name: "  ".into(),
        ..MenuItemDraft::default()
    });
    assert_matches!(result, Err(ServiceError::ValidationError(_)));

    let item = service
        .add(MenuItemDraft {
            id: "1".into(),
            name: "Rapports".into(),
            description: "Exports mensuels".into(),
            enabled: false,
        })
        .unwrap();
    assert_ne!(item.id, "1");
    assert!(!item.enabled);
    assert_eq!(service.items().len(), 8);
    assert_eq!(service.items()[0].name, "Dashboard");
}

#[test]
fn menu_delete_is_noop_for_unknown_ids() {
    let mut service = MenuService::new(seed::menu_items());
    assert!(service.delete("99").is_none());
    assert!(service.delete("7").is_some());
    assert_eq!(service.items().len(), 6);
}

#[test]
fn taxonomy_save_and_search() {
    let mut genres = TaxonomyService::new(TaxonomyKind::Genre, seed::genres());
    assert_eq!(genres.kind().label(), "Genres");

    let entry = genres
        .save(TaxonomyDraft {
            name: "Mixte".into(),
            description: "   ".into(),
            ..TaxonomyDraft::default()
        })
        .unwrap();
    assert_eq!(entry.description, None);
    assert_eq!(genres.list().len(), 5);

    let hits = genres.search(&SearchQuery::new("enfants"));
    let names: Vec<&str> = hits.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Garçons", "Filles"]);
}

#[test]
fn taxonomy_edit_and_delete() {
    let mut genres = TaxonomyService::new(TaxonomyKind::Genre, seed::genres());
    let mut draft = genres.get("1").unwrap().to_draft();
    draft.name = "Homme".into();

    genres.save(draft).unwrap();
    assert_eq!(genres.get("1").unwrap().name, "Homme");

    assert!(genres.delete("1").is_some());
    assert!(genres.get("1").is_none());
    assert_matches!(
        genres.save(TaxonomyDraft {
            id: "1".into(),
            name: "Homme".into(),
            ..TaxonomyDraft::default()
        }),
        Err(ServiceError::NotFound(_))
    );
}
