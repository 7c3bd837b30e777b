//! Path-keyed page table and the authentication guard in front of it.

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::{
    auth::AuthState,
    models::{Menu, Store},
};

pub const LOGIN_PATH: &str = "/login";

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Page {
    Dashboard,
    Genres,
    Inventory,
    Orders,
    Images,
    Statistics,
    Movements,
    Sales,
    Stores,
    Settings,
    MenuSettings,
    RolePermissions,
    StoreSettings,
    UserActivity,
    Login,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Genres => "/genres",
            Self::Inventory => "/inventory",
            Self::Orders => "/orders",
            Self::Images => "/images",
            Self::Statistics => "/statistics",
            Self::Movements => "/movements",
            Self::Sales => "/sales",
            Self::Stores => "/stores",
            Self::Settings => "/settings",
            Self::MenuSettings => "/settings/menus",
            Self::RolePermissions => "/settings/roles",
            Self::StoreSettings => "/settings/stores",
            Self::UserActivity => "/settings/activity",
            Self::Login => LOGIN_PATH,
        }
    }

    /// Looks up the page for `path`. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::iter().find(|page| page.path() == path)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Tableau de Bord",
            Self::Genres => "Genres",
            Self::Inventory => "Inventaire",
            Self::Orders => "Commandes",
            Self::Images => "Images des Articles",
            Self::Statistics => "Statistiques",
            Self::Movements => "Mouvements",
            Self::Sales => "Caisse de Vente",
            Self::Stores | Self::StoreSettings => "Magasins",
            Self::Settings => "Paramètres",
            Self::MenuSettings => "Menus",
            Self::RolePermissions => "Rôles et permissions",
            Self::UserActivity => "Activité des utilisateurs",
            Self::Login => "Connexion",
        }
    }

    /// The store menu gating this page, if any.
    pub fn menu(&self) -> Option<Menu> {
        match self {
            Self::Dashboard => Some(Menu::Dashboard),
            Self::Inventory => Some(Menu::Inventory),
            Self::Orders => Some(Menu::Orders),
            Self::Images => Some(Menu::Images),
            Self::Statistics => Some(Menu::Statistics),
            Self::Movements => Some(Menu::Movements),
            Self::Sales => Some(Menu::Sales),
            _ => None,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login)
    }
}

fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteOutcome {
    Render { page: Page },
    /// The session is still being established.
    Pending,
    RedirectToLogin { from: String },
    NotFound,
}

/// Resolves `path` for the given session.
///
/// Unknown paths are `NotFound` whatever the session; protected pages
/// redirect to the login page until a user is signed in.
pub fn resolve(path: &str, auth: &AuthState) -> RouteOutcome {
    let Some(page) = Page::from_path(path) else {
        return RouteOutcome::NotFound;
    };
    if page.is_public() {
        return RouteOutcome::Render { page };
    }
    if auth.is_loading {
        return RouteOutcome::Pending;
    }
    if !auth.is_authenticated() {
        return RouteOutcome::RedirectToLogin {
            from: normalize(path).to_string(),
        };
    }
    RouteOutcome::Render { page }
}

/// Navigation entries for a user of `store`. Pages without a menu gate are
/// always listed; without a store every page is.
pub fn navigation(store: Option<&Store>) -> Vec<Page> {
    Page::iter()
        .filter(|page| !page.is_public())
        .filter(|page| match (page.menu(), store) {
            (Some(menu), Some(store)) => store.shows(menu),
            _ => true,
        })
        .collect()
}
