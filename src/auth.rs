//! Stand-in authentication gate.
//!
//! There is no identity backend: any non-blank email and password pair is
//! accepted after a configurable delay. The signed-in user is shared behind
//! an async lock and the loading flag is an atomic, so route guards running
//! on other tasks can observe a login in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::{
    errors::{ServiceError, ServiceResult, LOGIN_FAILED_MESSAGE},
    models::{User, UserRole},
};

/// Point-in-time view of the session used by route guards.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Raises the loading flag for its lifetime. Clears it even when the login
/// future is dropped mid-flight.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthService {
    user: Arc<RwLock<Option<User>>>,
    loading: Arc<AtomicBool>,
    delay: Duration,
}

impl AuthService {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::default()
        }
    }

    /// Signs in with any non-blank credentials.
    ///
    /// # Returns
    ///
    /// * `Ok(User)` - The signed-in user
    /// * `Err(ServiceError::AuthError)` - Blank email or password; the
    ///   session is left signed out
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> ServiceResult<User> {
        let _loading = LoadingGuard::raise(&self.loading);
        tokio::time::sleep(self.delay).await;

        let mut current = self.user.write().await;

        let email = email.trim();
        if email.is_empty() || password.trim().is_empty() {
            warn!("Rejected login with blank credentials");
            *current = None;
            return Err(ServiceError::AuthError(LOGIN_FAILED_MESSAGE.to_string()));
        }

        let user = User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: email.to_string(),
            role: UserRole::Admin,
            avatar: None,
            store_id: None,
        };
        *current = Some(user.clone());
        info!("User {} signed in", user.email);
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn logout(&self) {
        if let Some(user) = self.user.write().await.take() {
            info!("User {} signed out", user.email);
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub async fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub async fn current_user(&self) -> Option<User> {
        self.user.read().await.clone()
    }

    pub async fn snapshot(&self) -> AuthState {
        AuthState {
            user: self.current_user().await,
            is_loading: self.loading.load(Ordering::SeqCst),
        }
    }
}
