//! Application store — owns every slice and routes actions to them.
//!
//! There is no global store: the app creates one `DashboardStore` at startup
//! (usually through [`crate::client::DashboardClient`]) and passes it, or a
//! [`StoreHandle`] to it, to whatever needs to dispatch or read.

use crate::domain::auth::{AuthAction, AuthSlice, AuthState, User};
use crate::domain::wallet::{WalletAction, WalletDetailSlice, WalletDetailView};
use crate::resource::Transition;

use async_lock::RwLock;
use std::sync::Arc;

/// Every action the store understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Auth(AuthAction),
    Wallet(WalletAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<WalletAction> for Action {
    fn from(action: WalletAction) -> Self {
        Action::Wallet(action)
    }
}

/// Root state: the auth slice and the wallet-detail slice.
#[derive(Debug, Clone)]
pub struct DashboardStore {
    auth: AuthSlice,
    wallet: WalletDetailSlice,
    clear_wallet_on_logout: bool,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            auth: AuthSlice::new(),
            wallet: WalletDetailSlice::new(),
            clear_wallet_on_logout: true,
        }
    }

    /// Keep the wallet slice untouched on logout.
    pub fn keep_wallet_on_logout(mut self) -> Self {
        self.clear_wallet_on_logout = false;
        self
    }

    /// Apply one action. Transitions never interleave: each call runs to
    /// completion before the next one starts.
    pub fn dispatch(&mut self, action: Action) -> Transition {
        match action {
            Action::Auth(AuthAction::Logout) => {
                self.auth.logout();
                if self.clear_wallet_on_logout {
                    self.wallet.clear();
                }
                tracing::debug!(
                    cleared_wallet = self.clear_wallet_on_logout,
                    "Logged out"
                );
                Transition::Reset
            }
            Action::Auth(action) => self.auth.apply(action),
            Action::Wallet(action) => self.wallet.apply(action),
        }
    }

    // ── Selectors ────────────────────────────────────────────────────────

    pub fn auth(&self) -> &AuthSlice {
        &self.auth
    }

    pub fn wallet(&self) -> &WalletDetailSlice {
        &self.wallet
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&User> {
        if self.auth.is_authenticated() {
            self.auth.user()
        } else {
            None
        }
    }

    pub fn wallet_view(&self) -> WalletDetailView {
        self.wallet.view()
    }

    // ── Request runners only ─────────────────────────────────────────────

    pub(crate) fn auth_mut(&mut self) -> &mut AuthSlice {
        &mut self.auth
    }

    pub(crate) fn wallet_mut(&mut self) -> &mut WalletDetailSlice {
        &mut self.wallet
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Shared handle
// ═════════════════════════════════════════════════════════════════════════════

/// Cloneable handle to one store.
///
/// Locks are held for a single transition or read, never across a request,
/// so several request runners can be in flight against the same store.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Arc<RwLock<DashboardStore>>,
}

impl StoreHandle {
    pub fn new(store: DashboardStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn dispatch(&self, action: impl Into<Action>) -> Transition {
        self.inner.write().await.dispatch(action.into())
    }

    /// Run a read-only selector against the current state.
    pub async fn read<R>(&self, select: impl FnOnce(&DashboardStore) -> R) -> R {
        select(&*self.inner.read().await)
    }

    pub async fn auth_state(&self) -> AuthState {
        self.read(|store| store.auth().snapshot()).await
    }

    pub async fn wallet_view(&self) -> WalletDetailView {
        self.read(DashboardStore::wallet_view).await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.read(DashboardStore::is_authenticated).await
    }

    pub(crate) async fn update<R>(&self, apply: impl FnOnce(&mut DashboardStore) -> R) -> R {
        apply(&mut *self.inner.write().await)
    }
}
