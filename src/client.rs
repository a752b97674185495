//! High-level client — `DashboardClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, configuration, and accessor methods.

use crate::domain::auth::client::Auth;
use crate::domain::auth::User;
use crate::domain::wallet::client::Wallet;
use crate::error::DashboardError;
use crate::store::{DashboardStore, StoreHandle};

// Re-export sub-client types for convenience.
pub use crate::domain::auth::client::Auth as AuthClient;
pub use crate::domain::wallet::client::Wallet as WalletClient;

/// Default page size for the transaction list.
pub const DEFAULT_TRANSACTION_LIMIT: u32 = 50;

/// Settings fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Page size requested from `WalletApi::transactions`.
    pub transaction_limit: u32,
    /// Reset the wallet slice when the user logs out.
    pub clear_wallet_on_logout: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            transaction_limit: DEFAULT_TRANSACTION_LIMIT,
            clear_wallet_on_logout: true,
        }
    }
}

/// The primary entry point: a store plus the collaborator that feeds it.
///
/// Provides nested sub-client accessors for each domain:
/// `client.auth()`, `client.wallet()`.
pub struct DashboardClient<A> {
    pub(crate) api: A,
    pub(crate) store: StoreHandle,
    pub(crate) config: DashboardConfig,
}

impl DashboardClient<()> {
    /// Start building a client. The collaborator type is fixed by
    /// [`DashboardClientBuilder::build`].
    pub fn builder() -> DashboardClientBuilder {
        DashboardClientBuilder::default()
    }
}

impl<A> DashboardClient<A> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_, A> {
        Auth { client: self }
    }

    pub fn wallet(&self) -> Wallet<'_, A> {
        Wallet { client: self }
    }

    /// Handle for the view layer: read snapshots, dispatch intents.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

impl<A: Clone> Clone for DashboardClient<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct DashboardClientBuilder {
    config: DashboardConfig,
    session: Option<User>,
}

impl DashboardClientBuilder {
    pub fn transaction_limit(mut self, limit: u32) -> Self {
        self.config.transaction_limit = limit;
        self
    }

    pub fn clear_wallet_on_logout(mut self, clear: bool) -> Self {
        self.config.clear_wallet_on_logout = clear;
        self
    }

    /// Start with an already-authenticated user (e.g. restored by the host app).
    pub fn session(mut self, user: User) -> Self {
        self.session = Some(user);
        self
    }

    pub fn build<A>(self, api: A) -> Result<DashboardClient<A>, DashboardError> {
        if self.config.transaction_limit == 0 {
            return Err(DashboardError::Validation(
                "transaction_limit must be greater than zero".to_string(),
            ));
        }

        let mut store = DashboardStore::new();
        if !self.config.clear_wallet_on_logout {
            store = store.keep_wallet_on_logout();
        }

        // Hydrate through a full request cycle so the auth invariant holds.
        if let Some(user) = self.session {
            let auth = store.auth_mut();
            let generation = auth.login_started();
            auth.login_succeeded(generation, user);
        }

        Ok(DashboardClient {
            api,
            store: StoreHandle::new(store),
            config: self.config,
        })
    }
}
