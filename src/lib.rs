//! # Lightcone Dashboard
//!
//! Client-side state for the Lightcone dashboard: authentication and
//! wallet/transaction data, tracked as async resources.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Resource** — `AsyncResource<T>`: the `Idle → Loading → Succeeded/Failed`
//!    state machine with generation-tagged completions
//! 2. **Domain** — Types, wire types, conversions, and the two slices
//!    (`AuthSlice`, `WalletDetailSlice`)
//! 3. **Store** — `DashboardStore` owning both slices, `StoreHandle` to share it
//! 4. **High-Level Client** — `DashboardClient` running requests through an
//!    app-provided collaborator (`AuthApi`, `WalletApi`)
//!
//! The view layer only reads snapshots and dispatches actions; it never
//! mutates a slice directly.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lightcone_dashboard::prelude::*;
//!
//! let client = DashboardClient::builder()
//!     .transaction_limit(25)
//!     .build(my_api)?;
//!
//! client.auth().login(&request).await?;
//! client.wallet().refresh(&address).await?;
//!
//! let view = client.store().wallet_view().await;
//! ```

// ── Layer 1: Resource ────────────────────────────────────────────────────────

/// Shared newtypes used across all slices.
pub mod shared;

/// Async resource lifecycle: status, snapshot, transition function.
pub mod resource;

/// Unified error types.
pub mod error;

// ── Layer 2: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

// ── Layer 3: Store ───────────────────────────────────────────────────────────

/// Root store and shared handle.
pub mod store;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// Network collaborator traits.
pub mod api;

/// `DashboardClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ErrorMessage, PubkeyStr};

    // Resource lifecycle
    pub use crate::resource::{
        AsyncResource, AsyncStatus, Generation, ResourceAction, ResourceState, Transition,
    };

    // Domain types — auth
    pub use crate::domain::auth::wire::LoginRequest;
    pub use crate::domain::auth::{
        generate_signin_message, AuthAction, AuthSlice, AuthState, ChainType, EmbeddedWallet,
        LinkedAccount, LinkedAccountType, User,
    };

    // Domain types — wallet
    pub use crate::domain::wallet::client::WalletRefresh;
    pub use crate::domain::wallet::{
        Transaction, TransactionKind, TransactionStatus, WalletAction, WalletDetailSlice,
        WalletDetailView, WalletHolding, WalletSlot, WalletSummary,
    };

    // Errors
    pub use crate::error::{ConversionError, DashboardError, RequestError};

    // Store
    pub use crate::store::{Action, DashboardStore, StoreHandle};

    // Collaborators + client
    pub use crate::api::{AuthApi, WalletApi};
    pub use crate::client::{
        AuthClient, DashboardClient, DashboardClientBuilder, DashboardConfig, WalletClient,
    };
}
