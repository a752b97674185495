//! Network collaborator contracts.
//!
//! The crate never issues requests itself. The app plugs in whatever client it
//! uses (REST over `reqwest`, browser `fetch`, a test double) by implementing
//! these traits. Each call resolves exactly once, with a wire response or a
//! [`RequestError`]; timeouts are reported as [`RequestError::Timeout`].

use crate::domain::auth::wire::{LoginRequest, LoginResponse, MeResponse};
use crate::domain::wallet::wire::{TransactionsResponse, WalletResponse};
use crate::error::RequestError;
use crate::shared::PubkeyStr;

/// Auth endpoints: login, session check, logout.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /api/auth/login_or_register_with_message`
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError>;

    /// `GET /api/auth/me`
    async fn me(&self) -> Result<MeResponse, RequestError>;

    /// `POST /api/auth/logout`
    async fn logout(&self) -> Result<(), RequestError>;
}

/// Wallet endpoints: summary and transaction history.
#[allow(async_fn_in_trait)]
pub trait WalletApi {
    /// `GET /api/users/{address}/wallet`
    async fn wallet(&self, address: &PubkeyStr) -> Result<WalletResponse, RequestError>;

    /// `GET /api/users/{address}/transactions?limit={limit}`
    async fn transactions(
        &self,
        address: &PubkeyStr,
        limit: u32,
    ) -> Result<TransactionsResponse, RequestError>;
}
