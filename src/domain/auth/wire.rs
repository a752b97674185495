//! Wire types for auth requests and responses (REST).

use serde::{Deserialize, Serialize};

use super::{EmbeddedWallet, LinkedAccount};

/// Login request body sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub message: String,
    pub signature_bs58: String,
    pub pubkey_bytes: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_embedded_wallet: Option<bool>,
}

/// Login response from the backend.
///
/// Carries the full user profile, so no separate session check is needed
/// after a login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub user_id: String,
    pub wallet_address: String,
    /// Unix seconds.
    pub expires_at: i64,
    pub linked_account: LinkedAccount,
    pub embedded_wallet: Option<EmbeddedWallet>,
    pub x_username: Option<String>,
    pub x_display_name: Option<String>,
}

/// Response from `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MeResponse {
    pub user_id: String,
    pub wallet_address: String,
    pub linked_account: LinkedAccount,
    pub embedded_wallet: Option<EmbeddedWallet>,
    pub x_username: Option<String>,
    pub x_display_name: Option<String>,
    /// Unix seconds.
    pub expires_at: i64,
}
