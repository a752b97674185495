//! Auth domain — user profile, sign-in message, and the authentication slice.
//!
//! ## Slice
//!
//! [`AuthSlice`] tracks the authenticated-user resource through the usual
//! `Idle → Loading → Succeeded/Failed` cycle and keeps a stored
//! `is_authenticated` flag that always equals
//! `status == Succeeded && user.is_some()`.
//!
//! Logout is synchronous: it resets the slice to `Idle` immediately, even with
//! a login in flight, and the late login completion is dropped.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::PubkeyStr;

pub use state::{AuthAction, AuthSlice, AuthState};

// ============================================================================
// User profile types
// ============================================================================

/// Full user profile from the Lightcone platform.
///
/// Payload of a successful login or session check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub wallet_address: PubkeyStr,
    pub linked_account: LinkedAccount,
    pub embedded_wallet: Option<EmbeddedWallet>,
    pub x_username: Option<String>,
    pub x_display_name: Option<String>,
    /// Session expiry reported by the backend.
    pub expires_at: DateTime<Utc>,
}

impl User {
    /// Whether the backend session has expired at `now`.
    ///
    /// This does not touch the slice; the caller decides whether to run a
    /// session check or log out.
    pub fn is_session_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Name to show in the dashboard header.
    pub fn display_name(&self) -> &str {
        self.x_display_name
            .as_deref()
            .or(self.x_username.as_deref())
            .unwrap_or(self.wallet_address.as_str())
    }
}

/// A linked identity (wallet, Google OAuth, X OAuth) associated with a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedAccount {
    pub id: String,
    #[serde(rename = "type")]
    pub account_type: LinkedAccountType,
    pub chain: Option<ChainType>,
    pub address: String,
}

/// Type of linked account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkedAccountType {
    Wallet,
    TwitterOauth,
    GoogleOauth,
}

impl LinkedAccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wallet => "wallet",
            Self::TwitterOauth => "twitter_oauth",
            Self::GoogleOauth => "google_oauth",
        }
    }
}

impl std::fmt::Display for LinkedAccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A Privy-managed embedded wallet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddedWallet {
    pub privy_id: String,
    pub chain: ChainType,
    pub address: String,
}

/// Blockchain network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    Solana,
    Ethereum,
}

/// Generate the sign-in message that must be signed by the user's wallet.
///
/// The caller signs this externally (wallet adapter or keypair) and sends
/// the signature in a [`wire::LoginRequest`].
pub fn generate_signin_message(timestamp: u64) -> String {
    format!("Sign in to Lightcone\nTimestamp: {}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(x_display_name: Option<&str>) -> User {
        User {
            id: "1".to_string(),
            wallet_address: PubkeyStr::from("wallet1"),
            linked_account: LinkedAccount {
                id: "la1".to_string(),
                account_type: LinkedAccountType::Wallet,
                chain: Some(ChainType::Solana),
                address: "wallet1".to_string(),
            },
            embedded_wallet: None,
            x_username: None,
            x_display_name: x_display_name.map(str::to_string),
            expires_at: Utc.timestamp_opt(1_800_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_signin_message_format() {
        assert_eq!(
            generate_signin_message(42),
            "Sign in to Lightcone\nTimestamp: 42"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_wallet() {
        assert_eq!(user(None).display_name(), "wallet1");
        assert_eq!(user(Some("Alice")).display_name(), "Alice");
    }

    #[test]
    fn test_session_expiry() {
        let u = user(None);
        assert!(!u.is_session_expired(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
        assert!(u.is_session_expired(Utc.timestamp_opt(1_800_000_000, 0).unwrap()));
    }

    #[test]
    fn test_linked_account_type_serde() {
        let t: LinkedAccountType = serde_json::from_str("\"twitter_oauth\"").unwrap();
        assert_eq!(t, LinkedAccountType::TwitterOauth);
        assert_eq!(t.to_string(), "twitter_oauth");
    }
}
