//! Wallet domain — wallet summary, transaction history, and the wallet-detail slice.

pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::PubkeyStr;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use state::{WalletAction, WalletDetailSlice, WalletDetailView, WalletSlot};

// ─── Wallet summary ──────────────────────────────────────────────────────────

/// Balances held by one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSummary {
    pub address: PubkeyStr,
    pub holdings: Vec<WalletHolding>,
    pub total_usd_value: Decimal,
}

impl WalletSummary {
    pub fn holding(&self, token_mint: &PubkeyStr) -> Option<&WalletHolding> {
        self.holdings.iter().find(|h| &h.token_mint == token_mint)
    }
}

/// A wallet holding (one token balance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletHolding {
    pub token_mint: PubkeyStr,
    pub symbol: String,
    pub amount: Decimal,
    pub decimals: u64,
    pub usd_value: Decimal,
    pub img_src: String,
}

// ─── Transactions ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Trade,
    Transfer,
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdraw => write!(f, "Withdraw"),
            TransactionKind::Trade => write!(f, "Trade"),
            TransactionKind::Transfer => write!(f, "Transfer"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

/// A validated, domain-level wallet transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub amount: Decimal,
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub tx_signature: Option<String>,
}

impl Transaction {
    /// Signed amount: withdrawals count as outflows.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Withdraw => -self.amount,
            _ => self.amount,
        }
    }
}
