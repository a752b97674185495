//! Wire types for wallet and transaction responses (REST).

use super::{TransactionKind, TransactionStatus};
use crate::shared::serde_util::timestamp_ms;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// REST response for a wallet summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletResponse {
    pub wallet_address: String,
    pub holdings: Vec<WalletHoldingResponse>,
    pub total_usd_value: String,
}

/// A single holding from the REST API. Amounts are decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletHoldingResponse {
    pub token_mint: String,
    pub symbol: String,
    pub amount: String,
    pub decimals: u64,
    pub usd_value: String,
    #[serde(default)]
    pub img_src: Option<String>,
}

/// REST response for the transaction list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionsResponse {
    pub transactions: Vec<TransactionResponse>,
    pub total: usize,
}

/// A single transaction from the REST API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionResponse {
    pub id: String,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub amount: String,
    pub symbol: String,
    #[serde(with = "timestamp_ms")]
    pub timestamp: DateTime<Utc>,
    pub tx_signature: Option<String>,
}
