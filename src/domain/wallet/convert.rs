//! Conversions from wallet wire types to domain types.

use super::wire::{TransactionResponse, TransactionsResponse, WalletHoldingResponse, WalletResponse};
use super::{Transaction, WalletHolding, WalletSummary};
use crate::error::ConversionError;
use crate::shared::PubkeyStr;
use rust_decimal::Decimal;
use std::str::FromStr;

impl TryFrom<WalletResponse> for WalletSummary {
    type Error = ConversionError;

    fn try_from(resp: WalletResponse) -> Result<Self, Self::Error> {
        let address = PubkeyStr::from(resp.wallet_address);
        if address.is_empty() {
            return Err(ConversionError::MissingField("wallet_address"));
        }

        Ok(WalletSummary {
            address,
            holdings: resp
                .holdings
                .into_iter()
                .map(WalletHolding::try_from)
                .collect::<Result<_, _>>()?,
            total_usd_value: parse_decimal("total_usd_value", &resp.total_usd_value)?,
        })
    }
}

impl TryFrom<WalletHoldingResponse> for WalletHolding {
    type Error = ConversionError;

    fn try_from(h: WalletHoldingResponse) -> Result<Self, Self::Error> {
        Ok(WalletHolding {
            amount: parse_decimal("amount", &h.amount)?,
            usd_value: parse_decimal("usd_value", &h.usd_value)?,
            token_mint: PubkeyStr::from(h.token_mint),
            symbol: h.symbol,
            decimals: h.decimals,
            img_src: h.img_src.unwrap_or_default(),
        })
    }
}

impl TryFrom<TransactionResponse> for Transaction {
    type Error = ConversionError;

    fn try_from(t: TransactionResponse) -> Result<Self, Self::Error> {
        if t.id.is_empty() {
            return Err(ConversionError::MissingField("id"));
        }
        Ok(Transaction {
            amount: parse_decimal("amount", &t.amount)?,
            id: t.id,
            kind: t.kind,
            status: t.status,
            symbol: t.symbol,
            timestamp: t.timestamp,
            tx_signature: t.tx_signature,
        })
    }
}

/// Convert a whole page, failing on the first invalid transaction.
pub(crate) fn transactions_from_response(
    resp: TransactionsResponse,
) -> Result<Vec<Transaction>, ConversionError> {
    resp.transactions
        .into_iter()
        .map(Transaction::try_from)
        .collect()
}

fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, ConversionError> {
    Decimal::from_str(value).map_err(|_| ConversionError::InvalidDecimal {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wallet::{TransactionKind, TransactionStatus};

    fn wallet_json(total: &str) -> String {
        format!(
            r#"{{
                "wallet_address": "wallet1",
                "holdings": [
                    {{ "token_mint": "usdc", "symbol": "USDC", "amount": "125.50", "decimals": 6, "usd_value": "125.50" }},
                    {{ "token_mint": "sol", "symbol": "SOL", "amount": "2", "decimals": 9, "usd_value": "300.00", "img_src": "sol.png" }}
                ],
                "total_usd_value": "{total}"
            }}"#
        )
    }

    #[test]
    fn test_wallet_response_conversion() {
        let resp: WalletResponse = serde_json::from_str(&wallet_json("425.50")).unwrap();
        let summary = WalletSummary::try_from(resp).unwrap();
        assert_eq!(summary.address.as_str(), "wallet1");
        assert_eq!(summary.total_usd_value, Decimal::from_str("425.50").unwrap());
        assert_eq!(summary.holdings.len(), 2);
        assert_eq!(summary.holdings[0].img_src, "");
        let sol = summary.holding(&PubkeyStr::from("sol")).unwrap();
        assert_eq!(sol.amount, Decimal::from(2));
        assert_eq!(sol.img_src, "sol.png");
    }

    #[test]
    fn test_wallet_response_rejects_bad_decimal() {
        let resp: WalletResponse = serde_json::from_str(&wallet_json("lots")).unwrap();
        let err = WalletSummary::try_from(resp).unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidDecimal {
                field: "total_usd_value",
                value: "lots".to_string(),
            }
        );
    }

    #[test]
    fn test_transactions_response_conversion() {
        let json = r#"{
            "transactions": [
                { "id": "t1", "kind": "deposit", "status": "confirmed", "amount": "100", "symbol": "USDC", "timestamp": 1740076800000, "tx_signature": "sig1" },
                { "id": "t2", "kind": "withdraw", "status": "pending", "amount": "40.5", "symbol": "USDC", "timestamp": 1740076900000, "tx_signature": null }
            ],
            "total": 2
        }"#;
        let resp: TransactionsResponse = serde_json::from_str(json).unwrap();
        let txs = transactions_from_response(resp).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].kind, TransactionKind::Deposit);
        assert_eq!(txs[0].timestamp.timestamp(), 1740076800);
        assert_eq!(txs[1].status, TransactionStatus::Pending);
        assert_eq!(txs[1].signed_amount(), Decimal::from_str("-40.5").unwrap());
    }

    #[test]
    fn test_transactions_response_fails_on_first_invalid() {
        let json = r#"{
            "transactions": [
                { "id": "", "kind": "trade", "status": "failed", "amount": "1", "symbol": "SOL", "timestamp": 1740076800000, "tx_signature": null }
            ],
            "total": 1
        }"#;
        let resp: TransactionsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            transactions_from_response(resp).unwrap_err(),
            ConversionError::MissingField("id")
        );
    }
}
