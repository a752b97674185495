//! Wallet sub-client — wallet summary and transaction refresh.

use futures_util::future::join;

use super::convert::transactions_from_response;
use super::{Transaction, WalletAction, WalletSummary};
use crate::api::WalletApi;
use crate::client::DashboardClient;
use crate::error::DashboardError;
use crate::resource::{Generation, Transition};
use crate::shared::{ErrorMessage, PubkeyStr};

/// Outcome of one wallet refresh, per slot.
#[derive(Debug)]
pub struct WalletRefresh {
    pub wallet: Result<WalletSummary, DashboardError>,
    pub transactions: Result<Vec<Transaction>, DashboardError>,
}

impl WalletRefresh {
    pub fn is_ok(&self) -> bool {
        self.wallet.is_ok() && self.transactions.is_ok()
    }
}

pub struct Wallet<'a, A> {
    pub(crate) client: &'a DashboardClient<A>,
}

impl<'a, A: WalletApi> Wallet<'a, A> {
    /// Refresh the wallet summary and the transaction list.
    ///
    /// Both slots move to `Loading` together, both requests are issued
    /// concurrently, and each slot completes on its own. Results from a
    /// refresh that was superseded (or cleared) are not applied.
    pub async fn refresh(&self, address: &PubkeyStr) -> Result<WalletRefresh, DashboardError> {
        if address.is_empty() {
            return Err(DashboardError::Validation(
                "wallet address must not be empty".to_string(),
            ));
        }

        let (wallet_generation, transactions_generation) = self
            .client
            .store
            .update(|store| {
                let wallet = store.wallet_mut();
                (wallet.wallet_started(), wallet.transactions_started())
            })
            .await;
        tracing::debug!(
            %address,
            wallet_generation = wallet_generation.value(),
            transactions_generation = transactions_generation.value(),
            "Wallet refresh started"
        );

        let api = &self.client.api;
        let (wallet, transactions) = join(
            api.wallet(address),
            api.transactions(address, self.client.config.transaction_limit),
        )
        .await;

        let wallet = wallet
            .map_err(DashboardError::from)
            .and_then(|resp| WalletSummary::try_from(resp).map_err(DashboardError::from));
        let transactions = transactions
            .map_err(DashboardError::from)
            .and_then(|resp| transactions_from_response(resp).map_err(DashboardError::from));

        let (wallet_transition, transactions_transition) = self
            .client
            .store
            .update(|store| {
                let slice = store.wallet_mut();
                let wallet_transition = match &wallet {
                    Ok(summary) => slice.wallet_succeeded(wallet_generation, summary.clone()),
                    Err(e) => slice.wallet_failed(wallet_generation, ErrorMessage::from(e)),
                };
                let transactions_transition = match &transactions {
                    Ok(txs) => slice.transactions_succeeded(transactions_generation, txs.clone()),
                    Err(e) => {
                        slice.transactions_failed(transactions_generation, ErrorMessage::from(e))
                    }
                };
                (wallet_transition, transactions_transition)
            })
            .await;

        log_completion("wallet", wallet_generation, wallet_transition, &wallet);
        log_completion(
            "transactions",
            transactions_generation,
            transactions_transition,
            &transactions,
        );

        Ok(WalletRefresh {
            wallet,
            transactions,
        })
    }

    /// Drop all wallet data and any in-flight refresh.
    pub async fn clear(&self) {
        self.client.store.dispatch(WalletAction::Clear).await;
    }
}

fn log_completion<T>(
    slot: &'static str,
    generation: Generation,
    transition: Transition,
    result: &Result<T, DashboardError>,
) {
    match (transition, result) {
        (Transition::Stale, _) => tracing::debug!(
            slot,
            generation = generation.value(),
            "Wallet result superseded; store left unchanged"
        ),
        (_, Err(e)) => tracing::warn!(
            slot,
            generation = generation.value(),
            error = %e,
            "Wallet request failed"
        ),
        _ => {}
    }
}
