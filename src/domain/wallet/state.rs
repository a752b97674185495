//! Wallet-detail state container — app-owned, crate-provided transition logic.

use serde::Serialize;

use super::{Transaction, WalletSummary};
use crate::resource::{
    AsyncResource, AsyncStatus, Generation, ResourceAction, ResourceState, Transition,
};
use crate::shared::ErrorMessage;

/// The two resources held by [`WalletDetailSlice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletSlot {
    Wallet,
    Transactions,
}

/// Actions understood by [`WalletDetailSlice`].
#[derive(Debug, Clone, PartialEq)]
pub enum WalletAction {
    Wallet(ResourceAction<WalletSummary>),
    Transactions(ResourceAction<Vec<Transaction>>),
    /// Reset both slots.
    Clear,
}

/// Combined, UI-facing status of both slots. Computed on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletDetailView {
    pub status: AsyncStatus,
    pub error: Option<ErrorMessage>,
    /// Slot whose error is surfaced, when `status` is `Failed`.
    pub failed_slot: Option<WalletSlot>,
}

/// Wallet summary + transaction list, each with its own lifecycle.
///
/// The slots never share a status: the summary can be `Succeeded` while the
/// transactions are still `Loading`. [`WalletDetailSlice::view`] folds them
/// into one status for the UI.
#[derive(Debug, Clone, Default)]
pub struct WalletDetailSlice {
    wallet: AsyncResource<WalletSummary>,
    transactions: AsyncResource<Vec<Transaction>>,
    /// Arrival counter for failures; the lower stamp failed first.
    failure_seq: u64,
    wallet_failed_at: Option<u64>,
    transactions_failed_at: Option<u64>,
}

impl WalletDetailSlice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: WalletAction) -> Transition {
        match action {
            WalletAction::Wallet(action) => apply_slot(
                &mut self.wallet,
                &mut self.wallet_failed_at,
                &mut self.failure_seq,
                action,
            ),
            WalletAction::Transactions(action) => apply_slot(
                &mut self.transactions,
                &mut self.transactions_failed_at,
                &mut self.failure_seq,
                action,
            ),
            WalletAction::Clear => {
                self.clear();
                Transition::Reset
            }
        }
    }

    pub fn wallet_started(&mut self) -> Generation {
        self.wallet_failed_at = None;
        self.wallet.start()
    }

    pub fn wallet_succeeded(&mut self, generation: Generation, summary: WalletSummary) -> Transition {
        self.apply(WalletAction::Wallet(ResourceAction::Succeeded {
            generation,
            payload: summary,
        }))
    }

    pub fn wallet_failed(&mut self, generation: Generation, error: ErrorMessage) -> Transition {
        self.apply(WalletAction::Wallet(ResourceAction::Failed { generation, error }))
    }

    pub fn transactions_started(&mut self) -> Generation {
        self.transactions_failed_at = None;
        self.transactions.start()
    }

    pub fn transactions_succeeded(
        &mut self,
        generation: Generation,
        transactions: Vec<Transaction>,
    ) -> Transition {
        self.apply(WalletAction::Transactions(ResourceAction::Succeeded {
            generation,
            payload: transactions,
        }))
    }

    pub fn transactions_failed(&mut self, generation: Generation, error: ErrorMessage) -> Transition {
        self.apply(WalletAction::Transactions(ResourceAction::Failed {
            generation,
            error,
        }))
    }

    /// Reset both slots to `Idle`. In-flight completions for either are dropped.
    pub fn clear(&mut self) {
        self.wallet.reset();
        self.transactions.reset();
        self.wallet_failed_at = None;
        self.transactions_failed_at = None;
    }

    pub fn wallet(&self) -> &ResourceState<WalletSummary> {
        self.wallet.state()
    }

    pub fn transactions(&self) -> &ResourceState<Vec<Transaction>> {
        self.transactions.state()
    }

    /// Generation in flight for a slot, if any.
    pub fn in_flight(&self, slot: WalletSlot) -> Option<Generation> {
        match slot {
            WalletSlot::Wallet => self.wallet.in_flight(),
            WalletSlot::Transactions => self.transactions.in_flight(),
        }
    }

    /// Fold both slots into one status.
    ///
    /// Precedence: any `Failed` (earliest failure's error wins), then any
    /// `Loading`, then `Succeeded` when both succeeded, otherwise `Idle`.
    pub fn view(&self) -> WalletDetailView {
        let failures = [
            (WalletSlot::Wallet, self.wallet_failed_at, self.wallet.error()),
            (
                WalletSlot::Transactions,
                self.transactions_failed_at,
                self.transactions.error(),
            ),
        ];

        let first_failed = failures
            .into_iter()
            .filter_map(|(slot, at, error)| Some((slot, at?, error)))
            .min_by_key(|(_, at, _)| *at);

        if let Some((slot, _, error)) = first_failed {
            return WalletDetailView {
                status: AsyncStatus::Failed,
                error: error.cloned(),
                failed_slot: Some(slot),
            };
        }

        let statuses = [self.wallet.status(), self.transactions.status()];
        let status = if statuses.contains(&AsyncStatus::Loading) {
            AsyncStatus::Loading
        } else if statuses.iter().all(|s| *s == AsyncStatus::Succeeded) {
            AsyncStatus::Succeeded
        } else {
            AsyncStatus::Idle
        };

        WalletDetailView {
            status,
            error: None,
            failed_slot: None,
        }
    }
}

/// Apply a slot action and keep that slot's failure stamp in step with its
/// status: stamped when a failure is applied, cleared when it leaves `Failed`.
fn apply_slot<T>(
    resource: &mut AsyncResource<T>,
    failed_at: &mut Option<u64>,
    failure_seq: &mut u64,
    action: ResourceAction<T>,
) -> Transition {
    let transition = resource.apply(action);
    match resource.status() {
        AsyncStatus::Failed if transition == Transition::Applied => {
            *failure_seq += 1;
            *failed_at = Some(*failure_seq);
        }
        AsyncStatus::Failed => {}
        _ => *failed_at = None,
    }
    transition
}
