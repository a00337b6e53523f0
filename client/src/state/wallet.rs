//! Dashboard wallet state: balance, history, and the open action modal.
//!
//! DESIGN
//! ======
//! Provided at the root next to `AuthState` so modals can apply optimistic
//! updates before navigating back to `/dashboard`, where the next fetch
//! replaces them with backend truth.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use crate::net::types::Transaction;

/// The three money-moving forms reachable from the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalletAction {
    Fund,
    Transfer,
    Withdraw,
}

impl WalletAction {
    pub fn title(self) -> &'static str {
        match self {
            Self::Fund => "Fund Wallet",
            Self::Transfer => "Transfer",
            Self::Withdraw => "Withdraw",
        }
    }

    /// Message shown when the backend gives no reason for a failure.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Fund => "Funding failed",
            Self::Transfer => "Transfer failed",
            Self::Withdraw => "Withdrawal failed",
        }
    }

    /// Transaction `type` recorded for the optimistic history entry.
    pub fn kind(self) -> &'static str {
        match self {
            Self::Fund => "fund",
            Self::Transfer => "transfer",
            Self::Withdraw => "withdraw",
        }
    }

    /// Signed effect of `amount` on the balance.
    pub fn balance_delta(self, amount: f64) -> f64 {
        match self {
            Self::Fund => amount,
            Self::Transfer | Self::Withdraw => -amount,
        }
    }
}

/// Wallet data shown on the dashboard.
#[derive(Clone, Debug, Default)]
pub struct WalletState {
    pub balance: f64,
    pub transactions: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
    pub page: usize,
    pub active_modal: Option<WalletAction>,
    pending_seq: u64,
}

impl WalletState {
    /// Record the outcome of one dashboard load. Either half may fail
    /// independently; the last failure message wins, as both are shown in the
    /// same banner.
    pub fn finish_load(&mut self, balance: Result<f64, String>, transactions: Result<Vec<Transaction>, String>) {
        self.loading = false;
        self.error = None;
        match balance {
            Ok(balance) => self.balance = balance,
            Err(message) => self.error = Some(message),
        }
        match transactions {
            Ok(transactions) => self.transactions = transactions,
            Err(message) => self.error = Some(message),
        }
        self.page = 1;
    }

    /// Reflect a successful submission before the backend is re-read.
    pub fn apply_optimistic(&mut self, action: WalletAction, amount: f64, timestamp: String) {
        self.pending_seq = self.pending_seq.saturating_add(1);
        self.balance += action.balance_delta(amount);
        self.transactions.insert(
            0,
            Transaction {
                id: format!("pending-{}", self.pending_seq),
                amount,
                kind: action.kind().to_owned(),
                status: Some("pending".to_owned()),
                timestamp,
                sender: None,
                receiver: None,
                description: None,
            },
        );
        self.page = 1;
    }

    /// Settle a successful form submission: reflect it optimistically and
    /// close the modal it came from.
    pub fn complete_submission(&mut self, action: WalletAction, amount: f64, timestamp: String) {
        self.apply_optimistic(action, amount, timestamp);
        self.active_modal = None;
    }

    /// Drop all wallet data, e.g. on logout.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
