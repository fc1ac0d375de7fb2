#![allow(dead_code)]

use pointbank_core::gateway::{PaymentGateway, PaymentIntentHandle};
use pointbank_core::services::{PurchaseManager, WalletManager, WithdrawalManager};
use pointbank_core::store::{LedgerStore, MemLedgerStore};
use pointbank_primitives::error::ApiError;
use pointbank_primitives::models::CurrencyCode;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Gateway double that issues deterministic provider transaction ids.
#[derive(Clone, Default)]
pub struct MockGateway {
    counter: Arc<AtomicU64>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intents_created(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl PaymentGateway for MockGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_payment_intent(
        &self,
        _amount: i64,
        _currency: CurrencyCode,
        _metadata: HashMap<String, String>,
        _payment_method_ref: Option<&str>,
    ) -> Result<PaymentIntentHandle, ApiError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        Ok(PaymentIntentHandle {
            provider_tx_id: format!("pi_test_{}", n),
            client_secret: Some(format!("pi_test_{}_secret", n)),
        })
    }
}

/// Gateway double that rejects every intent, for provider-failure paths.
#[derive(Clone, Default)]
pub struct FailingGateway;

impl PaymentGateway for FailingGateway {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn create_payment_intent(
        &self,
        _amount: i64,
        _currency: CurrencyCode,
        _metadata: HashMap<String, String>,
        _payment_method_ref: Option<&str>,
    ) -> Result<PaymentIntentHandle, ApiError> {
        Err(ApiError::Payment("provider unavailable".into()))
    }
}

pub struct TestContext {
    pub store: MemLedgerStore,
    pub wallets: WalletManager<MemLedgerStore>,
    pub purchases: PurchaseManager<MemLedgerStore, MockGateway>,
    pub withdrawals: WithdrawalManager<MemLedgerStore>,
}

pub fn test_context() -> TestContext {
    let store = MemLedgerStore::new();
    TestContext {
        wallets: WalletManager::new(store.clone()),
        purchases: PurchaseManager::new(store.clone(), MockGateway::new()),
        withdrawals: WithdrawalManager::new(store.clone()),
        store,
    }
}

/// Seeds a wallet through the credit primitive, the way a completed
/// purchase would.
pub fn seed_balance(store: &MemLedgerStore, user_id: Uuid, amount: i64) -> i64 {
    store
        .transaction(|conn| {
            WalletManager::<MemLedgerStore>::credit_in_tx(conn, user_id, amount, "test seed", None)
        })
        .expect("seeding balance failed")
}

/// Sum of signed ledger amounts for the user; must always equal the
/// wallet balance.
pub fn ledger_sum(wallets: &WalletManager<MemLedgerStore>, user_id: Uuid) -> i64 {
    wallets
        .ledger_entries(user_id)
        .expect("ledger read failed")
        .iter()
        .map(|e| e.amount)
        .sum()
}
