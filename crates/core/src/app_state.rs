use std::sync::Arc;

pub use pointbank_primitives::config::AppConfig;

use crate::gateway::StripeGateway;
use crate::services::{PurchaseManager, WalletManager, WithdrawalManager};
use crate::store::pg::{DbPool, PgLedgerStore};

/// Application state: the three managers wired to the Postgres store and
/// the Stripe gateway at startup. No module-level singletons; tests build
/// the managers directly against the in-memory store.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub wallets: WalletManager<PgLedgerStore>,
    pub purchases: PurchaseManager<PgLedgerStore, StripeGateway>,
    pub withdrawals: WithdrawalManager<PgLedgerStore>,
}

impl AppState {
    pub fn new(pool: DbPool, config: AppConfig) -> Arc<Self> {
        let store = PgLedgerStore::new(pool);
        let gateway = StripeGateway::new(&config.stripe);

        Arc::new(Self {
            wallets: WalletManager::new(store.clone()),
            purchases: PurchaseManager::new(store.clone(), gateway),
            withdrawals: WithdrawalManager::new(store),
            config,
        })
    }
}
