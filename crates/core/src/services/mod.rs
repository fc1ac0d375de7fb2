pub mod purchase_service;
pub mod wallet_service;
pub mod webhook_service;
pub mod withdrawal_service;

pub use purchase_service::{PassThroughPricing, PricingPolicy, PurchaseManager};
pub use wallet_service::{DebitOutcome, WalletManager};
pub use webhook_service::{StripeWebhook, WebhookOutcome};
pub use withdrawal_service::WithdrawalManager;
