pub mod balance;
pub mod debit;
pub mod health;
pub mod ledger;
pub mod purchase_intent;
pub mod stripe_webhook;
pub mod withdraw;
pub mod withdrawal_history;
