pub mod app_state;
pub mod gateway;
pub mod repositories;
pub mod services;
pub mod store;

pub use app_state::AppState;
pub use gateway::{PaymentGateway, PaymentIntentHandle};
pub use store::LedgerStore;
