pub mod purchase_dto;
pub mod wallet_dto;
pub mod withdrawal_dto;

pub use purchase_dto::*;
pub use wallet_dto::*;
pub use withdrawal_dto::*;
