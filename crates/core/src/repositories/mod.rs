pub mod purchase_repository;
pub mod wallet_repository;
pub mod withdrawal_repository;
