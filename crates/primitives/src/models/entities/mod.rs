pub mod enum_types;
pub mod ledger_entry;
pub mod purchase;
pub mod wallet;
pub mod withdrawal;

pub use enum_types::*;
pub use ledger_entry::*;
pub use purchase::*;
pub use wallet::*;
pub use withdrawal::*;
