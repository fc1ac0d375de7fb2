pub mod dtos;
pub mod entities;

pub use dtos::*;
pub use entities::*;
