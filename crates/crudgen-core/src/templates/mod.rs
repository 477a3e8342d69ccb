pub mod kind;
pub mod manager;
pub mod types;

pub use kind::*;
pub use manager::*;
pub use types::*;
