//! Data models

pub mod account;
pub mod score;
pub mod transaction;
pub mod network;
pub mod health;

pub use account::*;
pub use score::*;
pub use transaction::*;
pub use network::*;
pub use health::*;
