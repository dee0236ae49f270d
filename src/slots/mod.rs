pub mod ledger;
pub use ledger::*;

pub mod slot;
pub use slot::*;

pub mod strategy;
pub use strategy::*;
