pub mod duel;
pub use duel::*;

pub mod history;
pub use history::*;

pub mod report;
pub use report::*;

pub mod settlement;
pub use settlement::*;
