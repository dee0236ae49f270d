pub mod equilibrium;
pub use equilibrium::*;

pub mod frontier;
pub use frontier::*;

pub mod selector;
pub use selector::*;

pub mod solver;
pub use solver::*;

pub mod support;
pub use support::*;
