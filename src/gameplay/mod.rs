pub mod matrix;
pub use matrix::*;

pub mod player;
pub use player::*;

pub mod sharing;
pub use sharing::*;
