pub mod error;
pub mod roster;
