pub mod errors;
pub mod roster;
