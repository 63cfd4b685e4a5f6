pub mod roster;
pub mod score;
pub mod seed;
pub mod validate;
