//! SeaORM entities for the player registry database.

pub mod prelude;

pub mod player;
