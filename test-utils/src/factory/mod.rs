//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let player = factory::create_player(&db).await?;
//!
//!     // Create several players at once
//!     let players = factory::helpers::create_players(&db, 5).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! use entity::player::{Profession, Race};
//! use test_utils::factory::player::PlayerFactory;
//!
//! let player = PlayerFactory::new(&db)
//!     .name("Gimli")
//!     .race(Race::Dwarf)
//!     .profession(Profession::Warrior)
//!     .experience(5_000)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod player;

pub use player::create_player;
