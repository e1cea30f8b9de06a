//! Player factory for creating test player entities.

use chrono::{DateTime, Utc};
use entity::player::{Profession, Race};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// 2010-01-01T00:00:00Z
const DEFAULT_BIRTHDAY_SECS: i64 = 1_262_304_000;

/// Factory for creating test players with customizable fields.
///
/// Derived columns (`level`, `until_next_level`) are filled from `experience` using the
/// same progression curve the service applies, so seeded rows look like real ones.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::player::PlayerFactory;
///
/// let player = PlayerFactory::new(&db)
///     .name("Legolas")
///     .banned(true)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    title: String,
    race: Race,
    profession: Profession,
    experience: i32,
    birthday: DateTime<Utc>,
    banned: bool,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hero{id}"` where id is auto-incremented
    /// - title: `"Test title"`
    /// - race: `Race::Human`
    /// - profession: `Profession::Warrior`
    /// - experience: `0`
    /// - birthday: 2010-01-01 UTC
    /// - banned: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hero{}", id),
            title: "Test title".to_string(),
            race: Race::Human,
            profession: Profession::Warrior,
            experience: 0,
            birthday: DateTime::from_timestamp(DEFAULT_BIRTHDAY_SECS, 0).unwrap_or_default(),
            banned: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn race(mut self, race: Race) -> Self {
        self.race = race;
        self
    }

    pub fn profession(mut self, profession: Profession) -> Self {
        self.profession = profession;
        self
    }

    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    pub fn birthday(mut self, birthday: DateTime<Utc>) -> Self {
        self.birthday = birthday;
        self
    }

    /// Sets the birthday from milliseconds since the Unix epoch.
    pub fn birthday_millis(mut self, millis: i64) -> Self {
        self.birthday = DateTime::from_timestamp_millis(millis).unwrap_or_default();
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        let experience = i64::from(self.experience);
        let level = (((2500 + 200 * experience) as f64).sqrt() - 50.0) / 100.0;
        let level = level.floor() as i64;
        let until_next_level = 50 * (level + 1) * (level + 2) - experience;

        entity::player::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            title: ActiveValue::Set(self.title),
            race: ActiveValue::Set(self.race),
            profession: ActiveValue::Set(self.profession),
            experience: ActiveValue::Set(self.experience),
            level: ActiveValue::Set(level as i32),
            until_next_level: ActiveValue::Set(until_next_level as i32),
            birthday: ActiveValue::Set(self.birthday),
            banned: ActiveValue::Set(self.banned),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
