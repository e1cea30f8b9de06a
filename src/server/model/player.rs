//! Player domain models and parameters.
//!
//! Provides the domain model for a stored player, parameter types for create/update
//! operations, and the filter and page request used by player listings. Request DTOs are
//! validated while they are converted into parameters, so the service layer only ever
//! sees values inside the allowed bounds.

use chrono::{DateTime, Datelike, Utc};

use crate::{
    model::player::{
        CreatePlayerDto, PlayerDto, PlayerOrder, Profession as ProfessionDto, Race as RaceDto,
        UpdatePlayerDto,
    },
    server::error::AppError,
};

pub use entity::player::{Profession, Race};

/// Longest accepted player name, in characters.
pub const MAX_NAME_LENGTH: usize = 12;
/// Longest accepted player title, in characters.
pub const MAX_TITLE_LENGTH: usize = 30;
/// Highest accepted experience total.
pub const MAX_EXPERIENCE: i32 = 10_000_000;
/// Earliest accepted birth year (inclusive).
pub const MIN_BIRTH_YEAR: i32 = 2000;
/// Latest accepted birth year (inclusive).
pub const MAX_BIRTH_YEAR: i32 = 3000;

/// Number of players per page when the request does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 3;

/// A stored player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub birthday: DateTime<Utc>,
    pub banned: bool,
}

impl Player {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::player::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            title: entity.title,
            race: entity.race,
            profession: entity.profession,
            experience: entity.experience,
            level: entity.level,
            until_next_level: entity.until_next_level,
            birthday: entity.birthday,
            banned: entity.banned,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id,
            name: self.name,
            title: self.title,
            race: self.race.into(),
            profession: self.profession.into(),
            experience: self.experience,
            level: self.level,
            until_next_level: self.until_next_level,
            birthday: self.birthday.timestamp_millis(),
            banned: self.banned,
        }
    }
}

/// Validated parameters for creating a player.
#[derive(Debug, Clone)]
pub struct CreatePlayerParams {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub experience: i32,
    pub birthday: DateTime<Utc>,
    /// Defaults to `false` when not supplied.
    pub banned: Option<bool>,
}

impl CreatePlayerParams {
    /// Validates a create request and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParams)` - All required fields present and within bounds
    /// - `Err(AppError::BadRequest)` - A required field is missing, the name is empty or
    ///   longer than 12 characters, the title is longer than 30 characters, experience is
    ///   outside `0..=10_000_000`, or the birthday is negative or outside years 2000-3000
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, AppError> {
        let name = dto.name.ok_or_else(|| missing_field("name"))?;
        let title = dto.title.ok_or_else(|| missing_field("title"))?;
        let race = dto.race.ok_or_else(|| missing_field("race"))?;
        let profession = dto.profession.ok_or_else(|| missing_field("profession"))?;
        let experience = dto.experience.ok_or_else(|| missing_field("experience"))?;
        let birthday = dto.birthday.ok_or_else(|| missing_field("birthday"))?;

        validate_name(&name)?;
        validate_title(&title)?;
        validate_experience(experience)?;
        let birthday = validate_birthday(birthday)?;

        Ok(Self {
            name,
            title,
            race: race.into(),
            profession: profession.into(),
            experience,
            birthday,
            banned: dto.banned,
        })
    }
}

/// Parameters for a partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePlayerParams {
    pub id: i64,
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    pub experience: Option<i32>,
    pub birthday: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
}

impl UpdatePlayerParams {
    /// Validates an update request and converts it to parameters.
    ///
    /// Only supplied `experience` and `birthday` values are checked, against the same
    /// bounds used on creation.
    pub fn from_dto(id: i64, dto: UpdatePlayerDto) -> Result<Self, AppError> {
        if let Some(experience) = dto.experience {
            validate_experience(experience)?;
        }
        let birthday = dto.birthday.map(validate_birthday).transpose()?;

        Ok(Self {
            id,
            name: dto.name,
            title: dto.title,
            race: dto.race.map(Into::into),
            profession: dto.profession.map(Into::into),
            experience: dto.experience,
            birthday,
            banned: dto.banned,
        })
    }
}

/// Optional predicates applied to player listings and counts.
///
/// Every `Some` field narrows the result; all present predicates must hold. Range bounds
/// are inclusive.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Substring of the name.
    pub name: Option<String>,
    /// Substring of the title.
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Earliest birthday.
    pub after: Option<DateTime<Utc>>,
    /// Latest birthday.
    pub before: Option<DateTime<Utc>>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

/// Which slice of a sorted listing to return.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    /// Zero-based page number.
    pub page: u64,
    pub per_page: u64,
    pub order: PlayerOrder,
}

impl PageRequest {
    /// Builds a page request, rejecting empty pages and row offsets the database cannot
    /// represent.
    pub fn new(page: u32, per_page: u32, order: PlayerOrder) -> Result<Self, AppError> {
        if per_page == 0 {
            return Err(AppError::BadRequest(
                "Page size must be at least 1".to_string(),
            ));
        }

        let page = u64::from(page);
        let per_page = u64::from(per_page);

        // SQLite takes LIMIT and OFFSET as signed 64-bit integers.
        let offset = page
            .checked_mul(per_page)
            .filter(|offset| i64::try_from(*offset).is_ok());
        if offset.is_none() {
            return Err(AppError::BadRequest(format!(
                "Page {} of size {} is out of range",
                page, per_page
            )));
        }

        Ok(Self {
            page,
            per_page,
            order,
        })
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: u64::from(DEFAULT_PAGE_SIZE),
            order: PlayerOrder::default(),
        }
    }
}

/// Converts a millisecond Unix timestamp taken from a query string into a UTC datetime.
pub fn datetime_from_millis(field: &str, millis: i64) -> Result<DateTime<Utc>, AppError> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| AppError::BadRequest(format!("{} is out of range: {}", field, millis)))
}

fn missing_field(field: &str) -> AppError {
    AppError::BadRequest(format!("Missing required field: {}", field))
}

fn validate_name(name: &str) -> Result<(), AppError> {
    let length = name.chars().count();
    if length < 1 || length > MAX_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Name must be between 1 and {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(())
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Title must be at most {} characters",
            MAX_TITLE_LENGTH
        )));
    }

    Ok(())
}

fn validate_experience(experience: i32) -> Result<(), AppError> {
    if !(0..=MAX_EXPERIENCE).contains(&experience) {
        return Err(AppError::BadRequest(format!(
            "Experience must be between 0 and {}",
            MAX_EXPERIENCE
        )));
    }

    Ok(())
}

fn validate_birthday(millis: i64) -> Result<DateTime<Utc>, AppError> {
    if millis < 0 {
        return Err(AppError::BadRequest(
            "Birthday must not be before the Unix epoch".to_string(),
        ));
    }

    let birthday = datetime_from_millis("birthday", millis)?;
    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&birthday.year()) {
        return Err(AppError::BadRequest(format!(
            "Birthday year must be between {} and {}",
            MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
        )));
    }

    Ok(birthday)
}

impl From<RaceDto> for Race {
    fn from(dto: RaceDto) -> Self {
        match dto {
            RaceDto::Human => Race::Human,
            RaceDto::Dwarf => Race::Dwarf,
            RaceDto::Elf => Race::Elf,
            RaceDto::Giant => Race::Giant,
            RaceDto::Orc => Race::Orc,
            RaceDto::Troll => Race::Troll,
            RaceDto::Hobbit => Race::Hobbit,
        }
    }
}

impl From<Race> for RaceDto {
    fn from(race: Race) -> Self {
        match race {
            Race::Human => RaceDto::Human,
            Race::Dwarf => RaceDto::Dwarf,
            Race::Elf => RaceDto::Elf,
            Race::Giant => RaceDto::Giant,
            Race::Orc => RaceDto::Orc,
            Race::Troll => RaceDto::Troll,
            Race::Hobbit => RaceDto::Hobbit,
        }
    }
}

impl From<ProfessionDto> for Profession {
    fn from(dto: ProfessionDto) -> Self {
        match dto {
            ProfessionDto::Warrior => Profession::Warrior,
            ProfessionDto::Rogue => Profession::Rogue,
            ProfessionDto::Sorcerer => Profession::Sorcerer,
            ProfessionDto::Cleric => Profession::Cleric,
            ProfessionDto::Paladin => Profession::Paladin,
            ProfessionDto::Nazgul => Profession::Nazgul,
            ProfessionDto::Warlock => Profession::Warlock,
            ProfessionDto::Druid => Profession::Druid,
        }
    }
}

impl From<Profession> for ProfessionDto {
    fn from(profession: Profession) -> Self {
        match profession {
            Profession::Warrior => ProfessionDto::Warrior,
            Profession::Rogue => ProfessionDto::Rogue,
            Profession::Sorcerer => ProfessionDto::Sorcerer,
            Profession::Cleric => ProfessionDto::Cleric,
            Profession::Paladin => ProfessionDto::Paladin,
            Profession::Nazgul => ProfessionDto::Nazgul,
            Profession::Warlock => ProfessionDto::Warlock,
            Profession::Druid => ProfessionDto::Druid,
        }
    }
}
