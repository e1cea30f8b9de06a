use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::player::PlayerOrder,
    server::{
        model::player::{CreatePlayerParams, PageRequest, PlayerFilter, UpdatePlayerParams},
        util::level::Progress,
    },
};

use entity::player::Column;

/// Repository for the `player` table.
///
/// Generic over the connection so services can run it inside a `DatabaseTransaction`.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new player with its derived progression columns.
    ///
    /// # Arguments
    /// - `params`: Validated player fields
    /// - `progress`: Level and experience to next level computed from `params.experience`
    ///
    /// # Returns
    /// - `Ok(Model)`: The created player including its generated id
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreatePlayerParams,
        progress: Progress,
    ) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            name: ActiveValue::Set(params.name),
            title: ActiveValue::Set(params.title),
            race: ActiveValue::Set(params.race),
            profession: ActiveValue::Set(params.profession),
            experience: ActiveValue::Set(params.experience),
            level: ActiveValue::Set(progress.level),
            until_next_level: ActiveValue::Set(progress.until_next_level),
            birthday: ActiveValue::Set(params.birthday),
            banned: ActiveValue::Set(params.banned.unwrap_or(false)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a player by ID
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Player found
    /// - `Ok(None)`: No player with this id
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i64) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find_by_id(id).one(self.db).await
    }

    /// Gets one page of players matching `filter`, sorted by `page.order`.
    ///
    /// Rows with equal sort keys are ordered by id so that pages never overlap.
    pub async fn get_paginated(
        &self,
        filter: &PlayerFilter,
        page: &PageRequest,
    ) -> Result<Vec<entity::player::Model>, DbErr> {
        let mut query = entity::prelude::Player::find()
            .filter(Self::condition(filter))
            .order_by_asc(Self::order_column(page.order));

        if page.order != PlayerOrder::Id {
            query = query.order_by_asc(Column::Id);
        }

        query.paginate(self.db, page.per_page).fetch_page(page.page).await
    }

    /// Counts every player matching `filter`, ignoring pagination.
    pub async fn count(&self, filter: &PlayerFilter) -> Result<u64, DbErr> {
        entity::prelude::Player::find()
            .filter(Self::condition(filter))
            .count(self.db)
            .await
    }

    /// Applies a partial update to an existing player.
    ///
    /// Only `Some` fields of `params` overwrite stored values. The derived columns are
    /// always rewritten from `progress`.
    ///
    /// # Arguments
    /// - `existing`: The player as currently stored
    /// - `params`: Fields to overwrite
    /// - `progress`: Progression computed from the resulting experience
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated player
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        existing: entity::player::Model,
        params: UpdatePlayerParams,
        progress: Progress,
    ) -> Result<entity::player::Model, DbErr> {
        let mut active_model: entity::player::ActiveModel = existing.into();

        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(race) = params.race {
            active_model.race = ActiveValue::Set(race);
        }
        if let Some(profession) = params.profession {
            active_model.profession = ActiveValue::Set(profession);
        }
        if let Some(birthday) = params.birthday {
            active_model.birthday = ActiveValue::Set(birthday);
        }
        if let Some(banned) = params.banned {
            active_model.banned = ActiveValue::Set(banned);
        }
        if let Some(experience) = params.experience {
            active_model.experience = ActiveValue::Set(experience);
        }
        active_model.level = ActiveValue::Set(progress.level);
        active_model.until_next_level = ActiveValue::Set(progress.until_next_level);

        active_model.update(self.db).await
    }

    /// Deletes a player by ID
    ///
    /// # Returns
    /// - `Ok(true)`: Player deleted
    /// - `Ok(false)`: No player with this id
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i64) -> Result<bool, DbErr> {
        let result = entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Builds the conjunction of every predicate present in `filter`.
    fn condition(filter: &PlayerFilter) -> Condition {
        Condition::all()
            .add_option(filter.name.as_deref().map(|name| Column::Name.contains(name)))
            .add_option(filter.title.as_deref().map(|title| Column::Title.contains(title)))
            .add_option(filter.race.map(|race| Column::Race.eq(race)))
            .add_option(filter.profession.map(|profession| Column::Profession.eq(profession)))
            .add_option(filter.after.map(|after| Column::Birthday.gte(after)))
            .add_option(filter.before.map(|before| Column::Birthday.lte(before)))
            .add_option(filter.banned.map(|banned| Column::Banned.eq(banned)))
            .add_option(filter.min_experience.map(|min| Column::Experience.gte(min)))
            .add_option(filter.max_experience.map(|max| Column::Experience.lte(max)))
            .add_option(filter.min_level.map(|min| Column::Level.gte(min)))
            .add_option(filter.max_level.map(|max| Column::Level.lte(max)))
    }

    fn order_column(order: PlayerOrder) -> Column {
        match order {
            PlayerOrder::Id => Column::Id,
            PlayerOrder::Name => Column::Name,
            PlayerOrder::Experience => Column::Experience,
            PlayerOrder::Birthday => Column::Birthday,
            PlayerOrder::Level => Column::Level,
        }
    }
}
