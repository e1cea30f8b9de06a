use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::player::PlayerRepository,
    error::AppError,
    model::player::{CreatePlayerParams, PageRequest, Player, PlayerFilter, UpdatePlayerParams},
    util::level,
};

/// Player business rules.
///
/// Every operation runs inside its own database transaction, committed on success and
/// rolled back when the transaction is dropped on an error path.
pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player, defaulting `banned` and computing its level from experience.
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let progress = level::progress(params.experience);
        let player = repo.create(params, progress).await?;

        txn.commit().await?;

        tracing::info!("Created player {} ({})", player.id, player.name);

        Ok(Player::from_entity(player))
    }

    /// Gets a player by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Player>, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let player = repo.get_by_id(id).await?;

        txn.commit().await?;

        Ok(player.map(Player::from_entity))
    }

    /// Gets one page of players matching the filter
    pub async fn get_paginated(
        &self,
        filter: PlayerFilter,
        page: PageRequest,
    ) -> Result<Vec<Player>, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let players = repo.get_paginated(&filter, &page).await?;

        txn.commit().await?;

        tracing::debug!(
            "Listed {} players (page {}, size {}, order {:?})",
            players.len(),
            page.page,
            page.per_page,
            page.order
        );

        Ok(players.into_iter().map(Player::from_entity).collect())
    }

    /// Counts players matching the filter
    pub async fn count(&self, filter: PlayerFilter) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let count = repo.count(&filter).await?;

        txn.commit().await?;

        Ok(count)
    }

    /// Applies a partial update and recomputes the derived fields.
    ///
    /// Returns None if the player doesn't exist
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let Some(existing) = repo.get_by_id(params.id).await? else {
            return Ok(None);
        };

        let experience = params.experience.unwrap_or(existing.experience);
        let progress = level::progress(experience);
        let player = repo.update(existing, params, progress).await?;

        txn.commit().await?;

        tracing::info!("Updated player {}", player.id);

        Ok(Some(Player::from_entity(player)))
    }

    /// Deletes a player
    ///
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = PlayerRepository::new(&txn);

        let deleted = repo.delete(id).await?;

        txn.commit().await?;

        if deleted {
            tracing::info!("Deleted player {}", id);
        }

        Ok(deleted)
    }
}
