use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::models::{EntityId, Player, Team};
use crate::infrastructure::config::{RosterRules, StoreConfig};

pub mod seed;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a team with id {0} already exists")]
    DuplicateTeam(EntityId),
    #[error("a player with id {0} already exists")]
    DuplicatePlayer(EntityId),
    #[error("no team with id {0} exists")]
    UnknownTeam(EntityId),
}

/// Read and append access to the team and player collections.
///
/// Snapshots and lookups preserve insertion order. Inserts check the given
/// rules and append atomically, so a rejected insert leaves both collections
/// untouched.
#[async_trait]
pub trait RosterStore: Send + Sync {
    async fn teams(&self) -> Result<Vec<Team>, StoreError>;
    async fn players(&self) -> Result<Vec<Player>, StoreError>;
    async fn team(&self, id: &EntityId) -> Result<Option<Team>, StoreError>;
    async fn player(&self, id: &EntityId) -> Result<Option<Player>, StoreError>;
    async fn players_on_team(&self, team_id: &EntityId) -> Result<Vec<Player>, StoreError>;
    async fn insert_team(&self, team: Team, rules: &RosterRules) -> Result<Team, StoreError>;
    async fn insert_player(&self, player: Player, rules: &RosterRules)
        -> Result<Player, StoreError>;
}

pub fn build_store(config: &StoreConfig) -> anyhow::Result<Arc<dyn RosterStore>> {
    match config.provider.as_str() {
        "memory" if config.seed => Ok(Arc::new(MemoryRosterStore::seeded())),
        "memory" => Ok(Arc::new(MemoryRosterStore::default())),
        other => anyhow::bail!("unsupported store provider: {other}"),
    }
}

#[derive(Default)]
pub struct MemoryRosterStore {
    teams: RwLock<Vec<Team>>,
    players: RwLock<Vec<Player>>,
}

impl MemoryRosterStore {
    pub fn new(teams: Vec<Team>, players: Vec<Player>) -> Self {
        Self {
            teams: RwLock::new(teams),
            players: RwLock::new(players),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::teams(), seed::players())
    }
}

#[async_trait]
impl RosterStore for MemoryRosterStore {
    async fn teams(&self) -> Result<Vec<Team>, StoreError> {
        Ok(self.teams.read().clone())
    }

    async fn players(&self) -> Result<Vec<Player>, StoreError> {
        Ok(self.players.read().clone())
    }

    async fn team(&self, id: &EntityId) -> Result<Option<Team>, StoreError> {
        Ok(self.teams.read().iter().find(|team| &team.id == id).cloned())
    }

    async fn player(&self, id: &EntityId) -> Result<Option<Player>, StoreError> {
        Ok(self
            .players
            .read()
            .iter()
            .find(|player| &player.id == id)
            .cloned())
    }

    async fn players_on_team(&self, team_id: &EntityId) -> Result<Vec<Player>, StoreError> {
        Ok(self
            .players
            .read()
            .iter()
            .filter(|player| player.plays_for(team_id))
            .cloned()
            .collect())
    }

    async fn insert_team(&self, team: Team, rules: &RosterRules) -> Result<Team, StoreError> {
        let mut teams = self.teams.write();
        if rules.enforce_unique_ids && teams.iter().any(|existing| existing.id == team.id) {
            return Err(StoreError::DuplicateTeam(team.id));
        }
        teams.push(team.clone());
        Ok(team)
    }

    async fn insert_player(
        &self,
        player: Player,
        rules: &RosterRules,
    ) -> Result<Player, StoreError> {
        // Lock order is teams then players.
        let teams = self.teams.read();
        let mut players = self.players.write();
        if rules.enforce_unique_ids && players.iter().any(|existing| existing.id == player.id) {
            return Err(StoreError::DuplicatePlayer(player.id));
        }
        if rules.enforce_team_reference && !teams.iter().any(|team| team.id == player.team_id) {
            return Err(StoreError::UnknownTeam(player.team_id));
        }
        players.push(player.clone());
        Ok(player)
    }
}
