use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    domain::models::{EntityId, Player, Team},
    infrastructure::state::AppState,
};

use super::errors::ServiceError;

#[derive(Debug)]
pub struct AddTeamRequest {
    pub team: String,
    pub location: String,
    pub id: EntityId,
}

#[derive(Debug)]
pub struct AddPlayerRequest {
    pub name: String,
    pub team_id: EntityId,
    pub id: EntityId,
}

/// Service backing the roster queries and mutations.
pub struct RosterService {
    state: Arc<AppState>,
}

impl RosterService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn teams(&self) -> Result<Vec<Team>, ServiceError> {
        Ok(self.state.store.teams().await?)
    }

    pub async fn players(&self) -> Result<Vec<Player>, ServiceError> {
        Ok(self.state.store.players().await?)
    }

    pub async fn find_team(&self, id: &EntityId) -> Result<Option<Team>, ServiceError> {
        Ok(self.state.store.team(id).await?)
    }

    pub async fn find_player(&self, id: &EntityId) -> Result<Option<Player>, ServiceError> {
        Ok(self.state.store.player(id).await?)
    }

    /// Players whose `teamID` matches the team, in roster order.
    pub async fn roster_of(&self, team: &Team) -> Result<Vec<Player>, ServiceError> {
        Ok(self.state.store.players_on_team(&team.id).await?)
    }

    /// The team a player references, or `None` for a dangling `teamID`.
    pub async fn team_of(&self, player: &Player) -> Result<Option<Team>, ServiceError> {
        self.find_team(&player.team_id).await
    }

    pub async fn add_team(&self, payload: AddTeamRequest) -> Result<Team, ServiceError> {
        let team = Team {
            name: payload.team,
            location: payload.location,
            id: payload.id,
        };
        let rules = self.state.config.roster;

        match self.state.store.insert_team(team, &rules).await {
            Ok(team) => {
                info!(team_id = %team.id, team = %team.name, "team added");
                Ok(team)
            }
            Err(err) => {
                warn!(error = %err, "team insert rejected");
                Err(err.into())
            }
        }
    }

    pub async fn add_player(&self, payload: AddPlayerRequest) -> Result<Player, ServiceError> {
        let player = Player {
            name: payload.name,
            id: payload.id,
            team_id: payload.team_id,
        };
        let rules = self.state.config.roster;

        match self.state.store.insert_player(player, &rules).await {
            Ok(player) => {
                info!(player_id = %player.id, team_id = %player.team_id, "player added");
                Ok(player)
            }
            Err(err) => {
                warn!(error = %err, "player insert rejected");
                Err(err.into())
            }
        }
    }
}
