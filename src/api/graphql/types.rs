use async_graphql::{Context, Object, Result, ID};

use crate::domain::models::{EntityId, Player, Team};

use super::{service, to_graphql_error};

pub struct TeamNode(pub Team);

pub struct PlayerNode(pub Player);

#[Object(name = "Team")]
impl TeamNode {
    async fn team(&self) -> &str {
        &self.0.name
    }

    async fn location(&self) -> &str {
        &self.0.location
    }

    async fn id(&self) -> ID {
        to_id(&self.0.id)
    }

    /// Players whose `teamID` references this team, in roster order.
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<PlayerNode>> {
        let players = service(ctx)?
            .roster_of(&self.0)
            .await
            .map_err(to_graphql_error)?;
        Ok(players.into_iter().map(PlayerNode).collect())
    }
}

#[Object(name = "Player")]
impl PlayerNode {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn id(&self) -> ID {
        to_id(&self.0.id)
    }

    #[graphql(name = "teamID")]
    async fn team_id(&self) -> ID {
        to_id(&self.0.team_id)
    }

    /// The referenced team, or null when `teamID` matches no team.
    async fn team(&self, ctx: &Context<'_>) -> Result<Option<TeamNode>> {
        let team = service(ctx)?
            .team_of(&self.0)
            .await
            .map_err(to_graphql_error)?;
        Ok(team.map(TeamNode))
    }
}

pub(crate) fn to_id(id: &EntityId) -> ID {
    ID(id.to_string())
}

pub(crate) fn from_id(id: &ID) -> EntityId {
    EntityId::new(id.as_str())
}
