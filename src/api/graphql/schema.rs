use async_graphql::{extensions::Tracing, Context, EmptySubscription, Object, Result, Schema, ID};

use crate::{
    infrastructure::config::GraphqlConfig,
    services::roster::{AddPlayerRequest, AddTeamRequest},
};

use super::{
    service, to_graphql_error,
    types::{from_id, PlayerNode, TeamNode},
};

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(config: &GraphqlConfig) -> RosterSchema {
    let mut builder = Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .limit_depth(config.depth_limit)
        .limit_complexity(config.complexity_limit);

    if !config.introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    async fn players(&self, ctx: &Context<'_>) -> Result<Vec<PlayerNode>> {
        let players = service(ctx)?.players().await.map_err(to_graphql_error)?;
        Ok(players.into_iter().map(PlayerNode).collect())
    }

    async fn teams(&self, ctx: &Context<'_>) -> Result<Vec<TeamNode>> {
        let teams = service(ctx)?.teams().await.map_err(to_graphql_error)?;
        Ok(teams.into_iter().map(TeamNode).collect())
    }

    /// First player with a matching id. Accepts string or integer ids.
    async fn player(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<PlayerNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let player = service(ctx)?
            .find_player(&from_id(&id))
            .await
            .map_err(to_graphql_error)?;
        Ok(player.map(PlayerNode))
    }

    /// First team with a matching id. Accepts string or integer ids.
    async fn team(&self, ctx: &Context<'_>, id: Option<ID>) -> Result<Option<TeamNode>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let team = service(ctx)?
            .find_team(&from_id(&id))
            .await
            .map_err(to_graphql_error)?;
        Ok(team.map(TeamNode))
    }
}

/// Mutation results are nullable: a rejected insert nulls only its own
/// field and later mutations in the same document still run.
#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn add_team(
        &self,
        ctx: &Context<'_>,
        team: String,
        location: String,
        id: ID,
    ) -> Result<Option<TeamNode>> {
        let team = service(ctx)?
            .add_team(AddTeamRequest {
                team,
                location,
                id: from_id(&id),
            })
            .await
            .map_err(to_graphql_error)?;
        Ok(Some(TeamNode(team)))
    }

    async fn add_player(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "teamID")] team_id: ID,
        id: ID,
    ) -> Result<Option<PlayerNode>> {
        let player = service(ctx)?
            .add_player(AddPlayerRequest {
                name,
                team_id: from_id(&team_id),
                id: from_id(&id),
            })
            .await
            .map_err(to_graphql_error)?;
        Ok(Some(PlayerNode(player)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdl_uses_wire_names() {
        let sdl = build_schema(&GraphqlConfig::default()).sdl();

        assert!(sdl.contains("type RootQuery"));
        assert!(sdl.contains("type Mutation"));
        assert!(sdl.contains("teamID: ID!"));
        assert!(sdl.contains("addTeam(team: String!, location: String!, id: ID!): Team\n"));
        assert!(sdl.contains("addPlayer(name: String!, teamID: ID!, id: ID!): Player\n"));
        assert!(sdl.contains("player(id: ID): Player"));
    }
}
