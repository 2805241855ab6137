//! Sample roster loaded at start-up.

use crate::domain::models::{EntityId, Player, Team};

const TEAMS: &[(u32, &str, &str)] = &[
    (0, "Packers", "Green Bay"),
    (1, "49ers", "Santa Clara"),
    (2, "Browns", "Nowhere"),
    (3, "Saints", "Nawlens"),
    (4, "Titans", "Memphis"),
];

const PLAYERS: &[(u32, &str, u32)] = &[
    (0, "Aaron Rodgers", 0),
    (1, "Jamal Williams", 0),
    (2, "LeBron James", 2),
    (3, "Jimmy Garopolo", 1),
    (4, "Wayne Gretzky", 3),
    (5, "Marcus Williams", 3),
    (6, "Elon Musk", 4),
    (7, "Marcus Mariota", 4),
];

pub fn teams() -> Vec<Team> {
    TEAMS
        .iter()
        .map(|&(id, name, location)| Team {
            name: name.to_string(),
            location: location.to_string(),
            id: EntityId::from(id),
        })
        .collect()
}

pub fn players() -> Vec<Player> {
    PLAYERS
        .iter()
        .map(|&(id, name, team_id)| Player {
            name: name.to_string(),
            id: EntityId::from(id),
            team_id: EntityId::from(team_id),
        })
        .collect()
}
