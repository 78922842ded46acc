use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Expected to match a team id, not enforced.
    pub team_id: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// Input for adding a player; the id is assigned by the league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub team_id: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewPlayer {
    pub fn new(name: impl Into<String>, team_id: impl Into<String>) -> Self {
        Self { name: name.into(), team_id: team_id.into(), goals: 0, image: None }
    }

    pub fn into_player(self, id: String) -> Player {
        Player { id, name: self.name, team_id: self.team_id, goals: self.goals, image: self.image }
    }
}

/// Partial player edit. `image: Some(None)` clears the image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub team_id: Option<String>,
    pub goals: Option<u32>,
    pub image: Option<Option<String>>,
}

impl PlayerUpdate {
    pub fn apply_to(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(team_id) = self.team_id {
            player.team_id = team_id;
        }
        if let Some(goals) = self.goals {
            player.goals = goals;
        }
        if let Some(image) = self.image {
            player.image = image;
        }
    }
}
