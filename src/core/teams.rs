use crate::domain::model::{Team, TeamColor, TeamMember};
use crate::utils::error::{PlaycesError, Result};
use crate::utils::validation::validate_non_empty_string;
use rand::Rng;
use uuid::Uuid;

pub const TEAM_SPORTS: [&str; 6] = [
    "Football",
    "Basketball",
    "Tennis",
    "Cricket",
    "Badminton",
    "Volleyball",
];

pub const JOIN_CODE_LENGTH: usize = 6;
const JOIN_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn generate_join_code<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| JOIN_CODE_CHARSET[rng.gen_range(0..JOIN_CODE_CHARSET.len())] as char)
        .collect()
}

impl Team {
    pub fn new(name: impl Into<String>, sport: impl Into<String>, color: TeamColor) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sport: sport.into(),
            members: Vec::new(),
            color,
            unique_code: generate_join_code(&mut rand::thread_rng(), JOIN_CODE_LENGTH),
        }
    }

    pub fn with_members<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(names.into_iter().map(TeamMember::new));
        self
    }
}

/// The user's teams and which one is open.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    teams: Vec<Team>,
    selected: Option<Uuid>,
}

impl TeamRoster {
    pub fn new(teams: Vec<Team>) -> Self {
        Self {
            teams,
            selected: None,
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn selected(&self) -> Option<&Team> {
        let id = self.selected?;
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn select(&mut self, id: Uuid) -> Result<&Team> {
        let team = self
            .teams
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| PlaycesError::not_found("team", id.to_string()))?;
        self.selected = Some(team.id);
        Ok(team)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Team> {
        self.teams
            .iter()
            .find(|t| t.unique_code.eq_ignore_ascii_case(code.trim()))
    }

    /// Appends a new empty team and makes it the selection.
    pub fn create_team(&mut self, name: &str, sport: &str, color: TeamColor) -> Result<&Team> {
        validate_non_empty_string("team.name", name)?;
        validate_non_empty_string("team.sport", sport)?;

        let team = Team::new(name.trim(), sport, color);
        tracing::info!(name = %team.name, code = %team.unique_code, "Created team");

        self.selected = Some(team.id);
        self.teams.push(team);
        Ok(&self.teams[self.teams.len() - 1])
    }
}
