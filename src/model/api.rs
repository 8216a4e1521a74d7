use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Name and id of a classic mini-league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
}

/// One page of the classic league standings endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StandingsResponse {
    pub league: LeagueInfo,
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub has_next: bool,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<StandingEntry>,
}

/// A team's live row in the league standings.
///
/// `rank` and `total` are missing (or null) before the first gameweek is played.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingEntry {
    pub entry: u32,
    pub entry_name: String,
    pub player_name: String,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub total: Option<i64>,
}

/// Summary payload of the `entry/{id}/` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ManagerResponse {
    #[serde(default)]
    pub summary_overall_rank: Option<u64>,
    #[serde(default)]
    pub player_region_iso_code_long: Option<String>,
    #[serde(default)]
    pub favourite_team: Option<u32>,
}

/// Manager details for a single league entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManagerInfo {
    pub team_id: u32,
    pub overall_rank: Option<u64>,
    pub nationality: Option<String>,
    pub favourite_team_id: Option<u32>,
}

impl ManagerInfo {
    pub fn from_response(team_id: u32, response: ManagerResponse) -> Self {
        Self {
            team_id,
            overall_rank: response.summary_overall_rank,
            nationality: response.player_region_iso_code_long,
            favourite_team_id: response.favourite_team,
        }
    }
}

/// Payload of the `entry/{id}/history/` endpoint; only past seasons are used.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub past: Vec<PastSeason>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PastSeason {
    pub season_name: String,
    pub total_points: i64,
    pub rank: u64,
}

/// A past season row tagged with the team it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawSeasonRecord {
    pub team_id: u32,
    pub team_name: String,
    pub manager_name: String,
    pub season_name: String,
    pub total_points: i64,
    pub rank: u64,
}

impl RawSeasonRecord {
    pub fn tagged(entry: &StandingEntry, season: PastSeason) -> Self {
        Self {
            team_id: entry.entry,
            team_name: entry.entry_name.clone(),
            manager_name: entry.player_name.clone(),
            season_name: season.season_name,
            total_points: season.total_points,
            rank: season.rank,
        }
    }
}

/// The global `bootstrap-static` feed, reduced to what the summaries need.
#[derive(Debug, Clone, Deserialize)]
pub struct BootstrapResponse {
    #[serde(default)]
    pub events: Vec<Gameweek>,
    #[serde(default)]
    pub teams: Vec<Club>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Gameweek {
    pub id: u32,
    pub deadline_time: String,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub is_current: bool,
}

/// A Premier League club a manager can pick as favourite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub id: u32,
    pub name: String,
}

/// Club id to club name lookup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClubLookup(HashMap<u32, String>);

impl ClubLookup {
    pub fn name(&self, id: Option<u32>) -> Option<&str> {
        id.and_then(|id| self.0.get(&id)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Club> for ClubLookup {
    fn from_iter<I: IntoIterator<Item = Club>>(iter: I) -> Self {
        Self(iter.into_iter().map(|club| (club.id, club.name)).collect())
    }
}

/// Season-wide facts derived from the bootstrap feed.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonInfo {
    pub season_finished: bool,
    pub current_season_label: String,
    pub current_gameweek: Option<u32>,
    pub clubs: ClubLookup,
}
