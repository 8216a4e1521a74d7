use serde::Serialize;

/// A team taking part in the league, joined with its manager details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamEntry {
    pub team_id: u32,
    pub team_name: String,
    pub manager_name: String,
    pub nationality: Option<String>,
    pub favourite_team_id: Option<u32>,
}

/// One team's result for one completed season.
///
/// `(team_id, season_name)` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonRecord {
    pub team_id: u32,
    pub team_name: String,
    pub manager_name: String,
    pub season_name: String,
    pub total_points: i64,
    pub rank: u64,
    pub league_position: u32,
}

/// One team's live standing in the season in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentSeasonRecord {
    pub season_name: String,
    pub total_points: i64,
    /// Overall rank, `None` when the manager's details are unavailable.
    pub rank: Option<u64>,
    pub team_id: u32,
    pub team_name: String,
    pub manager_name: String,
    pub league_position: u32,
    pub nationality: Option<String>,
    pub favourite_team_id: Option<u32>,
    /// Club name for `favourite_team_id`, `"-"` when unknown.
    pub favourite_team_name: String,
}

/// Career aggregate of a single team across every season in scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamOverview {
    pub team_id: u32,
    pub team_name: String,
    pub manager_name: String,
    pub seasons_won: u32,
    pub seasons_runner_up: u32,
    pub seasons_third: u32,
    pub seasons_played: u32,
    pub maximum_points: i64,
    pub max_points_season: String,
    pub minimum_rank: u64,
    pub min_rank_season: String,
    pub seasons_played_years: String,
    pub seasons_won_years: Option<String>,
    pub seasons_runner_up_years: Option<String>,
    pub seasons_third_years: Option<String>,
    pub favourite_team_name: Option<String>,
    pub nationality: Option<String>,
    pub rank: u32,
}

/// A row of the champions summary: teams with at least one top-two finish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitlesRow {
    pub rank: u32,
    pub team: String,
    pub seasons_won: u32,
    pub seasons_runner_up: u32,
    pub winning_seasons: String,
}

/// The podium of one season, each cell carrying the team's running count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopThreeRow {
    pub season_name: String,
    pub champion: String,
    pub runner_up: String,
    pub third: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllTimeRow {
    pub manager_name: String,
    pub team_name: String,
    pub total_points: i64,
    pub average_points: f64,
    pub seasons_played: u32,
    pub average_rank: f64,
}

/// Headline facts about the league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeagueSummary {
    pub founded: String,
    pub number_of_teams: String,
    pub current_champions: String,
    pub most_championships: String,
    pub most_points: String,
    pub highest_rank: String,
}

/// The column `best_rank_or_points` looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum BestColumn {
    Rank,
    #[strum(serialize = "Points")]
    TotalPoints,
}

/// A podium finish within the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumIter)]
pub enum FinishPosition {
    #[strum(serialize = "Champions (number of titles)")]
    Winner,
    #[strum(serialize = "Runners-up")]
    RunnerUp,
    #[strum(serialize = "Third Place")]
    Third,
}

impl FinishPosition {
    pub fn league_position(self) -> u32 {
        match self {
            FinishPosition::Winner => 1,
            FinishPosition::RunnerUp => 2,
            FinishPosition::Third => 3,
        }
    }
}

/// A per-season value that can be charted per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PlotMetric {
    #[strum(serialize = "Total Points")]
    TotalPoints,
    #[strum(serialize = "Overall Rank")]
    Rank,
    #[strum(serialize = "Pos")]
    LeaguePosition,
}

impl PlotMetric {
    pub fn value(self, record: &SeasonRecord) -> i64 {
        match self {
            PlotMetric::TotalPoints => record.total_points,
            PlotMetric::Rank => i64::try_from(record.rank).unwrap_or(i64::MAX),
            PlotMetric::LeaguePosition => i64::from(record.league_position),
        }
    }
}

/// One season of a per-team chart series; `values` follows the requested team order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlotRow {
    pub season_name: String,
    pub values: Vec<Option<i64>>,
}
