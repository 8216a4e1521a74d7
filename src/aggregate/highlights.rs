use itertools::Itertools;

use crate::error::{LeagueError, Result};
use crate::format::{ordinal, thousands};
use crate::model::{BestColumn, SeasonRecord, StandingEntry, TeamOverview};

/// Describe the winner of the most recent season, e.g.
/// `"Ann Lee: Reds (2nd title) (2023/24)"`.
///
/// Season labels are compared as strings, so four digit years are assumed.
pub fn current_champions(history: &[SeasonRecord], overview: &[TeamOverview]) -> Result<String> {
    let latest = history
        .iter()
        .map(|r| r.season_name.as_str())
        .max()
        .ok_or(LeagueError::EmptyHistory)?;
    let champion = history
        .iter()
        .filter(|r| r.season_name == latest)
        .min_by_key(|r| r.league_position)
        .ok_or(LeagueError::EmptyHistory)?;
    let titles = overview
        .iter()
        .find(|t| t.team_id == champion.team_id)
        .map(|t| t.seasons_won)
        .ok_or(LeagueError::TeamNotFound {
            team_id: champion.team_id,
        })?;

    Ok(format!(
        "{}: {} ({} title) ({})",
        champion.manager_name,
        champion.team_name,
        ordinal(titles),
        champion.season_name
    ))
}

/// Every team sharing the highest title count, in overview order, joined by `"; "`.
pub fn most_titles(overview: &[TeamOverview]) -> String {
    let Some(most) = overview.iter().map(|t| t.seasons_won).max() else {
        return String::new();
    };
    overview
        .iter()
        .filter(|t| t.seasons_won == most)
        .map(|t| format!("{}: {} ({} titles)", t.manager_name, t.team_name, t.seasons_won))
        .join("; ")
}

/// Every season matching the best overall rank (lowest) or most points (highest).
pub fn best_rank_or_points(history: &[SeasonRecord], column: BestColumn) -> String {
    let value = |r: &SeasonRecord| match column {
        BestColumn::Rank => i128::from(r.rank),
        BestColumn::TotalPoints => i128::from(r.total_points),
    };
    let best = match column {
        BestColumn::Rank => history.iter().map(value).min(),
        BestColumn::TotalPoints => history.iter().map(value).max(),
    };
    let Some(best) = best else {
        return String::new();
    };

    history
        .iter()
        .filter(|r| value(*r) == best)
        .map(|r| {
            format!(
                "{}: {}: {column}: {} ({})",
                r.manager_name,
                r.team_name,
                thousands(best),
                r.season_name
            )
        })
        .join("; ")
}

pub fn number_of_teams(standings: &[StandingEntry]) -> usize {
    standings.len()
}

/// Year the earliest season in `history` started, or an empty string.
pub fn first_season_year(history: &[SeasonRecord]) -> String {
    history
        .iter()
        .map(|r| r.season_name.as_str())
        .min()
        .and_then(|season| season.get(..4))
        .unwrap_or_default()
        .to_string()
}
