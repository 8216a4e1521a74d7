use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use itertools::Itertools;
use tracing::debug;

use crate::model::{ClubLookup, ManagerInfo, SeasonRecord, TeamOverview, TitlesRow};

/// Aggregate every team's career across the seasons in `history`.
///
/// Rows are ordered by titles, then runner-up finishes, then third places, all descending.
/// `rank` is a min-rank on titles: tied teams share the position of the first of them.
/// When several seasons share a team's best points or best rank, the earliest season is reported.
pub fn build_team_overview(
    history: &[SeasonRecord],
    managers: &[ManagerInfo],
    clubs: &ClubLookup,
) -> Vec<TeamOverview> {
    let managers: HashMap<u32, &ManagerInfo> = managers.iter().map(|m| (m.team_id, m)).collect();

    let mut teams: BTreeMap<(u32, &str, &str), Vec<&SeasonRecord>> = BTreeMap::new();
    for record in history {
        teams
            .entry((
                record.team_id,
                record.team_name.as_str(),
                record.manager_name.as_str(),
            ))
            .or_default()
            .push(record);
    }

    let mut overview = teams
        .into_iter()
        .filter_map(|((team_id, team_name, manager_name), mut rows)| {
            rows.sort_by(|a, b| a.season_name.cmp(&b.season_name));
            // min_by_key keeps the first of equal elements, i.e. the earliest season
            let best_points = *rows.iter().min_by_key(|r| Reverse(r.total_points))?;
            let best_rank = *rows.iter().min_by_key(|r| r.rank)?;
            let manager = managers.get(&team_id);

            Some(TeamOverview {
                team_id,
                team_name: team_name.to_owned(),
                manager_name: manager_name.to_owned(),
                seasons_won: count_position(&rows, 1),
                seasons_runner_up: count_position(&rows, 2),
                seasons_third: count_position(&rows, 3),
                seasons_played: rows.iter().map(|r| &r.season_name).unique().count() as u32,
                maximum_points: best_points.total_points,
                max_points_season: best_points.season_name.clone(),
                minimum_rank: best_rank.rank,
                min_rank_season: best_rank.season_name.clone(),
                seasons_played_years: rows.iter().map(|r| &r.season_name).join(", "),
                seasons_won_years: seasons_at_position(&rows, 1),
                seasons_runner_up_years: seasons_at_position(&rows, 2),
                seasons_third_years: seasons_at_position(&rows, 3),
                favourite_team_name: clubs
                    .name(manager.and_then(|m| m.favourite_team_id))
                    .map(str::to_owned),
                nationality: manager.and_then(|m| m.nationality.clone()),
                rank: 0,
            })
        })
        .collect::<Vec<_>>();

    overview.sort_by_key(|t| Reverse((t.seasons_won, t.seasons_runner_up, t.seasons_third)));
    assign_min_rank(&mut overview);

    debug!(teams = overview.len(), "built team overview");
    overview
}

fn count_position(rows: &[&SeasonRecord], position: u32) -> u32 {
    rows.iter().filter(|r| r.league_position == position).count() as u32
}

fn seasons_at_position(rows: &[&SeasonRecord], position: u32) -> Option<String> {
    let seasons = rows
        .iter()
        .filter(|r| r.league_position == position)
        .map(|r| &r.season_name)
        .join(", ");
    (!seasons.is_empty()).then_some(seasons)
}

/// Expects `overview` sorted by titles descending.
fn assign_min_rank(overview: &mut [TeamOverview]) {
    let mut current = (None, 0);
    for (idx, team) in overview.iter_mut().enumerate() {
        if current.0 != Some(team.seasons_won) {
            current = (Some(team.seasons_won), idx as u32 + 1);
        }
        team.rank = current.1;
    }
}

/// Teams with at least one title or runner-up finish, in overview order.
pub fn titles_summary(overview: &[TeamOverview]) -> Vec<TitlesRow> {
    overview
        .iter()
        .filter(|t| t.seasons_won > 0 || t.seasons_runner_up > 0)
        .map(|t| TitlesRow {
            rank: t.rank,
            team: format!("{}: {}", t.manager_name, t.team_name),
            seasons_won: t.seasons_won,
            seasons_runner_up: t.seasons_runner_up,
            winning_seasons: t.seasons_won_years.clone().unwrap_or_default(),
        })
        .collect()
}
