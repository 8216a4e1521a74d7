use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use itertools::Itertools;

use crate::model::{AllTimeRow, FinishPosition, PlotMetric, PlotRow, SeasonRecord, TopThreeRow};

/// Podium of every season with a champion, oldest first.
///
/// Each cell reads `"{manager}: {team} ({n})"` where `n` counts that team's finishes in
/// that position up to and including the season. Seasons lacking a runner-up or third
/// place get an empty cell.
pub fn aggregate_top_three(history: &[SeasonRecord]) -> Vec<TopThreeRow> {
    let [champions, runners_up, third] =
        [FinishPosition::Winner, FinishPosition::RunnerUp, FinishPosition::Third]
            .map(|position| finishes_with_count(history, position));

    champions
        .into_iter()
        .map(|(season_name, champion)| TopThreeRow {
            runner_up: runners_up.get(&season_name).cloned().unwrap_or_default(),
            third: third.get(&season_name).cloned().unwrap_or_default(),
            season_name,
            champion,
        })
        .collect()
}

fn finishes_with_count(history: &[SeasonRecord], position: FinishPosition) -> BTreeMap<String, String> {
    let mut counts: HashMap<u32, u32> = HashMap::new();
    history
        .iter()
        .filter(|r| r.league_position == position.league_position())
        .sorted_by(|a, b| a.season_name.cmp(&b.season_name))
        .map(|r| {
            let count = counts.entry(r.team_id).or_default();
            *count += 1;
            (
                r.season_name.clone(),
                format!("{}: {} ({count})", r.manager_name, r.team_name),
            )
        })
        .collect()
}

/// Lifetime totals per manager and team, highest total points first.
pub fn all_time_table(history: &[SeasonRecord]) -> Vec<AllTimeRow> {
    let mut teams: BTreeMap<(&str, &str), Vec<&SeasonRecord>> = BTreeMap::new();
    for record in history {
        teams
            .entry((record.manager_name.as_str(), record.team_name.as_str()))
            .or_default()
            .push(record);
    }

    teams
        .into_iter()
        .map(|((manager_name, team_name), rows)| {
            let seasons = rows.len() as f64;
            let total_points = rows.iter().map(|r| r.total_points).sum::<i64>();
            let total_rank = rows.iter().map(|r| r.rank as f64).sum::<f64>();
            AllTimeRow {
                manager_name: manager_name.to_owned(),
                team_name: team_name.to_owned(),
                total_points,
                average_points: total_points as f64 / seasons,
                seasons_played: rows.iter().map(|r| &r.season_name).unique().count() as u32,
                average_rank: total_rank / seasons,
            }
        })
        .sorted_by_key(|row| Reverse(row.total_points))
        .collect()
}

/// Per-season values of `metric` for each of `teams` (matched by team name).
///
/// Seasons are the union across the requested teams, oldest first; a team with no
/// record that season gets `None`.
pub fn plot_history(history: &[SeasonRecord], teams: &[&str], metric: PlotMetric) -> Vec<PlotRow> {
    let values: HashMap<(&str, &str), i64> = history
        .iter()
        .filter(|r| teams.contains(&r.team_name.as_str()))
        .map(|r| ((r.team_name.as_str(), r.season_name.as_str()), metric.value(r)))
        .collect();
    let seasons: BTreeSet<&str> = values.keys().map(|(_, season)| *season).collect();

    seasons
        .into_iter()
        .map(|season| PlotRow {
            season_name: season.to_owned(),
            values: teams
                .iter()
                .map(|team| values.get(&(*team, season)).copied())
                .collect(),
        })
        .collect()
}
