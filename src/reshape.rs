//! Turns raw API rows into the canonical current-season and season-history tables.

use std::collections::{BTreeMap, HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{LeagueError, Result};
use crate::model::{
    ClubLookup, CurrentSeasonRecord, ManagerInfo, RawSeasonRecord, SeasonRecord, StandingEntry,
    TeamEntry,
};

/// Shown when a manager has not picked a favourite club.
pub const NO_FAVOURITE_TEAM: &str = "-";

/// Join standings to manager details by team id.
///
/// Teams without manager details are kept with empty fields.
pub fn team_entries(standings: &[StandingEntry], managers: &[ManagerInfo]) -> Vec<TeamEntry> {
    let managers: HashMap<u32, &ManagerInfo> = managers.iter().map(|m| (m.team_id, m)).collect();
    standings
        .iter()
        .map(|standing| {
            let manager = managers.get(&standing.entry);
            TeamEntry {
                team_id: standing.entry,
                team_name: standing.entry_name.clone(),
                manager_name: standing.player_name.clone(),
                nationality: manager.and_then(|m| m.nationality.clone()),
                favourite_team_id: manager.and_then(|m| m.favourite_team_id),
            }
        })
        .collect()
}

/// Build the live table of the season in progress.
///
/// Points and league position default to 0 before any gameweek is played. The overall rank
/// stays unknown for teams without manager details.
pub fn summarise_current(
    standings: &[StandingEntry],
    managers: &[ManagerInfo],
    clubs: &ClubLookup,
    current_season_label: &str,
) -> Vec<CurrentSeasonRecord> {
    let overall_ranks: HashMap<u32, Option<u64>> = managers
        .iter()
        .map(|m| (m.team_id, m.overall_rank))
        .collect();

    let records = standings
        .iter()
        .zip(team_entries(standings, managers))
        .map(|(standing, team)| CurrentSeasonRecord {
            season_name: current_season_label.to_owned(),
            total_points: standing.total.unwrap_or_default(),
            rank: overall_ranks.get(&team.team_id).copied().flatten(),
            league_position: standing.rank.unwrap_or_default(),
            favourite_team_name: clubs
                .name(team.favourite_team_id)
                .unwrap_or(NO_FAVOURITE_TEAM)
                .to_owned(),
            team_id: team.team_id,
            team_name: team.team_name,
            manager_name: team.manager_name,
            nationality: team.nationality,
            favourite_team_id: team.favourite_team_id,
        })
        .collect::<Vec<_>>();
    debug!(count = records.len(), season = current_season_label, "summarised current season");
    records
}

/// Add a finished current season to the raw history unless it is already there.
///
/// Teams without a known overall rank are left out, since league positions are ranked on it.
pub fn with_completed_season(
    mut history: Vec<RawSeasonRecord>,
    current: &[CurrentSeasonRecord],
    season_finished: bool,
) -> Vec<RawSeasonRecord> {
    if !season_finished {
        return history;
    }
    let known: HashSet<(u32, String)> = history
        .iter()
        .map(|row| (row.team_id, row.season_name.clone()))
        .collect();
    for row in current {
        if known.contains(&(row.team_id, row.season_name.clone())) {
            continue;
        }
        let Some(rank) = row.rank else {
            warn!(
                team_id = row.team_id,
                season = %row.season_name,
                "no overall rank, leaving finished season out of history"
            );
            continue;
        };
        history.push(RawSeasonRecord {
            team_id: row.team_id,
            team_name: row.team_name.clone(),
            manager_name: row.manager_name.clone(),
            season_name: row.season_name.clone(),
            total_points: row.total_points,
            rank,
        });
    }
    history
}

/// Rank every season's rows by overall rank to get league positions.
///
/// Positions run 1..N within each season. Equal overall ranks are split by team id.
/// Output is ordered by season, then league position.
pub fn summarise_history(history: Vec<RawSeasonRecord>) -> Result<Vec<SeasonRecord>> {
    let mut seen = HashSet::new();
    let mut seasons: BTreeMap<String, Vec<RawSeasonRecord>> = BTreeMap::new();
    for row in history {
        if !seen.insert((row.team_id, row.season_name.clone())) {
            return Err(LeagueError::DuplicateSeasonRecord {
                team_id: row.team_id,
                season_name: row.season_name,
            });
        }
        seasons.entry(row.season_name.clone()).or_default().push(row);
    }

    let records = seasons
        .into_values()
        .flat_map(|mut rows| {
            rows.sort_by_key(|row| (row.rank, row.team_id));
            rows.into_iter().zip(1..).map(|(row, league_position)| SeasonRecord {
                team_id: row.team_id,
                team_name: row.team_name,
                manager_name: row.manager_name,
                season_name: row.season_name,
                total_points: row.total_points,
                rank: row.rank,
                league_position,
            })
        })
        .collect::<Vec<_>>();
    debug!(count = records.len(), "summarised season history");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Club;

    fn standing(entry: u32, name: &str, rank: Option<u32>, total: Option<i64>) -> StandingEntry {
        StandingEntry {
            entry,
            entry_name: name.to_string(),
            player_name: format!("Manager {name}"),
            rank,
            total,
        }
    }

    fn raw(team_id: u32, season: &str, rank: u64) -> RawSeasonRecord {
        RawSeasonRecord {
            team_id,
            team_name: format!("Team {team_id}"),
            manager_name: format!("Manager {team_id}"),
            season_name: season.to_string(),
            total_points: 2000,
            rank,
        }
    }

    fn clubs() -> ClubLookup {
        vec![Club {
            id: 1,
            name: "Arsenal".to_string(),
        }]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_summarise_current_joins_manager_info() {
        let standings = vec![
            standing(11, "Reds", Some(1), Some(1520)),
            standing(12, "Blues", Some(2), Some(1498)),
        ];
        let managers = vec![ManagerInfo {
            team_id: 11,
            overall_rank: Some(5021),
            nationality: Some("England".to_string()),
            favourite_team_id: Some(1),
        }];

        let current = summarise_current(&standings, &managers, &clubs(), "2024/25");
        assert_eq!(current.len(), 2);
        assert_eq!(current[0].season_name, "2024/25");
        assert_eq!(current[0].rank, Some(5021));
        assert_eq!(current[0].league_position, 1);
        assert_eq!(current[0].favourite_team_name, "Arsenal");
        // Team 12 has no manager details but stays in the table.
        assert_eq!(current[1].team_name, "Blues");
        assert_eq!(current[1].rank, None);
        assert_eq!(current[1].nationality, None);
        assert_eq!(current[1].favourite_team_name, NO_FAVOURITE_TEAM);
    }

    #[test]
    fn test_summarise_current_pre_season() {
        let standings = vec![standing(11, "Reds", None, None)];
        let current = summarise_current(&standings, &[], &clubs(), "2025/26");
        assert_eq!(current[0].total_points, 0);
        assert_eq!(current[0].rank, None);
        assert_eq!(current[0].league_position, 0);
    }

    #[test]
    fn test_summarise_current_empty() {
        assert!(summarise_current(&[], &[], &ClubLookup::default(), "2024/25").is_empty());
    }

    #[test]
    fn test_summarise_history_ranks_within_season() {
        let history = vec![
            raw(1, "2022/23", 50),
            raw(2, "2022/23", 10),
            raw(3, "2022/23", 30),
            raw(1, "2021/22", 7),
        ];
        let table = summarise_history(history).unwrap();

        let positions: HashMap<(u32, &str), u32> = table
            .iter()
            .map(|r| ((r.team_id, r.season_name.as_str()), r.league_position))
            .collect();
        assert_eq!(positions[&(1, "2022/23")], 3);
        assert_eq!(positions[&(2, "2022/23")], 1);
        assert_eq!(positions[&(3, "2022/23")], 2);
        assert_eq!(positions[&(1, "2021/22")], 1);

        let order: Vec<(&str, u32)> = table
            .iter()
            .map(|r| (r.season_name.as_str(), r.league_position))
            .collect();
        assert_eq!(
            order,
            vec![("2021/22", 1), ("2022/23", 1), ("2022/23", 2), ("2022/23", 3)]
        );
    }

    #[test]
    fn test_summarise_history_is_order_independent() {
        let forward = vec![raw(1, "2022/23", 10), raw(2, "2022/23", 10), raw(3, "2022/23", 5)];
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(
            summarise_history(forward).unwrap(),
            summarise_history(backward).unwrap()
        );
    }

    #[test]
    fn test_summarise_history_rejects_duplicates() {
        let history = vec![raw(1, "2022/23", 10), raw(1, "2022/23", 12)];
        assert!(matches!(
            summarise_history(history),
            Err(LeagueError::DuplicateSeasonRecord { team_id: 1, .. })
        ));
    }

    #[test]
    fn test_summarise_history_empty() {
        assert!(summarise_history(vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_with_completed_season() {
        let standings = vec![standing(1, "One", Some(1), Some(2500))];
        let managers = vec![ManagerInfo {
            team_id: 1,
            overall_rank: Some(900),
            nationality: None,
            favourite_team_id: None,
        }];
        let current = summarise_current(&standings, &managers, &clubs(), "2023/24");
        let history = vec![raw(1, "2022/23", 10)];

        let unchanged = with_completed_season(history.clone(), &current, false);
        assert_eq!(unchanged, history);

        let merged = with_completed_season(history.clone(), &current, true);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1].season_name, "2023/24");
        assert_eq!(merged[1].rank, 900);
        assert_eq!(merged[1].total_points, 2500);

        // Already present: nothing is appended twice.
        assert_eq!(with_completed_season(merged.clone(), &current, true), merged);
    }

    #[test]
    fn test_completed_season_skips_unknown_overall_rank() {
        let standings = vec![
            standing(1, "One", Some(1), Some(2600)),
            standing(2, "Two", Some(2), Some(1200)),
        ];
        let managers = vec![ManagerInfo {
            team_id: 1,
            overall_rank: Some(500),
            nationality: None,
            favourite_team_id: None,
        }];
        let current = summarise_current(&standings, &managers, &clubs(), "2024/25");

        let merged = with_completed_season(vec![], &current, true);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].team_id, 1);

        let table = summarise_history(merged).unwrap();
        assert_eq!(table[0].team_id, 1);
        assert_eq!(table[0].league_position, 1);
    }
}
