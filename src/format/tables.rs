use strum::IntoEnumIterator;

use crate::format::{thousands, thousands_f64};
use crate::model::{
    AllTimeRow, CurrentSeasonRecord, FinishPosition, LeagueSummary, PlotRow,
    SeasonRecord, Table, TeamOverview, TitlesRow, TopThreeRow,
};

const CURRENT_SEASON_COLUMNS: [&str; 5] = ["Pos", "Manager", "Team", "Total Points", "Overall Rank"];

const SEASON_HISTORY_COLUMNS: [&str; 6] = [
    "Season",
    "Pos",
    "Manager",
    "Team",
    "Total Points",
    "Overall Rank",
];

const TITLES_COLUMNS: [&str; 5] = ["Rank", "Team", "Winners", "Runners-up", "Winning Seasons"];

const ALL_TIME_COLUMNS: [&str; 6] = [
    "Manager",
    "Team",
    "Total Points",
    "Average Points",
    "Total Seasons Played",
    "Average Rank",
];

const TEAM_OVERVIEW_ROWS: [&str; 14] = [
    "Manager",
    "Team",
    "Winners",
    "Winning Seasons",
    "Runners-up",
    "Runner-up Seasons",
    "Third",
    "Third Seasons",
    "Total Seasons Played",
    "Seasons Played",
    "Best Points in a Season",
    "Best Rank in a Season",
    "Favourite Team",
    "Nationality",
];

const SUMMARY_ROWS: [&str; 6] = [
    "Founded",
    "Number of teams",
    "Current Champions",
    "Most Championships",
    "Most Points in a Season",
    "Highest Rank in a Season",
];

pub fn season_current_table(records: &[CurrentSeasonRecord]) -> Table {
    let mut table = Table::new(CURRENT_SEASON_COLUMNS);
    for r in records {
        table.push_row(vec![
            r.league_position.to_string(),
            r.manager_name.clone(),
            r.team_name.clone(),
            thousands(r.total_points),
            thousands(r.rank.unwrap_or_default()),
        ]);
    }
    table
}

pub fn season_history_table(records: &[SeasonRecord]) -> Table {
    let mut table = Table::new(SEASON_HISTORY_COLUMNS);
    for r in records {
        table.push_row(vec![
            r.season_name.clone(),
            r.league_position.to_string(),
            r.manager_name.clone(),
            r.team_name.clone(),
            thousands(r.total_points),
            thousands(r.rank),
        ]);
    }
    table
}

/// Team overview with one column per team (headed by team name) and one row per attribute.
pub fn team_overview_table(overview: &[TeamOverview]) -> Table {
    let mut table = Table::new(TEAM_OVERVIEW_ROWS);
    for t in overview {
        table.push_labelled_row(
            t.team_name.clone(),
            vec![
                t.manager_name.clone(),
                t.team_name.clone(),
                t.seasons_won.to_string(),
                t.seasons_won_years.clone().unwrap_or_default(),
                t.seasons_runner_up.to_string(),
                t.seasons_runner_up_years.clone().unwrap_or_default(),
                t.seasons_third.to_string(),
                t.seasons_third_years.clone().unwrap_or_default(),
                t.seasons_played.to_string(),
                t.seasons_played_years.clone(),
                format!("{} ({})", thousands(t.maximum_points), t.max_points_season),
                format!("{} ({})", thousands(t.minimum_rank), t.min_rank_season),
                t.favourite_team_name.clone().unwrap_or_default(),
                t.nationality.clone().unwrap_or_default(),
            ],
        );
    }
    table.transpose()
}

pub fn titles_table(rows: &[TitlesRow]) -> Table {
    let mut table = Table::new(TITLES_COLUMNS);
    for r in rows {
        table.push_row(vec![
            r.rank.to_string(),
            r.team.clone(),
            r.seasons_won.to_string(),
            r.seasons_runner_up.to_string(),
            r.winning_seasons.clone(),
        ]);
    }
    table
}

pub fn top_three_table(rows: &[TopThreeRow]) -> Table {
    let columns = std::iter::once("Season".to_string())
        .chain(FinishPosition::iter().map(|position| position.to_string()));
    let mut table = Table::new(columns);
    for r in rows {
        table.push_row(vec![
            r.season_name.clone(),
            r.champion.clone(),
            r.runner_up.clone(),
            r.third.clone(),
        ]);
    }
    table
}

pub fn all_time_standings_table(rows: &[AllTimeRow]) -> Table {
    let mut table = Table::new(ALL_TIME_COLUMNS);
    for r in rows {
        table.push_row(vec![
            r.manager_name.clone(),
            r.team_name.clone(),
            thousands(r.total_points),
            thousands_f64(r.average_points),
            r.seasons_played.to_string(),
            thousands_f64(r.average_rank),
        ]);
    }
    table
}

/// Headline facts as a single unnamed column labelled by fact.
pub fn league_summary_kpis(summary: &LeagueSummary) -> Table {
    let values = [
        &summary.founded,
        &summary.number_of_teams,
        &summary.current_champions,
        &summary.most_championships,
        &summary.most_points,
        &summary.highest_rank,
    ];
    let mut table = Table::new([""]);
    for (label, value) in SUMMARY_ROWS.into_iter().zip(values) {
        table.push_labelled_row(label, vec![value.clone()]);
    }
    table
}

/// Chart data: a `Season` column followed by one raw-valued column per team.
pub fn plot_table(teams: &[&str], rows: &[PlotRow]) -> Table {
    let columns = std::iter::once("Season").chain(teams.iter().copied());
    let mut table = Table::new(columns);
    for r in rows {
        let mut cells = vec![r.season_name.clone()];
        cells.extend(
            r.values
                .iter()
                .map(|v| v.map(|v| v.to_string()).unwrap_or_default()),
        );
        table.push_row(cells);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season_record(season: &str, position: u32) -> SeasonRecord {
        SeasonRecord {
            team_id: 1,
            team_name: "Reds".to_string(),
            manager_name: "Ann Lee".to_string(),
            season_name: season.to_string(),
            total_points: 2456,
            rank: 1234567,
            league_position: position,
        }
    }

    #[test]
    fn test_season_history_table() {
        let table = season_history_table(&[season_record("2022/23", 1)]);
        assert_eq!(table.columns, SEASON_HISTORY_COLUMNS);
        assert_eq!(
            table.rows[0],
            vec!["2022/23", "1", "Ann Lee", "Reds", "2,456", "1,234,567"]
        );
    }

    #[test]
    fn test_season_current_table() {
        let record = CurrentSeasonRecord {
            season_name: "2024/25".to_string(),
            total_points: 0,
            rank: None,
            team_id: 1,
            team_name: "Reds".to_string(),
            manager_name: "Ann Lee".to_string(),
            league_position: 0,
            nationality: None,
            favourite_team_id: None,
            favourite_team_name: "-".to_string(),
        };
        let table = season_current_table(&[record]);
        assert_eq!(table.columns, CURRENT_SEASON_COLUMNS);
        assert_eq!(table.rows[0], vec!["0", "Ann Lee", "Reds", "0", "0"]);
        assert!(season_current_table(&[]).is_empty());
    }

    #[test]
    fn test_team_overview_table_is_transposed() {
        let overview = TeamOverview {
            team_id: 1,
            team_name: "Reds".to_string(),
            manager_name: "Ann Lee".to_string(),
            seasons_won: 2,
            seasons_runner_up: 0,
            seasons_third: 1,
            seasons_played: 3,
            maximum_points: 2512,
            max_points_season: "2021/22".to_string(),
            minimum_rank: 10234,
            min_rank_season: "2022/23".to_string(),
            seasons_played_years: "2020/21, 2021/22, 2022/23".to_string(),
            seasons_won_years: Some("2020/21, 2022/23".to_string()),
            seasons_runner_up_years: None,
            seasons_third_years: Some("2021/22".to_string()),
            favourite_team_name: Some("Arsenal".to_string()),
            nationality: None,
            rank: 1,
        };
        let table = team_overview_table(&[overview]);
        assert_eq!(table.columns, vec!["Reds"]);
        assert_eq!(table.index, TEAM_OVERVIEW_ROWS);
        assert_eq!(table.labelled_cell("Winners", "Reds"), Some("2"));
        assert_eq!(table.labelled_cell("Runner-up Seasons", "Reds"), Some(""));
        assert_eq!(
            table.labelled_cell("Best Points in a Season", "Reds"),
            Some("2,512 (2021/22)")
        );
        assert_eq!(
            table.labelled_cell("Best Rank in a Season", "Reds"),
            Some("10,234 (2022/23)")
        );
        assert_eq!(table.labelled_cell("Favourite Team", "Reds"), Some("Arsenal"));
        assert_eq!(table.labelled_cell("Nationality", "Reds"), Some(""));
    }

    #[test]
    fn test_team_overview_table_empty() {
        let table = team_overview_table(&[]);
        assert!(table.columns.is_empty());
        assert_eq!(table.len(), TEAM_OVERVIEW_ROWS.len());
    }

    #[test]
    fn test_top_three_table_headers() {
        let table = top_three_table(&[TopThreeRow {
            season_name: "2021/22".to_string(),
            champion: "Ann Lee: Reds (1)".to_string(),
            runner_up: String::new(),
            third: String::new(),
        }]);
        assert_eq!(
            table.columns,
            vec!["Season", "Champions (number of titles)", "Runners-up", "Third Place"]
        );
        assert_eq!(table.cell(0, "Runners-up"), Some(""));
    }

    #[test]
    fn test_all_time_standings_table() {
        let table = all_time_standings_table(&[AllTimeRow {
            manager_name: "Ann Lee".to_string(),
            team_name: "Reds".to_string(),
            total_points: 12500,
            average_points: 2083.33,
            seasons_played: 6,
            average_rank: 152345.6,
        }]);
        assert_eq!(table.columns, ALL_TIME_COLUMNS);
        assert_eq!(
            table.rows[0],
            vec!["Ann Lee", "Reds", "12,500", "2,083", "6", "152,346"]
        );
    }

    #[test]
    fn test_league_summary_kpis_preserves_values() {
        let summary = LeagueSummary {
            founded: "1992".to_string(),
            number_of_teams: "20".to_string(),
            current_champions: "Manager A: Team A (3rd title) (2022/23)".to_string(),
            most_championships: "Manager B: Team B (5 titles)".to_string(),
            most_points: "Manager C: Team C: Points: 95 (2021/22)".to_string(),
            highest_rank: "Manager D: Team D: Rank: 1 (2020/21)".to_string(),
        };
        let table = league_summary_kpis(&summary);
        assert_eq!(table.columns.len(), 1);
        assert_eq!(table.index, SUMMARY_ROWS);
        assert_eq!(table.labelled_cell("Founded", ""), Some("1992"));
        assert_eq!(table.labelled_cell("Number of teams", ""), Some("20"));
        assert_eq!(
            table.labelled_cell("Most Points in a Season", ""),
            Some("Manager C: Team C: Points: 95 (2021/22)")
        );
        assert_eq!(
            table.labelled_cell("Highest Rank in a Season", ""),
            Some("Manager D: Team D: Rank: 1 (2020/21)")
        );
    }

    #[test]
    fn test_plot_table() {
        let rows = vec![PlotRow {
            season_name: "2021/22".to_string(),
            values: vec![Some(2000), None],
        }];
        let table = plot_table(&["Reds", "Blues"], &rows);
        assert_eq!(table.columns, vec!["Season", "Reds", "Blues"]);
        assert_eq!(table.rows[0], vec!["2021/22", "2000", ""]);
    }
}
