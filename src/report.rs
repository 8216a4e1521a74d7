//! End-to-end assembly of every table shown for one league.

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::aggregate::{
    aggregate_top_three, all_time_table, build_team_overview, league_summary, titles_summary,
};
use crate::error::Result;
use crate::filter::filter_history;
use crate::format::{
    all_time_header, all_time_standings_table, current_season_header, history_header,
    league_summary_kpis, season_current_table, season_history_table, team_overview_table,
    titles_table, top_three_table,
};
use crate::model::{
    LeagueInfo, LeagueSummary, ManagerInfo, RawSeasonRecord, SeasonInfo, StandingEntry, Table,
};
use crate::reshape::{summarise_current, summarise_history, with_completed_season};
use crate::season::{start_year_range, Clock};

pub const CHAMPIONS_HEADER: &str = "Champions";
pub const LIST_OF_CHAMPIONS_HEADER: &str = "List of Champions";
pub const TEAM_OVERVIEW_HEADER: &str = "Team Summary Statistics";

/// Everything fetched for one league, before any reshaping.
#[derive(Debug, Clone)]
pub struct LeagueData {
    pub league: LeagueInfo,
    pub standings: Vec<StandingEntry>,
    pub managers: Vec<ManagerInfo>,
    pub history: Vec<RawSeasonRecord>,
    pub season: SeasonInfo,
}

/// A table together with the heading it is displayed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub header: String,
    pub table: Table,
}

impl Section {
    fn new(header: impl Into<String>, table: Table) -> Self {
        Self {
            header: header.into(),
            table,
        }
    }
}

/// The formatted tables of a league dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueReport {
    pub league_name: String,
    pub start_year: i32,
    /// The raw headline facts behind `summary`.
    pub highlights: LeagueSummary,
    /// Headline facts, one row per fact under a column named after the league.
    pub summary: Table,
    pub champions: Section,
    pub list_of_champions: Section,
    pub all_time: Section,
    pub team_overview: Section,
    pub current_season: Section,
    pub history: Section,
}

/// Reshape, filter, aggregate and format fetched league data.
///
/// `start_year` is clamped into the range of seasons that can exist on `clock`'s date.
#[instrument(skip(data, clock), fields(league_id = data.league.id))]
pub fn build_report(data: &LeagueData, start_year: i32, clock: &impl Clock) -> Result<LeagueReport> {
    let range = start_year_range(clock);
    let start_year = if range.contains(&start_year) {
        start_year
    } else {
        let clamped = start_year.clamp(*range.start(), *range.end());
        warn!(requested = start_year, used = clamped, "start year out of range");
        clamped
    };

    let season = &data.season;
    let current = summarise_current(
        &data.standings,
        &data.managers,
        &season.clubs,
        &season.current_season_label,
    );
    let raw_history = with_completed_season(data.history.clone(), &current, season.season_finished);
    let history = summarise_history(raw_history)?;
    let filtered = filter_history(&history, start_year)?;

    let overview = build_team_overview(&filtered, &data.managers, &season.clubs);
    let highlights = league_summary(&filtered, &overview, &data.standings)?;
    let titles = titles_summary(&overview);
    let top_three = aggregate_top_three(&filtered);
    let all_time = all_time_table(&filtered);
    debug!(
        seasons = filtered.len(),
        teams = overview.len(),
        "aggregated league history"
    );

    let league_name = data.league.name.as_str();
    Ok(LeagueReport {
        league_name: league_name.to_owned(),
        start_year,
        summary: league_summary_kpis(&highlights).with_columns([league_name]),
        highlights,
        champions: Section::new(CHAMPIONS_HEADER, titles_table(&titles)),
        list_of_champions: Section::new(LIST_OF_CHAMPIONS_HEADER, top_three_table(&top_three)),
        all_time: Section::new(all_time_header(league_name), all_time_standings_table(&all_time)),
        team_overview: Section::new(TEAM_OVERVIEW_HEADER, team_overview_table(&overview)),
        current_season: Section::new(
            current_season_header(season.season_finished, season.current_gameweek),
            season_current_table(&current),
        ),
        history: Section::new(history_header(league_name), season_history_table(&filtered)),
    })
}
