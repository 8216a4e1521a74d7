use chrono::{DateTime, Datelike};
use tracing::{debug, instrument};

use crate::error::{LeagueError, Result};
use crate::fpl_api;
use crate::model::{BootstrapResponse, SeasonInfo};
use crate::season::season_label;

#[instrument(skip(client))]
pub(crate) async fn get_season_info(client: &reqwest::Client, base_url: &str) -> Result<SeasonInfo> {
    let url = fpl_api::endpoint(base_url, "bootstrap-static/");
    let response: BootstrapResponse = fpl_api::get_json(client, &url).await?;
    let info = parse_season_info(response)?;
    debug!(
        season = %info.current_season_label,
        finished = info.season_finished,
        gameweek = ?info.current_gameweek,
        clubs = info.clubs.len(),
        "parsed bootstrap feed"
    );
    Ok(info)
}

fn parse_season_info(response: BootstrapResponse) -> Result<SeasonInfo> {
    let first = response.events.first().ok_or(LeagueError::MissingGameweeks)?;
    let last = response.events.last().ok_or(LeagueError::MissingGameweeks)?;

    let start_year = DateTime::parse_from_rfc3339(&first.deadline_time)?.year();
    let current_gameweek = response
        .events
        .iter()
        .find(|gw| gw.is_current)
        .map(|gw| gw.id);

    Ok(SeasonInfo {
        season_finished: last.finished,
        current_season_label: season_label(start_year),
        current_gameweek,
        clubs: response.teams.into_iter().collect(),
    })
}
