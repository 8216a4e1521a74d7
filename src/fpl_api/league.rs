use std::future::Future;

use tracing::{debug, instrument};

use crate::error::Result;
use crate::fpl_api;
use crate::model::{LeagueInfo, StandingEntry, StandingsResponse};

#[instrument(skip(client))]
pub(crate) async fn get_league_standings(
    client: &reqwest::Client,
    base_url: &str,
    league_id: u32,
    paginate: bool,
) -> Result<(LeagueInfo, Vec<StandingEntry>)> {
    let (league, standings) = collect_pages(paginate, |page| async move {
        let url = standings_url(base_url, league_id, page);
        fpl_api::get_json::<StandingsResponse>(client, &url).await
    })
    .await?;
    debug!(count = standings.len(), league_id, "parsed league standings");
    Ok((league, standings))
}

/// Read standings pages from 1 upwards while `has_next` is set, or page 1 only.
async fn collect_pages<F, Fut>(
    paginate: bool,
    mut fetch_page: F,
) -> Result<(LeagueInfo, Vec<StandingEntry>)>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<StandingsResponse>>,
{
    let mut page = 1;
    let mut standings = vec![];
    loop {
        let response = fetch_page(page).await?;
        let has_next = response.standings.has_next;
        standings.extend(response.standings.results);

        if !paginate || !has_next {
            debug!(pages = page, "read standings pages");
            return Ok((response.league, standings));
        }
        page += 1;
    }
}

fn standings_url(base_url: &str, league_id: u32, page: u32) -> String {
    fpl_api::endpoint(
        base_url,
        &format!("leagues-classic/{league_id}/standings/?page_standings={page}"),
    )
}
