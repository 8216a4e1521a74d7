use std::future::Future;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, instrument, warn};

use crate::error::Result;
use crate::fpl_api;
use crate::model::{HistoryResponse, ManagerInfo, ManagerResponse, RawSeasonRecord, StandingEntry};

#[instrument(skip(client))]
pub(crate) async fn get_manager_info(
    client: &reqwest::Client,
    base_url: &str,
    team_id: u32,
) -> Result<ManagerInfo> {
    let url = fpl_api::endpoint(base_url, &format!("entry/{team_id}/"));
    let response: ManagerResponse = fpl_api::get_json(client, &url).await?;
    Ok(ManagerInfo::from_response(team_id, response))
}

#[instrument(skip(client, entry), fields(team_id = entry.entry))]
pub(crate) async fn get_team_history(
    client: &reqwest::Client,
    base_url: &str,
    entry: &StandingEntry,
) -> Result<Vec<RawSeasonRecord>> {
    let url = fpl_api::endpoint(base_url, &format!("entry/{}/history/", entry.entry));
    let response: HistoryResponse = fpl_api::get_json(client, &url).await?;
    let seasons = response
        .past
        .into_iter()
        .map(|season| RawSeasonRecord::tagged(entry, season))
        .collect::<Vec<_>>();
    debug!(count = seasons.len(), "parsed team history");
    Ok(seasons)
}

/// Fetch manager details for every entry, at most `limit` requests at a time.
///
/// A failed lookup only loses that team's manager details; the team itself is kept
/// by the reshaper.
#[instrument(skip(client, entries), fields(entries = entries.len()))]
pub(crate) async fn get_league_managers(
    client: &reqwest::Client,
    base_url: &str,
    entries: &[StandingEntry],
    limit: usize,
) -> Vec<ManagerInfo> {
    fan_out_managers(entries, limit, |entry| {
        get_manager_info(client, base_url, entry.entry)
    })
    .await
}

async fn fan_out_managers<'a, F, Fut>(
    entries: &'a [StandingEntry],
    limit: usize,
    fetch: F,
) -> Vec<ManagerInfo>
where
    F: Fn(&'a StandingEntry) -> Fut,
    Fut: Future<Output = Result<ManagerInfo>>,
{
    let results = stream::iter(entries)
        .map(|entry| {
            let info = fetch(entry);
            async move { (entry.entry, info.await) }
        })
        .buffer_unordered(limit.max(1))
        .collect::<Vec<_>>()
        .await;

    let managers = results
        .into_iter()
        .filter_map(|(team_id, result)| match result {
            Ok(info) => Some(info),
            Err(e) => {
                warn!(team_id, error = %e, "failed to fetch manager information");
                None
            }
        })
        .collect::<Vec<_>>();
    debug!(count = managers.len(), "fetched manager information");
    managers
}

/// Fetch the past seasons of every entry, at most `limit` requests at a time.
#[instrument(skip(client, entries), fields(entries = entries.len()))]
pub(crate) async fn get_league_history(
    client: &reqwest::Client,
    base_url: &str,
    entries: &[StandingEntry],
    limit: usize,
) -> Result<Vec<RawSeasonRecord>> {
    fan_out_history(entries, limit, |entry| {
        get_team_history(client, base_url, entry)
    })
    .await
}

/// Any failed entry fails the whole fan-out.
async fn fan_out_history<'a, F, Fut>(
    entries: &'a [StandingEntry],
    limit: usize,
    fetch: F,
) -> Result<Vec<RawSeasonRecord>>
where
    F: Fn(&'a StandingEntry) -> Fut,
    Fut: Future<Output = Result<Vec<RawSeasonRecord>>>,
{
    let histories = stream::iter(entries)
        .map(fetch)
        .buffer_unordered(limit.max(1))
        .try_collect::<Vec<_>>()
        .await?;

    let history = histories.into_iter().flatten().collect::<Vec<_>>();
    debug!(count = history.len(), "fetched league history");
    Ok(history)
}
