pub(crate) mod bootstrap;
pub(crate) mod entry;
pub(crate) mod league;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{LeagueError, Result};

/// Join an API path onto `base_url`, whether or not it ends in `/`.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{path}", base_url.trim_end_matches('/'))
}

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "fetching endpoint");

    let response = client.get(url).send().await.map_err(|e| LeagueError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LeagueError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| LeagueError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}
