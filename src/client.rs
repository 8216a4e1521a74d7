use tracing::instrument;

use crate::config::FetchConfig;
use crate::error::Result;
use crate::fpl_api;
use crate::model::*;
use crate::report::{build_report, LeagueData, LeagueReport};
use crate::season::SystemClock;

/// The main entry point for reading a classic league from the Fantasy Premier League API.
///
/// `FplClient` wraps a [`reqwest::Client`] and a [`FetchConfig`], and exposes methods
/// to fetch standings, manager details, season history and the finished league report.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> fpl_league_history::Result<()> {
/// use fpl_league_history::FplClient;
///
/// let client = FplClient::new();
/// let report = client.get_league_report(314, 2016).await?;
/// println!("{} teams", report.highlights.number_of_teams);
/// # Ok(())
/// # }
/// ```
pub struct FplClient {
    http: reqwest::Client,
    config: FetchConfig,
}

impl FplClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            config: FetchConfig::default(),
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            config: FetchConfig::default(),
        }
    }

    /// Create a client whose HTTP timeout and user agent come from `config`.
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        Ok(Self {
            http: config.build_http_client()?,
            config,
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch the league name and its live standings.
    #[instrument(skip(self))]
    pub async fn get_league_standings(&self, league_id: u32) -> Result<(LeagueInfo, Vec<StandingEntry>)> {
        fpl_api::league::get_league_standings(
            &self.http,
            &self.config.base_url,
            league_id,
            self.config.paginate,
        )
        .await
    }

    /// Fetch the details of a single manager.
    #[instrument(skip(self))]
    pub async fn get_manager_info(&self, team_id: u32) -> Result<ManagerInfo> {
        fpl_api::entry::get_manager_info(&self.http, &self.config.base_url, team_id).await
    }

    /// Fetch season status, current gameweek and the club list.
    #[instrument(skip(self))]
    pub async fn get_season_info(&self) -> Result<SeasonInfo> {
        fpl_api::bootstrap::get_season_info(&self.http, &self.config.base_url).await
    }

    /// Fetch everything needed to summarise a league.
    ///
    /// Standings and the bootstrap feed are read together, then every team's manager
    /// details and past seasons are fetched through a pool of at most
    /// `max_concurrent_requests` requests per endpoint.
    #[instrument(skip(self))]
    pub async fn get_league_data(&self, league_id: u32) -> Result<LeagueData> {
        let base_url = self.config.base_url.as_str();
        let limit = self.config.max_concurrent_requests;

        let ((league, standings), season) = futures::try_join!(
            fpl_api::league::get_league_standings(
                &self.http,
                base_url,
                league_id,
                self.config.paginate
            ),
            fpl_api::bootstrap::get_season_info(&self.http, base_url),
        )?;

        let (managers, history) = futures::join!(
            fpl_api::entry::get_league_managers(&self.http, base_url, &standings, limit),
            fpl_api::entry::get_league_history(&self.http, base_url, &standings, limit),
        );

        Ok(LeagueData {
            league,
            managers,
            history: history?,
            standings,
            season,
        })
    }

    /// Fetch a league and build its report, keeping seasons from `start_year` onwards.
    #[instrument(skip(self))]
    pub async fn get_league_report(&self, league_id: u32, start_year: i32) -> Result<LeagueReport> {
        let data = self.get_league_data(league_id).await?;
        build_report(&data, start_year, &SystemClock)
    }
}

impl Default for FplClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_config_keeps_settings() {
        let config = FetchConfig {
            base_url: "http://localhost:9000/api".to_string(),
            paginate: false,
            max_concurrent_requests: 2,
            timeout_secs: 5,
            user_agent: Some("league-history-tests".to_string()),
        };
        let client = FplClient::with_config(config.clone()).unwrap();
        assert_eq!(client.config(), &config);
        assert_eq!(FplClient::default().config(), &FetchConfig::default());
    }

    #[tokio::test]
    async fn test_unreachable_api_is_upstream_error() {
        let config = FetchConfig {
            // nothing listens on the discard port
            base_url: "http://127.0.0.1:9/api".to_string(),
            timeout_secs: 2,
            ..FetchConfig::default()
        };
        let client = FplClient::with_config(config).unwrap();
        let err = client.get_league_data(314).await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.user_message(), crate::error::USER_ERROR_MESSAGE);
    }

    #[tokio::test]
    #[ignore = "hits the live FPL API"]
    async fn test_live_league_report() {
        let client = FplClient::new();
        let report = client.get_league_report(314, 2016).await.unwrap();
        assert!(!report.current_season.table.is_empty());
        assert_eq!(report.summary.columns, vec![report.league_name.clone()]);
    }
}
