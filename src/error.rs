/// Message shown to end users whenever building a league report fails.
pub const USER_ERROR_MESSAGE: &str = "Unable to get league data. League ID is a number located in the league URL: https://fantasy.premierleague.com/leagues/XXXXXX/standings/c";

/// All errors that can occur while fetching or summarising league data.
#[derive(thiserror::Error, Debug)]
pub enum LeagueError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read or decode the JSON response body.
    #[error("failed to decode response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The bootstrap feed listed no gameweeks.
    #[error("bootstrap feed contains no gameweeks")]
    MissingGameweeks,

    /// Failed to parse a gameweek deadline from the bootstrap feed.
    #[error("failed to parse deadline: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// A season label did not start with a four digit year.
    #[error("malformed season label {label:?}: expected \"YYYY/YY\"")]
    MalformedSeasonLabel { label: String },

    /// The same team appears twice for one season.
    #[error("duplicate record for team {team_id} in season {season_name}")]
    DuplicateSeasonRecord { team_id: u32, season_name: String },

    /// An operation needed at least one season record.
    #[error("no season history available")]
    EmptyHistory,

    /// A team referenced by the history is missing from the overview.
    #[error("team {team_id} not found in overview")]
    TeamNotFound { team_id: u32 },

    /// A configuration value could not be parsed.
    #[error("invalid configuration for {key}: {value:?}")]
    Config { key: &'static str, value: String },
}

impl LeagueError {
    /// Whether the failure came from the upstream API rather than the data itself.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            LeagueError::Http { .. }
                | LeagueError::UnexpectedStatus { .. }
                | LeagueError::ResponseBody { .. }
                | LeagueError::MissingGameweeks
                | LeagueError::DateParse(_)
        )
    }

    /// The single user-facing message every failure collapses to.
    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
