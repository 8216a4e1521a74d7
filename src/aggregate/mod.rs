//! Career, podium and headline aggregates over a filtered season history.

mod highlights;
mod overview;
mod seasons;

pub use highlights::*;
pub use overview::*;
pub use seasons::*;

use crate::error::Result;
use crate::model::{BestColumn, LeagueSummary, SeasonRecord, StandingEntry, TeamOverview};

/// Collect the six headline facts shown at the top of a league report.
///
/// A league with no completed seasons gets empty cells rather than an error.
pub fn league_summary(
    history: &[SeasonRecord],
    overview: &[TeamOverview],
    standings: &[StandingEntry],
) -> Result<LeagueSummary> {
    Ok(LeagueSummary {
        founded: first_season_year(history),
        number_of_teams: number_of_teams(standings).to_string(),
        current_champions: if history.is_empty() {
            String::new()
        } else {
            current_champions(history, overview)?
        },
        most_championships: most_titles(overview),
        most_points: best_rank_or_points(history, BestColumn::TotalPoints),
        highest_rank: best_rank_or_points(history, BestColumn::Rank),
    })
}
