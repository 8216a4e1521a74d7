use crate::error::Result;
use crate::model::SeasonRecord;
use crate::season::season_start_year;

/// Keep the seasons that started in `start_year` or later.
///
/// Fails on the first season label without a leading four digit year.
pub fn filter_history(history: &[SeasonRecord], start_year: i32) -> Result<Vec<SeasonRecord>> {
    let mut kept = Vec::with_capacity(history.len());
    for record in history {
        if season_start_year(&record.season_name)? >= start_year {
            kept.push(record.clone());
        }
    }
    Ok(kept)
}
