//! Text helpers shared by the aggregation and presentation layers.

mod tables;

pub use tables::*;

/// Format an integer with `,` thousands separators.
pub fn thousands(value: impl Into<i128>) -> String {
    let value = value.into();
    group_digits(&value.unsigned_abs().to_string(), value < 0)
}

/// Round to zero decimal places and add `,` thousands separators.
pub fn thousands_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let digits = format!("{:.0}", value.abs());
    group_digits(&digits, value < 0.0 && digits != "0")
}

fn group_digits(digits: &str, negative: bool) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// English ordinal: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Drop a leading "the " (any case) and the whitespace after it.
pub fn remove_starting_the(text: &str) -> &str {
    match text.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("the ") => {
            text.get(4..).unwrap_or_default().trim_start()
        }
        _ => text,
    }
}

pub fn current_season_header(season_finished: bool, gameweek: Option<u32>) -> String {
    if season_finished {
        "Current Season (Completed)".to_string()
    } else {
        match gameweek {
            Some(gw) => format!("Current Season (GW {gw})"),
            None => "Current Season (GW -)".to_string(),
        }
    }
}

pub fn all_time_header(league_name: &str) -> String {
    format!("All-time {} table", remove_starting_the(league_name))
}

pub fn history_header(league_name: &str) -> String {
    format!("Previous {} seasons", remove_starting_the(league_name))
}
