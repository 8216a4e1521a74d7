use tracing_subscriber::EnvFilter;

use fpl_league_history::{FetchConfig, FplClient, Section, Table};

fn print_table(table: &Table) {
    let label_width = table.index.iter().map(String::len).max().unwrap_or(0);
    let mut widths: Vec<usize> = table.columns.iter().map(String::len).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let line = |label: &str, cells: &[String]| {
        let mut out = if table.index.is_empty() {
            String::new()
        } else {
            format!("{label:<label_width$} | ")
        };
        for (cell, width) in cells.iter().zip(widths.iter().copied()) {
            out.push_str(&format!("{cell:<width$} | "));
        }
        println!("{}", out.trim_end());
    };

    line("", &table.columns);
    for (i, row) in table.rows.iter().enumerate() {
        line(table.index.get(i).map(String::as_str).unwrap_or_default(), row);
    }
}

fn print_section(section: &Section) {
    println!("\n## {}\n", section.header);
    print_table(&section.table);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let league_id: u32 = args
        .next()
        .and_then(|id| id.parse().ok())
        .expect("usage: league_report <league id> [start year]");
    let start_year: i32 = args.next().and_then(|y| y.parse().ok()).unwrap_or(2016);

    let config = FetchConfig::from_env().unwrap();
    let client = FplClient::with_config(config).unwrap();

    match client.get_league_report(league_id, start_year).await {
        Ok(report) => {
            println!("# {}", report.league_name);
            print_table(&report.summary);
            for section in [
                &report.champions,
                &report.list_of_champions,
                &report.all_time,
                &report.team_overview,
                &report.current_season,
                &report.history,
            ] {
                print_section(section);
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to build league report");
            eprintln!("{}", e.user_message());
        }
    }
}
