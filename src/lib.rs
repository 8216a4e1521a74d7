pub use client::FplClient;
pub use config::FetchConfig;
pub use error::{LeagueError, Result};
pub use model::*;
pub use report::{build_report, LeagueData, LeagueReport, Section};
pub use season::{Clock, FixedClock, SystemClock};

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub(crate) mod fpl_api;
pub mod model;
pub mod report;
pub mod reshape;
pub mod season;
