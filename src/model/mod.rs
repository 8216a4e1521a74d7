mod api;
mod league;
mod table;

pub use api::*;
pub use league::*;
pub use table::*;
