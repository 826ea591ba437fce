pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod parser;

pub use crate::config::{Markers, Settings};
pub use crate::error::{DateError, LineupError};
pub use crate::model::{Artist, Lineup};
pub use crate::parser::{extract, parse_lineup, parse_lineup_file};
