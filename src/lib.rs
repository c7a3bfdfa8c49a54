//! Land area calculator
//!
//! Converts between biswansi, biswa, bigha, hectare, square meters and
//! square feet, parses bulk `"<value> <unit>"` input and keeps a bounded,
//! persisted history of past conversions.

pub mod core;
pub mod shared;

pub use crate::core::calculator::LandCalculator;
pub use crate::core::features::land_converter::{convert, format_number, parse_and_convert, resolve_unit};
pub use crate::core::history::{HistoryStore, MAX_HISTORY_SIZE};
pub use crate::core::state::AppState;
pub use crate::shared::types::{ConversionValues, HistoryEntry, LandUnit, Language};
