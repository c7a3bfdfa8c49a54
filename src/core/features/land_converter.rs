//! Land area conversion
//!
//! Conversion constants follow the Lucknow, Uttar Pradesh standard:
//!
//! - 1 biswa = 126.486 m² = 1361 ft² = 0.0126486 ha
//! - 1 bigha = 20 biswa
//! - 1 biswa = 20 biswansi
//! - 1 ha = 10,000 m²
//!
//! Every conversion pivots on square meters. No rounding happens here;
//! display precision is the job of [`format`].

pub mod aliases;
pub mod bulk;
pub mod format;

use crate::shared::types::{ConversionValues, LandUnit};

pub use aliases::resolve_unit;
pub use bulk::{parse_and_convert, BulkOutcome};
pub use format::format_number;

pub const BISWA_TO_SQUARE_METER: f64 = 126.486;
pub const BISWA_TO_SQUARE_FEET: f64 = 1361.0;
pub const BIGHA_TO_BISWA: f64 = 20.0;
pub const BISWA_TO_BISWANSI: f64 = 20.0;
pub const HECTARE_TO_SQUARE_METER: f64 = 10_000.0;

const BIGHA_TO_SQUARE_METER: f64 = BIGHA_TO_BISWA * BISWA_TO_SQUARE_METER;
const BISWANSI_TO_SQUARE_METER: f64 = BISWA_TO_SQUARE_METER / BISWA_TO_BISWANSI;
const SQUARE_FEET_PER_SQUARE_METER: f64 = BISWA_TO_SQUARE_FEET / BISWA_TO_SQUARE_METER;

/// Square meters covered by `value` of `unit`
pub fn to_square_meters(value: f64, unit: LandUnit) -> f64 {
    match unit {
        LandUnit::SquareMeter => value,
        LandUnit::Biswansi => value * BISWANSI_TO_SQUARE_METER,
        LandUnit::Biswa => value * BISWA_TO_SQUARE_METER,
        LandUnit::Bigha => value * BIGHA_TO_SQUARE_METER,
        LandUnit::Hectare => value * HECTARE_TO_SQUARE_METER,
        LandUnit::SquareFeet => value / SQUARE_FEET_PER_SQUARE_METER,
    }
}

/// Express `value` of `from_unit` in every supported unit.
///
/// Callers validate first: `value` must be finite and non-negative
/// (see [`parse_input_value`]).
pub fn convert(value: f64, from_unit: LandUnit) -> ConversionValues {
    let square_meter = to_square_meters(value, from_unit);

    ConversionValues {
        biswansi: square_meter / BISWANSI_TO_SQUARE_METER,
        biswa: square_meter / BISWA_TO_SQUARE_METER,
        bigha: square_meter / BIGHA_TO_SQUARE_METER,
        hectare: square_meter / HECTARE_TO_SQUARE_METER,
        square_meter,
        square_feet: square_meter * SQUARE_FEET_PER_SQUARE_METER,
    }
}

/// Parse a numeric value, accepting only finite reals >= 0.
pub fn parse_input_value(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// What the interactive calculator should do with the text typed into a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Empty field or a lone minus sign: the user is still typing, clear everything
    Clear,
    /// Not an acceptable number: leave the fields as they are
    Ignore,
    Convert(f64),
}

pub fn classify_input(text: &str) -> InputAction {
    if text.is_empty() || text == "-" {
        return InputAction::Clear;
    }
    match parse_input_value(text) {
        Some(value) => InputAction::Convert(value),
        None => InputAction::Ignore,
    }
}
