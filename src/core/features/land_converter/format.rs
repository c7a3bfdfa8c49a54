use crate::shared::types::LandUnit;

/// Below this magnitude values are shown in exponential notation
const EXPONENTIAL_THRESHOLD: f64 = 1e-6;

/// Maximum decimal places shown for a unit
pub fn max_decimals(unit: LandUnit) -> usize {
    match unit {
        LandUnit::SquareMeter => 3,
        LandUnit::Hectare => 7,
        LandUnit::SquareFeet => 0,
        _ => 2,
    }
}

// Square meters always show every decimal place
fn keeps_trailing_zeros(unit: LandUnit) -> bool {
    unit == LandUnit::SquareMeter
}

// Helper to add thousands separators to a string of digits
fn add_thousands_separators(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Format a value for display in `unit`.
///
/// Examples: `1234.5678` m² -> `"1,234.568"`, `1234.5` ft² -> `"1,235"`,
/// `12.50` biswa -> `"12.5"`, `1e-7` ha -> `"1.00e-7"`.
pub fn format_number(value: f64, unit: LandUnit) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.abs() < EXPONENTIAL_THRESHOLD {
        return format!("{:.2e}", value);
    }

    let decimals = max_decimals(unit);
    let scale = 10f64.powi(decimals as i32);
    // f64::round rounds half away from zero. Past 2^53 / scale there is no
    // fraction left to round, and scaling could overflow to infinity.
    let scaled = value * scale;
    let rounded = if scaled.is_finite() {
        scaled.round() / scale
    } else {
        value
    };

    let formatted = format!("{:.*}", decimals, rounded.abs());
    let (integer, decimal) = match formatted.split_once('.') {
        Some((integer, decimal)) => (integer, decimal),
        None => (formatted.as_str(), ""),
    };

    let sign = if rounded < 0.0 { "-" } else { "" };
    let integer = add_thousands_separators(integer);

    let decimal = if keeps_trailing_zeros(unit) {
        decimal
    } else {
        decimal.trim_end_matches('0')
    };

    if decimal.is_empty() {
        format!("{}{}", sign, integer)
    } else {
        format!("{}{}.{}", sign, integer, decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_literal_zero() {
        for unit in LandUnit::ALL {
            assert_eq!(format_number(0.0, unit), "0");
        }
    }

    #[test]
    fn test_square_meter_keeps_three_decimals() {
        assert_eq!(format_number(1234.5678, LandUnit::SquareMeter), "1,234.568");
        assert_eq!(format_number(126.486, LandUnit::SquareMeter), "126.486");
        assert_eq!(format_number(10_000.0, LandUnit::SquareMeter), "10,000.000");
        assert_eq!(format_number(2.5, LandUnit::SquareMeter), "2.500");
    }

    #[test]
    fn test_square_feet_rounds_half_away_from_zero() {
        assert_eq!(format_number(1234.5, LandUnit::SquareFeet), "1,235");
        assert_eq!(format_number(1234.4, LandUnit::SquareFeet), "1,234");
        assert_eq!(format_number(1361.0, LandUnit::SquareFeet), "1,361");
    }

    #[test]
    fn test_hectare_seven_decimals_trimmed() {
        assert_eq!(format_number(0.0126486, LandUnit::Hectare), "0.0126486");
        assert_eq!(format_number(0.25, LandUnit::Hectare), "0.25");
        assert_eq!(format_number(100.0, LandUnit::Hectare), "100");
    }

    #[test]
    fn test_other_units_two_decimals_trimmed() {
        assert_eq!(format_number(12.5, LandUnit::Biswa), "12.5");
        assert_eq!(format_number(12.567, LandUnit::Bigha), "12.57");
        assert_eq!(format_number(130_000.0, LandUnit::Biswansi), "130,000");
        assert_eq!(format_number(0.004, LandUnit::Biswa), "0");
    }

    #[test]
    fn test_tiny_values_use_exponential() {
        assert_eq!(format_number(0.0000001, LandUnit::Hectare), "1.00e-7");
        assert_eq!(format_number(1.2312e-8, LandUnit::Biswa), "1.23e-8");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(add_thousands_separators("1"), "1");
        assert_eq!(add_thousands_separators("123"), "123");
        assert_eq!(add_thousands_separators("1234"), "1,234");
        assert_eq!(add_thousands_separators("1234567"), "1,234,567");
        assert_eq!(format_number(1_234_567.891, LandUnit::Biswa), "1,234,567.89");
    }

    #[test]
    fn test_huge_values_stay_decimal() {
        let formatted = format_number(1e306, LandUnit::SquareMeter);
        assert!(formatted.starts_with("1,000,000,"));
        assert!(formatted.ends_with(".000"));
        assert!(!formatted.contains("inf"));

        let formatted = format_number(f64::MAX, LandUnit::Hectare);
        assert!(formatted.starts_with("179,769,313,"));
        assert!(!formatted.contains('.'));
    }

    #[test]
    fn test_negative_values_keep_sign() {
        assert_eq!(format_number(-1234.5, LandUnit::SquareFeet), "-1,235");
    }
}
