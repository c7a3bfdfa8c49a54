//! Bulk conversion of `"<value> <unit>"` lines
//!
//! Every line is handled independently: a bad line becomes a
//! [`BulkLineError`] and processing continues with the next one.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::{aliases::resolve_unit, convert, parse_input_value};
use crate::shared::errors::BulkLineError;
use crate::shared::types::{BulkConversionItem, BulkConversionResult, Language};

// Number, a run of whitespace, then the unit text (which may contain spaces)
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?[0-9.]+)\s+(.+)$").expect("Failed to compile bulk line pattern")
});

/// Results and per-line errors, each in input line order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BulkOutcome {
    pub results: Vec<BulkConversionResult>,
    pub errors: Vec<BulkLineError>,
}

impl BulkOutcome {
    /// Error messages in the given UI language
    pub fn error_messages(&self, language: Language) -> Vec<String> {
        self.errors.iter().map(|e| e.localized(language)).collect()
    }
}

/// Parse and convert a single non-blank line
pub fn parse_line(line: &str) -> Result<BulkConversionResult, BulkLineError> {
    let line = line.trim();

    let caps = LINE_PATTERN
        .captures(line)
        .ok_or_else(|| BulkLineError::MalformedLine { line: line.to_string() })?;

    let value = parse_input_value(&caps[1])
        .ok_or_else(|| BulkLineError::InvalidValue { line: line.to_string() })?;

    let unit_text = caps[2].trim();
    let unit = resolve_unit(unit_text).ok_or_else(|| BulkLineError::UnknownUnit {
        unit: unit_text.to_string(),
        line: line.to_string(),
    })?;

    Ok(BulkConversionResult {
        input: BulkConversionItem { value, unit },
        converted: convert(value, unit),
    })
}

/// Convert every non-blank line of `text`
pub fn parse_and_convert(text: &str) -> BulkOutcome {
    let mut outcome = BulkOutcome::default();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        match parse_line(line) {
            Ok(result) => outcome.results.push(result),
            Err(err) => {
                log::debug!("[BulkParser] Rejected line: {}", err);
                outcome.errors.push(err);
            }
        }
    }

    log::debug!(
        "[BulkParser] {} converted, {} rejected",
        outcome.results.len(),
        outcome.errors.len()
    );
    outcome
}
