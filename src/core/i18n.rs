//! Localized UI strings
//!
//! A closed, nested dictionary per language. Keys are dotted paths
//! (`units.squareMeter`, `bulk.errors.unknownUnit`). Unknown keys resolve to
//! the key itself so a missing translation is visible but never fatal.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::{json, Value};

pub use crate::shared::types::{LandUnit, Language};

static TRANSLATIONS: Lazy<Value> = Lazy::new(|| {
    json!({
        "en": {
            "appTitle": "Land Measurement Calculator",
            "subtitle": "Lucknow, Uttar Pradesh",
            "calculator": "Calculator",
            "bulkConversion": "Bulk Conversion",
            "history": "History",
            "clearHistory": "Clear History",
            "noHistory": "No conversion history yet",
            "bulkInstructions": "Enter values with units (e.g., \"100 hectare\", \"50 bigha\")",
            "results": "Results",
            "units": {
                "biswansi": "Biswansi",
                "biswa": "Biswa",
                "bigha": "Bigha",
                "hectare": "Hectare",
                "squareMeter": "Square Meter",
                "squareFeet": "Square Feet"
            },
            "formulas": {
                "title": "Conversion Formulas",
                "biswaToSqM": "1 Biswa = 126.486 Square Meter",
                "biswaToSqFt": "1 Biswa = 1361 Square Feet",
                "biswaToHectare": "1 Biswa = 0.0126486 Hectare",
                "biswaToBiswansi": "1 Biswa = 20 Biswansi",
                "bighaToBiswa": "1 Bigha = 20 Biswa",
                "hectareToSqM": "1 Hectare = 10,000 Square Meter"
            },
            "bulk": {
                "errors": {
                    "malformedLine": "Invalid format: \"{line}\" (correct format: \"100 hectare\")",
                    "invalidValue": "Invalid value: \"{line}\"",
                    "unknownUnit": "Unknown unit: \"{unit}\" (line: \"{line}\")"
                }
            }
        },
        "hi": {
            "appTitle": "भूमि माप कैलकुलेटर",
            "subtitle": "लखनऊ, उत्तर प्रदेश",
            "calculator": "कैलकुलेटर",
            "bulkConversion": "बल्क रूपांतरण",
            "history": "इतिहास",
            "clearHistory": "इतिहास साफ़ करें",
            "noHistory": "अभी तक कोई रूपांतरण इतिहास नहीं",
            "bulkInstructions": "इकाइयों के साथ मान दर्ज करें (उदाहरण: \"100 hectare\", \"50 bigha\")",
            "results": "परिणाम",
            "units": {
                "biswansi": "बिस्वाँसी",
                "biswa": "बिस्वा",
                "bigha": "बीघा",
                "hectare": "हैक्टेयर",
                "squareMeter": "वर्ग मीटर",
                "squareFeet": "वर्ग फीट"
            },
            "formulas": {
                "title": "रूपांतरण सूत्र",
                "biswaToSqM": "1 बिस्वा = 126.486 वर्ग मीटर",
                "biswaToSqFt": "1 बिस्वा = 1361 वर्ग फीट",
                "biswaToHectare": "1 बिस्वा = 0.0126486 हैक्टेयर",
                "biswaToBiswansi": "1 बिस्वा = 20 बिस्वाँसी",
                "bighaToBiswa": "1 बीघा = 20 बिस्वा",
                "hectareToSqM": "1 हैक्टेयर = 10,000 वर्ग मीटर"
            },
            "bulk": {
                "errors": {
                    "malformedLine": "गलत प्रारूप: \"{line}\" (सही प्रारूप: \"100 hectare\")",
                    "invalidValue": "अमान्य मान: \"{line}\"",
                    "unknownUnit": "अज्ञात इकाई: \"{unit}\" (लाइन: \"{line}\")"
                }
            }
        }
    })
});

/// Formula keys in display order
pub const FORMULA_KEYS: [&str; 6] = [
    "formulas.biswaToSqM",
    "formulas.biswaToSqFt",
    "formulas.biswaToHectare",
    "formulas.biswaToBiswansi",
    "formulas.bighaToBiswa",
    "formulas.hectareToSqM",
];

/// Look up a dotted key, falling back to the key itself
pub fn lookup(key: &str, language: Language) -> String {
    key.split('.')
        .try_fold(&TRANSLATIONS[language.code()], |node, part| node.get(part))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| key.to_string())
}

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("Invalid placeholder regex"));

/// Look up a template and fill its `{name}` placeholders in one pass.
///
/// Substituted text is never scanned again, so a value containing `{line}`
/// stays literal. Placeholders without an argument are left as they are.
pub fn lookup_with(key: &str, language: Language, args: &[(&str, &str)]) -> String {
    let template = lookup(key, language);
    PLACEHOLDER
        .replace_all(&template, |caps: &Captures| {
            args.iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

pub fn unit_name(unit: LandUnit, language: Language) -> String {
    lookup(&format!("units.{}", unit.id()), language)
}
