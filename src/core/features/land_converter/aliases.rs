//! Free-text unit names
//!
//! A closed table from normalized text (trimmed, lowercased, internal
//! whitespace collapsed) to a unit. No fuzzy or partial matching.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::shared::types::LandUnit;

const UNIT_ALIASES: &[(&str, LandUnit)] = &[
    // Biswansi
    ("biswansi", LandUnit::Biswansi),
    ("biswasi", LandUnit::Biswansi),
    ("बिस्वाँसी", LandUnit::Biswansi),
    ("बिस्वांसी", LandUnit::Biswansi),
    // Biswa
    ("biswa", LandUnit::Biswa),
    ("biswas", LandUnit::Biswa),
    ("bisva", LandUnit::Biswa),
    ("बिस्वा", LandUnit::Biswa),
    // Bigha
    ("bigha", LandUnit::Bigha),
    ("bighas", LandUnit::Bigha),
    ("बीघा", LandUnit::Bigha),
    // Hectare
    ("hectare", LandUnit::Hectare),
    ("hectares", LandUnit::Hectare),
    ("ha", LandUnit::Hectare),
    ("हैक्टेयर", LandUnit::Hectare),
    ("हेक्टेयर", LandUnit::Hectare),
    // Square meter
    ("squaremeter", LandUnit::SquareMeter),
    ("square meter", LandUnit::SquareMeter),
    ("square meters", LandUnit::SquareMeter),
    ("square metre", LandUnit::SquareMeter),
    ("square metres", LandUnit::SquareMeter),
    ("sq meter", LandUnit::SquareMeter),
    ("sq meters", LandUnit::SquareMeter),
    ("sq m", LandUnit::SquareMeter),
    ("sqm", LandUnit::SquareMeter),
    ("m2", LandUnit::SquareMeter),
    ("m²", LandUnit::SquareMeter),
    ("वर्ग मीटर", LandUnit::SquareMeter),
    // Square feet
    ("squarefeet", LandUnit::SquareFeet),
    ("square feet", LandUnit::SquareFeet),
    ("square foot", LandUnit::SquareFeet),
    ("sq feet", LandUnit::SquareFeet),
    ("sq foot", LandUnit::SquareFeet),
    ("sq ft", LandUnit::SquareFeet),
    ("sqft", LandUnit::SquareFeet),
    ("ft2", LandUnit::SquareFeet),
    ("ft²", LandUnit::SquareFeet),
    ("वर्ग फीट", LandUnit::SquareFeet),
];

static ALIAS_INDEX: Lazy<HashMap<&'static str, LandUnit>> =
    Lazy::new(|| UNIT_ALIASES.iter().copied().collect());

fn normalize(token: &str) -> String {
    token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Resolve a user-typed unit name, e.g. `"Sq Ft"`, `"sqft"` or `"वर्ग फीट"`.
pub fn resolve_unit(token: &str) -> Option<LandUnit> {
    ALIAS_INDEX.get(normalize(token).as_str()).copied()
}
