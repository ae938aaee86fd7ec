//! The closed set of industries a search can target.
//!
//! Identifiers are sent to the scraping service verbatim as `business_name`;
//! nothing in this workspace interprets them beyond validation and display.

pub const INDUSTRIES: &[&str] = &[
    "media_entertainment",
    "sports_technology",
    "logistics_transportation",
    "financial_services",
    "real_estate_development",
    "nonprofit_organization",
    "consumer_services",
];

#[must_use]
pub fn is_known_industry(id: &str) -> bool {
    INDUSTRIES.contains(&id)
}

/// Human-readable label: underscores become spaces and each word is
/// capitalized (`"real_estate_development"` → `"Real Estate Development"`).
#[must_use]
pub fn industry_label(id: &str) -> String {
    id.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
