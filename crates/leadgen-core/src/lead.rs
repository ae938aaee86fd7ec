//! Lead records as returned by the scraping service, and their canonical form.
//!
//! The scraping service does not guarantee a schema for individual results:
//! most arrive as positional `[name, address, category]` arrays, some as a
//! bare value. [`RawLead`] accepts either shape and [`normalize`] turns it
//! into a [`NormalizedLead`] so that scoring never has to inspect JSON shapes.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const WEB_SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// The exact parameters a user supplied for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub business_name: String,
    pub location: String,
}

impl SearchRequest {
    pub fn new(business_name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            business_name: business_name.into(),
            location: location.into(),
        }
    }
}

/// A lead exactly as the scraping service sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawLead {
    /// Positional record: `[name, address, category, ...]`.
    Record(Vec<Value>),
    /// Any non-array value, read as the lead's name.
    Bare(Value),
}

impl RawLead {
    /// Convenience constructor for a positional record of optional strings.
    #[must_use]
    pub fn record(name: Option<&str>, address: Option<&str>, category: Option<&str>) -> Self {
        let slot = |v: Option<&str>| v.map_or(Value::Null, |s| Value::String(s.to_owned()));
        RawLead::Record(vec![slot(name), slot(address), slot(category)])
    }

    #[must_use]
    pub fn normalize(&self) -> NormalizedLead {
        normalize(self)
    }
}

impl From<Value> for RawLead {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(slots) => RawLead::Record(slots),
            other => RawLead::Bare(other),
        }
    }
}

/// Canonical `{name, address, category}` view of a lead.
///
/// A field is `Some` only when the corresponding raw slot held a non-empty
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedLead {
    pub name: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    /// Length of the raw name slot: UTF-16 units for a string, element count
    /// for an array, 0 for any other value.
    pub name_length: usize,
}

impl NormalizedLead {
    /// Builds a lead from plain text fields, as if each came from a string slot.
    #[must_use]
    pub fn from_text(name: Option<&str>, address: Option<&str>, category: Option<&str>) -> Self {
        let present = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_owned);
        let name = present(name);
        let name_length = name.as_deref().map_or(0, |n| n.encode_utf16().count());
        Self {
            name,
            address: present(address),
            category: present(category),
            name_length,
        }
    }

    /// Web-search URL for the lead, built from whichever of name and address
    /// are present.
    #[must_use]
    pub fn search_url(&self) -> String {
        let query = [self.name.as_deref(), self.address.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{WEB_SEARCH_BASE}{}",
            utf8_percent_encode(&query, URI_COMPONENT)
        )
    }
}

/// Converts a raw lead of either shape into its canonical form.
///
/// Never fails: missing slots and empty values become `None`, and slots past
/// the third are ignored.
#[must_use]
pub fn normalize(raw: &RawLead) -> NormalizedLead {
    match raw {
        RawLead::Record(slots) => NormalizedLead {
            name: slots.first().and_then(slot_text),
            address: slots.get(1).and_then(slot_text),
            category: slots.get(2).and_then(slot_text),
            name_length: slots.first().map_or(0, slot_length),
        },
        RawLead::Bare(value) => NormalizedLead {
            name: slot_text(value),
            address: None,
            category: None,
            name_length: slot_length(value),
        },
    }
}

/// Length of a slot as the browser client measured it.
///
/// Only strings and arrays have a length; numbers, booleans and objects
/// count as 0 even when they are present.
fn slot_length(value: &Value) -> usize {
    match value {
        Value::String(s) => s.encode_utf16().count(),
        Value::Array(items) => items.len(),
        _ => 0,
    }
}

/// Text of a slot, or `None` when the slot is empty.
///
/// `null`, `false`, `0` and `""` count as empty.
#[allow(clippy::float_cmp)]
fn slot_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
