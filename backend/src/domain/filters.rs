//! List filtering.
//!
//! All active constraints are ANDed. Text fields match as case-insensitive
//! substrings. The birth date matches when the needle appears in either the
//! stored ISO date or its `DD/MM/YY` rendering, so "2020", "05-01" and "01/05"
//! all find an animal born on 2020-05-01. Unknown query keys are ignored.

use shared::{parse_iso_date, short_br_date, AnimalFields, CareFields, FilterSet, ResourceFields};

/// Decides whether a record's fields satisfy a filter set
pub trait Matches: ResourceFields {
    fn matches(&self, filters: &FilterSet) -> bool;
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn birth_date_matches(birth_date: &str, needle: &str) -> bool {
    if birth_date.is_empty() {
        return false;
    }
    if contains_ignore_case(birth_date, needle) {
        return true;
    }
    parse_iso_date(birth_date)
        .map(|date| short_br_date(date).contains(needle))
        .unwrap_or(false)
}

impl Matches for AnimalFields {
    fn matches(&self, filters: &FilterSet) -> bool {
        filters.active().all(|(field, needle)| {
            if !Self::FILTER_FIELDS.contains(&field) {
                return true;
            }
            match field {
                "dataNascimento" => birth_date_matches(&self.birth_date, needle),
                other => self
                    .field(other)
                    .map_or(true, |value| contains_ignore_case(value, needle)),
            }
        })
    }
}

impl Matches for CareFields {
    fn matches(&self, _filters: &FilterSet) -> bool {
        true
    }
}
