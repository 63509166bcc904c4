//! Client-side continent/region filtering and the derived option sets.
//!
//! Filters are applied after fetching, never passed upstream. The option
//! lists obey one invariant: each is derived from the *other* filter applied
//! to the full unfiltered snapshot, so progressively narrowing one filter
//! never collapses the other's options to nothing.

use crate::model::CountryRecord;

/// Current search inputs: free-text query plus the two dropdown filters.
///
/// `None` means "filter unset"; empty strings never occur (the setters on
/// [`Explorer`](crate::explorer::Explorer) normalize them away).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub query: String,
    pub continent: Option<String>,
    pub region: Option<String>,
}

impl FilterState {
    pub fn continent(&self) -> Option<&str> {
        self.continent.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// Whether a record survives the given filters: continent unset OR the
/// record's continent list contains it, AND region unset OR the record's
/// region equals it.
pub fn matches(record: &CountryRecord, continent: Option<&str>, region: Option<&str>) -> bool {
    let continent_ok = continent.is_none_or(|c| record.continents.iter().any(|rc| rc == c));
    let region_ok = region.is_none_or(|r| record.region == r);
    continent_ok && region_ok
}

/// Drops every fetched record the current filters eliminate.
pub fn apply(records: Vec<CountryRecord>, filters: &FilterState) -> Vec<CountryRecord> {
    records
        .into_iter()
        .filter(|r| matches(r, filters.continent(), filters.region()))
        .collect()
}

/// Distinct continents, in first-seen order, across snapshot records that
/// match the region filter (all records when no region is set).
pub fn continent_options(snapshot: &[CountryRecord], region: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for record in snapshot {
        if region.is_some_and(|r| record.region != r) {
            continue;
        }
        for continent in &record.continents {
            if !out.iter().any(|c| c == continent) {
                out.push(continent.clone());
            }
        }
    }
    out
}

/// Distinct regions, in first-seen order, across snapshot records whose
/// continent list contains the continent filter (all records when unset).
/// Records with an empty region string contribute nothing.
pub fn region_options(snapshot: &[CountryRecord], continent: Option<&str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for record in snapshot {
        if continent.is_some_and(|c| !record.continents.iter().any(|rc| rc == c)) {
            continue;
        }
        if record.region.is_empty() {
            continue;
        }
        if !out.iter().any(|r| r == &record.region) {
            out.push(record.region.clone());
        }
    }
    out
}
