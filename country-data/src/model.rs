//! Typed country records as delivered by REST Countries v3.1.
//!
//! Records are immutable snapshots of the upstream payload; fields the API
//! omits for some territories default to empty rather than failing the
//! whole batch. Wire names are camelCase where the payload uses them.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One country as returned by `GET /v3.1/all` or `GET /v3.1/name/{text}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub population: u64,
    /// Surface area in km².
    #[serde(default)]
    pub area: f64,
    /// Neighbouring country codes; landlocked islands have none.
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub start_of_week: Option<String>,
    /// Currency code → name/symbol.
    #[serde(default)]
    pub currencies: BTreeMap<String, Currency>,
    /// Language code → language name.
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    #[serde(default)]
    pub un_member: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub maps: Maps,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub coat_of_arms: CoatOfArms,
}

impl CountryRecord {
    /// Key a renderer lists records under. The upstream data does not
    /// guarantee common names are unique, so this is the single place to
    /// change if that ever bites.
    pub fn display_key(&self) -> &str {
        &self.name.common
    }

    /// First capital, when the country declares any.
    pub fn capital(&self) -> Option<&str> {
        self.capital.first().map(String::as_str)
    }
}

/// Common and official names of a country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// One currency entry from the `currencies` map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// External map links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    #[serde(default)]
    pub google_maps: Option<String>,
    #[serde(default)]
    pub open_street_maps: Option<String>,
}

/// Flag image links plus the upstream alt text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Coat-of-arms image links; absent for many territories.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CoatOfArms {
    #[serde(default)]
    pub png: Option<String>,
    #[serde(default)]
    pub svg: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_payload_round_trips() {
        let record: CountryRecord = serde_json::from_value(serde_json::json!({
            "name": { "common": "France", "official": "French Republic" },
            "capital": ["Paris"],
            "region": "Europe",
            "subregion": "Western Europe",
            "continents": ["Europe"],
            "population": 67391582u64,
            "area": 551695.0,
            "borders": ["AND", "BEL", "DEU"],
            "timezones": ["UTC+01:00"],
            "startOfWeek": "monday",
            "currencies": { "EUR": { "name": "Euro", "symbol": "€" } },
            "languages": { "fra": "French" },
            "unMember": true,
            "status": "officially-assigned",
            "maps": {
                "googleMaps": "https://goo.gl/maps/x",
                "openStreetMaps": "https://www.openstreetmap.org/relation/x"
            },
            "flags": { "png": "https://flagcdn.com/w320/fr.png", "alt": "Tricolore" },
            "coatOfArms": { "png": "https://mainfacts.com/media/images/coats_of_arms/fr.png" }
        }))
        .unwrap();

        assert_eq!(record.display_key(), "France");
        assert_eq!(record.capital(), Some("Paris"));
        assert_eq!(record.currencies["EUR"].symbol.as_deref(), Some("€"));
        assert_eq!(record.start_of_week.as_deref(), Some("monday"));
        assert!(record.un_member);
    }

    #[test]
    fn sparse_territories_deserialize_with_defaults() {
        // Antarctica-style entries omit capital, currencies, borders, etc.
        let record: CountryRecord = serde_json::from_value(serde_json::json!({
            "name": { "common": "Antarctica" },
            "region": "Antarctic",
            "continents": ["Antarctica"],
            "population": 1000u64,
            "area": 14000000.0
        }))
        .unwrap();

        assert_eq!(record.capital(), None);
        assert!(record.borders.is_empty());
        assert!(record.currencies.is_empty());
        assert_eq!(record.maps.google_maps, None);
        assert!(!record.un_member);
    }
}
