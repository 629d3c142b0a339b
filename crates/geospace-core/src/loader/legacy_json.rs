// crates/geospace-core/src/loader/legacy_json.rs

//! Parser for the import format: a JSON array of flat city records.

use crate::error::Result;
use crate::model::{Place, PlaceRaw};
use serde_json::Value;
use std::io::Read;
use tracing::warn;

/// Parses every row, dropping the ones that fail validation.
///
/// Ids are handed out sequentially from 1 to the rows that survive, in
/// file order. A document that is not a JSON array is an error; a bad row
/// is not.
pub fn parse_places(reader: impl Read) -> Result<Vec<Place>> {
    let rows: Vec<Value> = serde_json::from_reader(reader)?;
    let total = rows.len();

    let mut places = Vec::with_capacity(total);
    for (row, value) in rows.into_iter().enumerate() {
        let raw = match serde_json::from_value::<PlaceRaw>(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(row, error = %e, "dropping malformed dataset row");
                continue;
            }
        };
        let id = places.len() as u32 + 1;
        match Place::from_raw(id, raw) {
            Ok(place) => places.push(place),
            Err(e) => warn!(row, error = %e, "dropping invalid dataset row"),
        }
    }

    if places.len() < total {
        warn!(kept = places.len(), dropped = total - places.len(), "dataset rows dropped");
    }
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_valid_rows_and_renumbers() {
        let json = r#"[
            {"name": "Rome", "country_code": "IT", "label_en": "Italy",
             "alternate_names": ["Roma"], "coordinates": {"lon": 12.51133, "lat": 41.89193}},
            {"name": "", "coordinates": {"lon": 1.0, "lat": 1.0}},
            {"name": "Broken"},
            {"name": "Faraway", "coordinates": {"lon": 0.0, "lat": 95.0}},
            {"name": "Milan", "country_code": "IT", "label_en": "Italy",
             "coordinates": {"lon": 9.18951, "lat": 45.46427}}
        ]"#;
        let places = parse_places(json.as_bytes()).unwrap();
        let got: Vec<(u32, &str)> = places.iter().map(|p| (p.id, p.name.as_str())).collect();
        assert_eq!(got, vec![(1, "Rome"), (2, "Milan")]);
        assert_eq!(places[0].alternate_names, vec!["Roma"]);
        assert_eq!(places[0].country_name, "Italy");
    }

    #[test]
    fn non_array_document_is_an_error() {
        assert!(parse_places(r#"{"name": "Rome"}"#.as_bytes()).is_err());
    }
}
