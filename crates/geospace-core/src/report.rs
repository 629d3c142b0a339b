// crates/geospace-core/src/report.rs

//! # Response shapes
//!
//! What the query operations hand back. `Serialize` produces the public
//! JSON layout (`city_id`, `country`, `distance_straight`, ...), `Display`
//! the plain-text reply.

use crate::model::Place;
use serde::{Serialize, Serializer};
use std::fmt;

/// Public JSON view of a [`Place`].
#[derive(Debug, Serialize)]
pub struct PlaceView<'a> {
    pub city_id: u32,
    pub name: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub name_ascii: &'a str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub alternative_names: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub country_code: &'a str,
    pub country: &'a str,
    #[serde(skip_serializing_if = "is_blank")]
    pub timezone: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> From<&'a Place> for PlaceView<'a> {
    fn from(p: &'a Place) -> Self {
        PlaceView {
            city_id: p.id,
            name: &p.name,
            name_ascii: &p.name_ascii,
            alternative_names: p.alternate_names.join(","),
            country_code: &p.country_code,
            country: &p.country_name,
            timezone: &p.timezone,
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

fn is_blank(s: &&str) -> bool {
    s.is_empty()
}

fn place_view<S: Serializer>(place: &Place, s: S) -> Result<S::Ok, S::Error> {
    PlaceView::from(place).serialize(s)
}

fn optional_place_view<S: Serializer>(place: &Option<Place>, s: S) -> Result<S::Ok, S::Error> {
    place.as_ref().map(PlaceView::from).serialize(s)
}

/// A proximity hit: the place plus its distance from the center.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyPlace {
    pub place: Place,
    /// Whole kilometers, truncated.
    pub distance: u32,
    /// Unrounded great-circle distance.
    pub distance_km: f64,
}

impl Serialize for NearbyPlace {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Row<'a> {
            #[serde(flatten)]
            place: PlaceView<'a>,
            distance: u32,
        }
        Row {
            place: PlaceView::from(&self.place),
            distance: self.distance,
        }
        .serialize(s)
    }
}

impl fmt::Display for NearbyPlace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} ({} km)",
            self.place.name(),
            self.place.country(),
            self.distance
        )
    }
}

/// Result of a proximity search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProximityReport {
    /// The resolved center when the search was started from a name.
    #[serde(
        serialize_with = "optional_place_view",
        skip_serializing_if = "Option::is_none"
    )]
    pub departure: Option<Place>,
    pub distance_to: u32,
    pub qty_nearby: usize,
    pub cities_nearby: Vec<NearbyPlace>,
}

impl fmt::Display for ProximityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There are {} cities at a distance {} km",
            self.qty_nearby, self.distance_to
        )?;
        if let Some(center) = &self.departure {
            write!(f, " from {}, {}", center.name(), center.country())?;
        }
        if !self.cities_nearby.is_empty() {
            f.write_str("\nList:")?;
            for hit in &self.cities_nearby {
                write!(f, "\n{hit}")?;
            }
        }
        Ok(())
    }
}

/// Result of a city-to-city distance request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairDistance {
    #[serde(serialize_with = "place_view")]
    pub departure: Place,
    #[serde(serialize_with = "place_view")]
    pub destination: Place,
    pub distance_straight: u32,
    /// Present only when the road lookup succeeded in time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_road: Option<u32>,
}

impl fmt::Display for PairDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "distance between {}, {} and {}, {} by straight line {} km",
            self.departure.name(),
            self.departure.country(),
            self.destination.name(),
            self.destination.country(),
            self.distance_straight
        )?;
        if let Some(road) = self.distance_road {
            write!(f, " / by road {road} km")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoordinatesRaw, PlaceRaw};
    use serde_json::json;

    fn place(id: u32, name: &str, country: &str, lat: f64, lon: f64) -> Place {
        Place::from_raw(
            id,
            PlaceRaw {
                name: name.into(),
                ascii_name: None,
                country_code: Some("RU".into()),
                country_name: Some(country.into()),
                timezone: Some("Europe/Moscow".into()),
                alternate_names: vec!["Moskva".into(), "Moscou".into()],
                coordinates: CoordinatesRaw { lat, lon },
            },
        )
        .unwrap()
    }

    fn pair(road: Option<u32>) -> PairDistance {
        PairDistance {
            departure: place(1, "Krasnodar", "Russia", 45.04484, 38.97603),
            destination: place(2, "Moscow", "Russia", 55.75222, 37.61556),
            distance_straight: 1194,
            distance_road: road,
        }
    }

    #[test]
    fn pair_text_mentions_road_only_when_known() {
        assert_eq!(
            pair(None).to_string(),
            "distance between Krasnodar, Russia and Moscow, Russia by straight line 1194 km"
        );
        assert!(pair(Some(1346)).to_string().ends_with(" / by road 1346 km"));
    }

    #[test]
    fn pair_json_omits_missing_road_distance() {
        let v = serde_json::to_value(pair(None)).unwrap();
        assert!(v.get("distance_road").is_none());
        assert_eq!(v["distance_straight"], 1194);
        assert_eq!(v["departure"]["city_id"], 1);
        assert_eq!(v["destination"]["country"], "Russia");
        assert_eq!(v["destination"]["alternative_names"], "Moskva,Moscou");
        assert!(v["destination"].get("name_ascii").is_none());

        let v = serde_json::to_value(pair(Some(1346))).unwrap();
        assert_eq!(v["distance_road"], 1346);
    }

    #[test]
    fn proximity_text_and_json() {
        let center = place(1, "Krasnodar", "Russia", 45.04484, 38.97603);
        let report = ProximityReport {
            departure: Some(center.clone()),
            distance_to: 50,
            qty_nearby: 1,
            cities_nearby: vec![NearbyPlace {
                place: center,
                distance: 0,
                distance_km: 0.0,
            }],
        };
        assert_eq!(
            report.to_string(),
            "There are 1 cities at a distance 50 km from Krasnodar, Russia\nList:\nKrasnodar, Russia (0 km)"
        );

        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["qty_nearby"], 1);
        assert_eq!(v["cities_nearby"][0]["distance"], 0);
        assert_eq!(v["cities_nearby"][0]["name"], "Krasnodar");
        assert!(v["cities_nearby"][0].get("distance_km").is_none());
    }

    #[test]
    fn empty_coordinate_report() {
        let report = ProximityReport {
            departure: None,
            distance_to: 10,
            qty_nearby: 0,
            cities_nearby: Vec::new(),
        };
        assert_eq!(report.to_string(), "There are 0 cities at a distance 10 km");
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({ "distance_to": 10, "qty_nearby": 0, "cities_nearby": [] })
        );
    }
}
