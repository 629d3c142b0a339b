// crates/geospace-core/src/model.rs
use crate::error::{GeoError, Result};
use crate::geo::Coordinates;
use crate::text::{fold_key, starts_with_folded};
use serde::{Deserialize, Serialize};

/// Raw city record as it comes from the import JSON.
///
/// ```json
/// {
///   "name": "Rome", "ascii_name": "Rome", "country_code": "IT",
///   "label_en": "Italy", "timezone": "Europe/Rome",
///   "alternate_names": ["Roma", "Rom", "Рим"],
///   "coordinates": { "lon": 12.51133, "lat": 41.89193 }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRaw {
    pub name: String,
    #[serde(default)]
    pub ascii_name: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(rename = "label_en", default)]
    pub country_name: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub alternate_names: Vec<String>,
    pub coordinates: CoordinatesRaw,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CoordinatesRaw {
    pub lat: f64,
    pub lon: f64,
}

/// A city (or any named point of interest).
///
/// Read-only reference data: created once by the loader, never mutated by
/// queries. Coordinates are always valid; see [`Place::from_raw`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Assigned at import time, stable, never reused.
    pub id: u32,
    pub name: String,
    pub name_ascii: String,
    pub alternate_names: Vec<String>,
    pub country_code: String,
    pub country_name: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Validates a raw record and assigns it `id`.
    ///
    /// Fails with `InvalidData` on an empty name or unusable coordinates.
    pub fn from_raw(id: u32, raw: PlaceRaw) -> Result<Self> {
        let name = raw.name.trim().to_string();
        if name.is_empty() {
            return Err(GeoError::InvalidData(format!("record {id} has no name")));
        }
        let coords = Coordinates::new(raw.coordinates.lat, raw.coordinates.lon)
            .map_err(|e| GeoError::InvalidData(format!("record {id} ({name}): {e}")))?;

        Ok(Place {
            id,
            name,
            name_ascii: raw.ascii_name.unwrap_or_default(),
            alternate_names: raw
                .alternate_names
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
            country_code: raw.country_code.unwrap_or_default(),
            country_name: raw.country_name.unwrap_or_default(),
            timezone: raw.timezone.unwrap_or_default(),
            latitude: coords.latitude(),
            longitude: coords.longitude(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country_name
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::trusted(self.latitude, self.longitude)
    }

    /// Straight-line distance to `other` in kilometers.
    pub fn distance_to(&self, other: &Place) -> f64 {
        self.coordinates().distance_to(&other.coordinates())
    }

    /// True if `name` equals the primary name, the ASCII name or any
    /// alternate name (accent- and case-insensitive).
    pub fn answers_to(&self, name: &str) -> bool {
        let q = fold_key(name);
        if q.is_empty() {
            return false;
        }
        fold_key(&self.name) == q
            || (!self.name_ascii.is_empty() && fold_key(&self.name_ascii) == q)
            || self.alternate_names.iter().any(|a| fold_key(a) == q)
    }

    /// True if the country hint matches: ISO2 code equality or a prefix of
    /// the country name (`"It"` matches `"Italy"`).
    pub fn in_country(&self, hint: &str) -> bool {
        let hint = hint.trim();
        if hint.is_empty() {
            return true;
        }
        self.country_code.eq_ignore_ascii_case(hint)
            || starts_with_folded(&self.country_name, hint)
    }
}

/// A free-text place reference: `"Rome"` or `"Rome, It"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceQuery {
    pub name: String,
    pub country_hint: Option<String>,
}

impl PlaceQuery {
    /// Comma-separated: the first segment is the name, the second the
    /// country hint. Both are trimmed; further segments are ignored.
    ///
    /// ```rust
    /// use geospace_core::PlaceQuery;
    ///
    /// let q = PlaceQuery::parse("departure", " Rome , It, Lazio").unwrap();
    /// assert_eq!(q.name, "Rome");
    /// assert_eq!(q.country_hint.as_deref(), Some("It"));
    /// ```
    pub fn parse(field: &'static str, raw: &str) -> Result<Self> {
        let mut parts = raw.split(',').map(str::trim);
        let name = parts.next().unwrap_or_default();
        let hint = parts.next();
        if name.is_empty() {
            return Err(GeoError::EmptyParam { field });
        }
        Ok(PlaceQuery {
            name: name.to_string(),
            country_hint: hint.filter(|h| !h.is_empty()).map(str::to_string),
        })
    }

    pub fn named(name: impl Into<String>) -> Self {
        PlaceQuery {
            name: name.into(),
            country_hint: None,
        }
    }

    /// True if `place` answers to the name and sits in the hinted country.
    pub fn matches(&self, place: &Place) -> bool {
        place.answers_to(&self.name)
            && self
                .country_hint
                .as_deref()
                .map_or(true, |hint| place.in_country(hint))
    }
}

impl std::fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.country_hint {
            Some(hint) => write!(f, "{}, {}", self.name, hint),
            None => f.write_str(&self.name),
        }
    }
}
