use holo_core::prelude::*;

/// A geographic position as degree/minute/second triples.
///
/// This is how the location service encodes coordinates; conversion to
/// decimal degrees happens on demand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dms {
    pub lat: [f64; 3],
    pub lng: [f64; 3],
}

impl Dms {
    pub fn decimal_lat(&self) -> f64 {
        let [d, m, s] = self.lat;
        d + m / 60.0 + s / 3600.0
    }

    pub fn decimal_lng(&self) -> f64 {
        let [d, m, s] = self.lng;
        d + m / 60.0 + s / 3600.0
    }
}

/// One record from `locations.json`. Immutable once loaded.
///
/// `kind` is a free-form category string (`city`, `capital`, `base`, ...);
/// consumers must tolerate values they don't recognize. `dms` is absent for
/// locations that have a name but no mappable position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "datatype")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dms: Option<Dms>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<Url>,
}

/// Detail outline for a location, a closed ring of `[lng, lat]` pairs.
pub type Polygon = Vec<[f64; 2]>;
