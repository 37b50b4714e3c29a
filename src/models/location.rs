use serde::{Deserialize, Serialize};

/// A monitoring site with coordinates, used to place records on a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownLocation {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl KnownLocation {
    pub fn new(name: &str, lat: f64, lon: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lon,
        }
    }
}

/// Name → coordinates table. Locations missing here are still valid on
/// records, they just have no map point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnownLocations(Vec<KnownLocation>);

impl KnownLocations {
    pub fn new(locations: Vec<KnownLocation>) -> Self {
        Self(locations)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KnownLocation> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&KnownLocation> {
        self.0.iter().find(|l| l.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for KnownLocations {
    fn default() -> Self {
        // Alligator Creek, Sarasota County, FL
        Self(vec![KnownLocation::new("Alligator Creek", 27.042, -82.430)])
    }
}
