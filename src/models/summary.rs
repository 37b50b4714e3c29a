use serde::Serialize;

/// One plottable point: a known location and how many filtered rows sit there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub location: String,
    pub lat: f64,
    pub lon: f64,
    pub records: usize,
}

/// Total birds counted for one species over the filtered rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesTotal {
    pub species: String,
    pub total: u64,
}
