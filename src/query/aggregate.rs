use crate::errors::AppResult;
use crate::models::{KnownLocations, MapPoint, SpeciesTotal, SurveyRecord};
use crate::store::codec;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// One point per known location present in `records`, in order of first
/// appearance. Locations without coordinates are skipped here only.
pub fn map_summary(records: &[SurveyRecord], known: &KnownLocations) -> Vec<MapPoint> {
    let mut points: Vec<MapPoint> = Vec::new();

    for rec in records {
        if let Some(p) = points.iter_mut().find(|p| p.location == rec.location) {
            p.records += 1;
            continue;
        }
        if let Some(site) = known.get(&rec.location) {
            points.push(MapPoint {
                location: site.name.clone(),
                lat: site.lat,
                lon: site.lon,
                records: 1,
            });
        }
    }

    points
}

/// Sum of all three count columns over `records`.
pub fn total_count(records: &[SurveyRecord]) -> u64 {
    records.iter().map(SurveyRecord::total).sum()
}

/// Per-species totals, largest first. Equal totals are ordered by species
/// name, ascending.
pub fn species_summary(records: &[SurveyRecord]) -> Vec<SpeciesTotal> {
    let mut groups: BTreeMap<&str, u64> = BTreeMap::new();
    for rec in records {
        *groups.entry(rec.species.as_str()).or_insert(0) += rec.total();
    }

    let mut out: Vec<SpeciesTotal> = groups
        .into_iter()
        .map(|(species, total)| SpeciesTotal {
            species: species.to_string(),
            total,
        })
        .collect();

    // stable: BTreeMap order already gives the name tie-break
    out.sort_by(|a, b| b.total.cmp(&a.total));
    out
}

/// The filtered view as CSV bytes, same layout as the backing store.
pub fn export_csv(records: &[SurveyRecord]) -> AppResult<Vec<u8>> {
    codec::encode(records)
}

/// Distinct locations, first appearance first.
pub fn distinct_locations(records: &[SurveyRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.location.as_str()))
        .map(|r| r.location.clone())
        .collect()
}

/// Distinct survey dates, ascending.
pub fn distinct_dates(records: &[SurveyRecord]) -> Vec<NaiveDate> {
    records
        .iter()
        .map(|r| r.date)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
