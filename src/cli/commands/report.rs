use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::view::SurveyView;
use crate::errors::AppResult;
use crate::models::{MapPoint, SpeciesTotal, SurveyRecord};
use crate::query;
use crate::store::RecordStore;
use crate::ui::messages::{header, info, metric};
use crate::utils::bar;
use crate::utils::formatting::{bold, group_thousands, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

fn load_view(filter: &FilterArgs, cfg: &Config) -> AppResult<Option<SurveyView>> {
    let store = RecordStore::new(&cfg.data_file);
    let view = SurveyView::load(&store, &filter.to_filter()?, &cfg.known_locations)?;

    if view.store_is_empty() {
        info("No data recorded yet.");
        return Ok(None);
    }
    Ok(Some(view))
}

/// `list`: the detailed records of the selection.
pub fn handle_list(filter: &FilterArgs, cfg: &Config) -> AppResult<()> {
    let Some(view) = load_view(filter, cfg)? else {
        return Ok(());
    };

    header("Detailed Records");
    if view.records.is_empty() {
        println!("No records match the selected filters.");
    } else {
        print!("{}", records_table(&view.records).render());
    }
    println!("{} of {} records", view.records.len(), view.store_rows);
    Ok(())
}

/// `filters`: values a user can pick for --location / --date.
pub fn handle_filters(cfg: &Config) -> AppResult<()> {
    let records = RecordStore::new(&cfg.data_file).load()?;
    if records.is_empty() {
        info("No data recorded yet.");
        return Ok(());
    }

    header("Locations");
    for loc in query::distinct_locations(&records) {
        println!("  {loc}");
    }

    header("Dates");
    for d in query::distinct_dates(&records) {
        println!("  {d}");
    }
    Ok(())
}

/// `map`: known locations in the selection with their record counts.
pub fn handle_map(filter: &FilterArgs, cfg: &Config) -> AppResult<()> {
    let Some(view) = load_view(filter, cfg)? else {
        return Ok(());
    };

    header("📍 Location Map");
    if view.map.is_empty() {
        info("No location coordinates found for the selected data.");
        return Ok(());
    }

    print!("{}", map_table(&view.map).render());
    println!("Showing known monitoring locations based on your selection.");
    Ok(())
}

/// `stats`: total metric plus the per-species bar chart.
pub fn handle_stats(filter: &FilterArgs, cfg: &Config) -> AppResult<()> {
    let Some(view) = load_view(filter, cfg)? else {
        return Ok(());
    };

    println!();
    metric(
        "Total Birds Counted (Selection)",
        group_thousands(view.total),
    );

    if view.species.is_empty() {
        return Ok(());
    }

    header("Counts by Species");
    for line in species_chart(&view.species, cfg.bar_width) {
        println!("{line}");
    }
    Ok(())
}

fn records_table(records: &[SurveyRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Location", 20),
        Column::new("Recorder", 14),
        Column::new("Time", 11),
        Column::new("Species", 28),
        Column::new("≤50m", 5),
        Column::new(">50m", 5),
        Column::new("Fly", 5),
        Column::new("Conditions", 24),
        Column::new("Notes", 30),
    ]);

    for r in records {
        let conditions = [&r.wind, &r.precipitation, &r.tide, &r.temperature]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        table.add_row(vec![
            r.date_str(),
            r.location.clone(),
            r.recorder.clone(),
            r.time_range_str(),
            r.species.clone(),
            r.count_le_50m.to_string(),
            r.count_gt_50m.to_string(),
            r.flythrough.to_string(),
            conditions,
            r.notes.clone(),
        ]);
    }
    table
}

fn map_table(points: &[MapPoint]) -> Table {
    let mut table = Table::new(vec![
        Column::new("Location", 40),
        Column::new("Lat", 10),
        Column::new("Lon", 10),
        Column::new("Records", 8),
    ]);
    for p in points {
        table.add_row(vec![
            p.location.clone(),
            format!("{:.3}", p.lat),
            format!("{:.3}", p.lon),
            p.records.to_string(),
        ]);
    }
    table
}

/// One line per species: name, bar, total. Rows arrive sorted already.
pub fn species_chart(species: &[SpeciesTotal], width: usize) -> Vec<String> {
    let max = species.iter().map(|s| s.total).max().unwrap_or(0);
    let name_w = species
        .iter()
        .map(|s| UnicodeWidthStr::width(s.species.as_str()))
        .max()
        .unwrap_or(0);
    let total_w = max.to_string().len();

    species
        .iter()
        .map(|s| {
            format!(
                "{} {} {}",
                pad_right(&s.species, name_w),
                pad_left(&s.total.to_string(), total_w),
                bold(&bar(s.total, max, width))
            )
        })
        .collect()
}
