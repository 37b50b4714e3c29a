use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SpeciesCatalog;
use crate::utils::table::{Column, Table};

/// `species`: the configured catalogue with its AOU codes.
pub fn handle_species(cfg: &Config) -> AppResult<()> {
    if cfg.species.is_empty() {
        println!("No species configured.");
        return Ok(());
    }

    let mut table = Table::new(vec![Column::new("Code", 6), Column::new("Species", 48)]);
    for name in cfg.species.names() {
        let code = SpeciesCatalog::code_of(name).unwrap_or("");
        table.add_row(vec![code.to_string(), name.clone()]);
    }
    print!("{}", table.render());
    Ok(())
}

/// `locations`: sites that can be placed on the map.
pub fn handle_locations(cfg: &Config) -> AppResult<()> {
    if cfg.known_locations.is_empty() {
        println!("No known locations configured.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("Location", 40),
        Column::new("Lat", 10),
        Column::new("Lon", 10),
    ]);
    for loc in cfg.known_locations.iter() {
        table.add_row(vec![
            loc.name.clone(),
            format!("{:.3}", loc.lat),
            format!("{:.3}", loc.lon),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
