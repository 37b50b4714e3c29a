use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, SubmitOutcome, parse_species_entry};
use crate::core::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::FieldConditions;
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_time_or_now;

/// Save one visit: field conditions plus every species with a count.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        location,
        recorder,
        start,
        end,
        wind,
        precip,
        tide,
        temp,
        species,
    } = cmd
    {
        //
        // 1. Field conditions
        //
        let d = match date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
            None => date::today(),
        };

        let conditions = FieldConditions {
            date: d,
            location: location.trim().to_string(),
            recorder: recorder.clone(),
            start_time: parse_time_or_now(start.as_ref())?,
            end_time: parse_time_or_now(end.as_ref())?,
            wind: wind.clone(),
            precipitation: precip.clone(),
            tide: tide.clone(),
            temperature: temp.clone(),
        };

        //
        // 2. Species grid
        //
        let entries = species
            .iter()
            .map(|raw| parse_species_entry(raw, &cfg.species))
            .collect::<AppResult<Vec<_>>>()?;

        //
        // 3. Append
        //
        let store = RecordStore::new(&cfg.data_file);

        if !cfg.known_locations.contains(&conditions.location)
            && entries.iter().any(|e| e.has_counts())
        {
            warning(format!(
                "'{}' has no coordinates configured: it will not appear on the map.",
                conditions.location
            ));
        }

        match AddLogic::apply(&store, &conditions, &entries)? {
            SubmitOutcome::NothingToSave => {
                warning("No bird counts entered!");
            }
            SubmitOutcome::Saved {
                species: n,
                total_rows,
            } => {
                success(format!("Saved {n} species records for {d}!"));

                ttlog_quiet(
                    &cfg.log_path(),
                    "add",
                    &format!("{} {}", d, conditions.location),
                    &format!("{n} species records, store now {total_rows} rows"),
                );
            }
        }
    }

    Ok(())
}
