use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::schema::SCHEMA_VERSION;
use crate::store::RecordStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the CSV data file, header row only, unless it already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let data_path = Config::init_all(cli.data.clone(), cli.test)?;

    println!("⚙️  Initializing rBirdlog…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!(
        "🗃️  Data file   : {} (schema v{SCHEMA_VERSION})",
        data_path.display()
    );

    let store = RecordStore::new(&data_path);
    if store.init()? {
        println!("✅ Data file created at {}", data_path.display());
    } else {
        println!("ℹ️  Data file already present, left untouched");
    }

    let cfg = Config {
        data_file: data_path.to_string_lossy().to_string(),
        ..Config::default()
    };
    ttlog_quiet(
        &cfg.log_path(),
        "init",
        &cfg.data_file,
        "Data file initialized",
    );

    println!("🎉 rBirdlog initialization completed!");
    Ok(())
}
