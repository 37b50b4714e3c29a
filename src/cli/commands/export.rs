use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::ttlog_quiet;
use crate::core::view::SurveyView;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let store = RecordStore::new(&cfg.data_file);
        let view = SurveyView::load(&store, &filter.to_filter()?, &cfg.known_locations)?;

        let written = ExportLogic::export(&view, *format, file, &cfg.project_title, *force)?;

        if let Some((path, fmt)) = written {
            ttlog_quiet(
                &cfg.log_path(),
                "export",
                &path.to_string_lossy(),
                &format!("Exported {} records ({})", view.records.len(), fmt.as_str()),
            );
        }
    }
    Ok(())
}
