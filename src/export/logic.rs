use super::{ExportFormat, fs_utils, notify_export_success};
use crate::db::pool::DbPool;
use crate::db::queries::load_sites;
use crate::errors::AppResult;
use crate::export::model::SiteExport;
use crate::models::status::Status;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        status: Option<Status>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        fs_utils::prepare_destination(path, force)?;

        let rows: Vec<SiteExport> = load_sites(pool)?
            .iter()
            .filter(|s| status.is_none_or(|wanted| s.status == wanted))
            .map(SiteExport::from_site)
            .collect();

        match format {
            ExportFormat::Csv => super::csv::write_csv(file, &rows)?,
            ExportFormat::Json => super::json::write_json(file, &rows)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}
