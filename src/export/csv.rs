use crate::export::model::SiteExport;
use csv::Writer;

/// Write site rows as CSV to the given file.
pub(crate) fn write_csv(path: &str, sites: &[SiteExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "status",
        "assigned_to",
        "comment",
        "photos",
        "start_time",
        "done_time",
        "created_at",
    ])?;

    for s in sites {
        wtr.write_record(&[
            s.id.clone(),
            s.name.clone(),
            s.status.clone(),
            s.assigned_to.clone(),
            s.comment.clone(),
            s.photos.to_string(),
            s.start_time.clone(),
            s.done_time.clone(),
            s.created_at.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
